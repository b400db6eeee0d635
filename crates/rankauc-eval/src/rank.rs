// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use std::cmp::Ordering;

/// Scored input item.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample<L> {
    pub score: f64,
    pub label: L,
}

impl<L> Sample<L> {
    pub fn new(score: f64, label: L) -> Self {
        Self { score, label }
    }
}

/// Sample position after ranking by effective score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankedSample {
    /// Position of the sample in the caller's input.
    pub index: usize,
    pub effective_score: f64,
    pub is_positive: bool,
}

/// Maps a raw score onto the "higher ranks first" scale.
///
/// Distance-like scores (`greater_is_better == false`) are negated so the
/// nearest item has the largest effective score.
pub fn effective_score(score: f64, greater_is_better: bool) -> f64 {
    if greater_is_better { score } else { -score }
}

/// Orders samples by effective score, best first.
///
/// The sort is stable: samples with equal effective scores keep their input
/// order. `-0.0` and `0.0` tie. Scores must already be validated as finite.
pub fn rank_samples(
    scores: &[f64],
    positives: &[bool],
    greater_is_better: bool,
) -> Vec<RankedSample> {
    let mut ranked = scores
        .iter()
        .zip(positives)
        .enumerate()
        .map(|(index, (&score, &is_positive))| RankedSample {
            index,
            effective_score: effective_score(score, greater_is_better),
            is_positive,
        })
        .collect::<Vec<_>>();
    ranked.sort_by(|left, right| descending(left.effective_score, right.effective_score));
    ranked
}

fn descending(left: f64, right: f64) -> Ordering {
    right.partial_cmp(&left).unwrap_or(Ordering::Equal)
}
