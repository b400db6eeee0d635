// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use rankauc_core::RankAucError;
use std::fmt::Debug;

/// Checks that scores and labels pair up one-to-one and that every score can
/// be ranked.
pub fn validate_inputs<L>(scores: &[f64], labels: &[L]) -> Result<usize, RankAucError> {
    if scores.len() != labels.len() {
        return Err(RankAucError::invalid_input(format!(
            "scores and labels must have the same length; got scores={}, labels={}",
            scores.len(),
            labels.len()
        )));
    }

    for (index, score) in scores.iter().enumerate() {
        if !score.is_finite() {
            return Err(RankAucError::invalid_input(format!(
                "scores must be finite; scores[{index}]={score}"
            )));
        }
    }

    Ok(scores.len())
}

/// Marks every label equal to `pos_label`.
pub fn positive_mask<L: PartialEq>(labels: &[L], pos_label: &L) -> Vec<bool> {
    labels.iter().map(|label| label == pos_label).collect()
}

/// Counts positives and rejects label distributions with a single class.
///
/// A successful return implies at least one positive and one negative, and
/// therefore `n >= 2`.
pub fn validate_label_distribution<L: Debug>(
    positives: &[bool],
    pos_label: &L,
) -> Result<usize, RankAucError> {
    let total_positive = positives.iter().filter(|&&is_positive| is_positive).count();
    if total_positive == 0 {
        return Err(RankAucError::no_positive_labels(format!(
            "no positive labels found for pos_label={pos_label:?}"
        )));
    }
    if total_positive == positives.len() {
        return Err(RankAucError::no_negative_labels(format!(
            "no negative labels found for pos_label={pos_label:?}"
        )));
    }
    Ok(total_positive)
}
