// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::rank::RankedSample;
use crate::result::TopKCoverage;
use rankauc_core::RankAucError;

/// Per-rank positive counts over a ranking of `n` items with `P` positives.
///
/// Both sequences are 0-indexed here: entry `i` describes the first `i + 1`
/// ranked items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CumulativeCounts {
    /// Positives found among the first `i + 1` ranked items.
    pub ranked_matches: Vec<usize>,
    /// Best attainable count for the first `i + 1` items: `min(i + 1, P)`.
    pub possible_matches: Vec<usize>,
    pub total_positive: usize,
}

impl CumulativeCounts {
    /// Builds both sequences from a ranking produced by [`crate::rank_samples`].
    pub fn from_ranking(
        ranked: &[RankedSample],
        total_positive: usize,
    ) -> Result<Self, RankAucError> {
        Self::from_positive_flags(ranked.iter().map(|sample| sample.is_positive), total_positive)
    }

    /// Builds both sequences from positive flags listed in ranked order.
    pub fn from_positive_flags<I>(flags: I, total_positive: usize) -> Result<Self, RankAucError>
    where
        I: IntoIterator<Item = bool>,
    {
        if total_positive == 0 {
            return Err(RankAucError::invalid_input(
                "cumulative counts require at least one positive",
            ));
        }

        let mut ranked_matches = Vec::new();
        let mut running = 0usize;
        for is_positive in flags {
            running += usize::from(is_positive);
            ranked_matches.push(running);
        }

        if running != total_positive {
            return Err(RankAucError::invalid_input(format!(
                "ranking holds {running} positives but total_positive={total_positive}"
            )));
        }

        let possible_matches = (1..=ranked_matches.len())
            .map(|rank| rank.min(total_positive))
            .collect();

        Ok(Self {
            ranked_matches,
            possible_matches,
            total_positive,
        })
    }

    pub fn len(&self) -> usize {
        self.ranked_matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked_matches.is_empty()
    }

    /// Ranked curve: found positives over the best attainable count at each rank.
    ///
    /// For ranks up to `P` the denominator is the rank itself; past `P` it
    /// saturates at `P`, so the final entry is exactly `1.0`.
    pub fn recall_curve(&self) -> Vec<f64> {
        self.ranked_matches
            .iter()
            .zip(&self.possible_matches)
            .map(|(&found, &possible)| found as f64 / possible as f64)
            .collect()
    }

    /// Conventional recall: found positives over all `P` positives.
    pub fn recall_from_total(&self) -> Vec<f64> {
        let total = self.total_positive as f64;
        self.ranked_matches
            .iter()
            .map(|&found| found as f64 / total)
            .collect()
    }

    /// Coverage statistics for the first `k` ranked items (1-based `k`).
    pub fn coverage_at(&self, k: usize) -> Result<TopKCoverage, RankAucError> {
        if k == 0 || k > self.len() {
            return Err(RankAucError::out_of_range(format!(
                "top_k must be in 1..={}; got top_k={k}",
                self.len()
            )));
        }

        let ranked_matches = self.ranked_matches[k - 1];
        let possible_matches = self.possible_matches[k - 1];
        Ok(TopKCoverage {
            k,
            ranked_matches,
            possible_matches,
            coverage_of_total: ranked_matches as f64 / self.total_positive as f64,
            coverage_of_possible: ranked_matches as f64 / possible_matches as f64,
        })
    }
}
