// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

#[cfg(feature = "serde")]
use rankauc_core::RankAucError;

/// Options for one ranking evaluation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankingAucConfig {
    /// `true` for similarities and probabilities, `false` for distances.
    pub greater_is_better: bool,
    /// Rank (1-based) at which to report coverage. Never changes the curves.
    pub top_k: Option<usize>,
}

impl Default for RankingAucConfig {
    fn default() -> Self {
        Self {
            greater_is_better: true,
            top_k: None,
        }
    }
}

impl RankingAucConfig {
    pub fn with_greater_is_better(mut self, greater_is_better: bool) -> Self {
        self.greater_is_better = greater_is_better;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// Parses a JSON config; omitted fields take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(raw: &str) -> Result<Self, RankAucError> {
        serde_json::from_str(raw)
            .map_err(|err| RankAucError::invalid_input(format!("invalid ranking config JSON: {err}")))
    }
}
