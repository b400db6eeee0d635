// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::baseline::Baselines;
use crate::render::RankingCurves;

/// Positive coverage within the first `k` ranked items.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct TopKCoverage {
    pub k: usize,
    pub ranked_matches: usize,
    pub possible_matches: usize,
    /// `ranked_matches / P`.
    pub coverage_of_total: f64,
    /// `ranked_matches / possible_matches`, the ranked curve at rank `k`.
    pub coverage_of_possible: f64,
}

/// Curves, normalized AUCs and population statistics of one evaluated ranking.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct RankingAucResult {
    pub x: Vec<usize>,
    pub y: Vec<f64>,
    pub average_y: f64,
    pub y_expected_case: Vec<f64>,
    pub y_worst_case: Vec<f64>,
    pub auc: f64,
    pub auc_expected_case: f64,
    pub auc_worst_case: f64,
    pub population_proportion: f64,
    pub total_possible_matches: usize,
    pub n_elements: usize,
    pub top_k: Option<TopKCoverage>,
}

impl RankingAucResult {
    /// Packages already-computed parts; performs no computation beyond the mean
    /// of `y`.
    pub fn assemble(
        x: Vec<usize>,
        y: Vec<f64>,
        auc: f64,
        baselines: Baselines,
        total_possible_matches: usize,
        top_k: Option<TopKCoverage>,
    ) -> Self {
        let n_elements = x.len();
        let average_y = mean(&y);
        Self {
            x,
            y,
            average_y,
            y_expected_case: baselines.y_expected_case,
            y_worst_case: baselines.y_worst_case,
            auc,
            auc_expected_case: baselines.auc_expected_case,
            auc_worst_case: baselines.auc_worst_case,
            population_proportion: baselines.population_proportion,
            total_possible_matches,
            n_elements,
            top_k,
        }
    }

    /// Borrowed view with exactly what a curve renderer draws.
    pub fn curves(&self) -> RankingCurves<'_> {
        RankingCurves {
            x: &self.x,
            y: &self.y,
            y_expected_case: &self.y_expected_case,
            y_worst_case: &self.y_worst_case,
            auc: self.auc,
            auc_expected_case: self.auc_expected_case,
            auc_worst_case: self.auc_worst_case,
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::{RankingAucResult, TopKCoverage};
    use crate::baseline::Baselines;
    use crate::integrate::positions;

    fn scenario_result(top_k: Option<TopKCoverage>) -> RankingAucResult {
        let baselines = Baselines::compute(&positions(5), 2).expect("valid population");
        RankingAucResult::assemble(
            positions(5),
            vec![1.0, 0.5, 1.0, 1.0, 1.0],
            0.875,
            baselines,
            2,
            top_k,
        )
    }

    #[test]
    fn assemble_copies_parts_and_averages_y() {
        let result = scenario_result(None);
        assert_eq!(result.x, vec![1, 2, 3, 4, 5]);
        assert_eq!(result.n_elements, 5);
        assert_eq!(result.total_possible_matches, 2);
        assert!((result.average_y - 0.9).abs() < 1e-12);
        assert_eq!(result.auc, 0.875);
        assert_eq!(result.y_worst_case, vec![0.0, 0.0, 0.0, 0.5, 1.0]);
        assert!(result.top_k.is_none());
    }

    #[test]
    fn assemble_keeps_top_k_report_untouched() {
        let coverage = TopKCoverage {
            k: 3,
            ranked_matches: 2,
            possible_matches: 2,
            coverage_of_total: 1.0,
            coverage_of_possible: 1.0,
        };
        let result = scenario_result(Some(coverage.clone()));
        assert_eq!(result.top_k, Some(coverage));
    }

    #[test]
    fn curves_borrow_result_fields() {
        let result = scenario_result(None);
        let curves = result.curves();
        assert!(std::ptr::eq(curves.x, result.x.as_slice()));
        assert!(std::ptr::eq(curves.y, result.y.as_slice()));
        assert_eq!(curves.auc_expected_case, result.auc_expected_case);
        assert_eq!(curves.auc_worst_case, result.auc_worst_case);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn result_serde_roundtrip() {
        let result = scenario_result(Some(TopKCoverage {
            k: 1,
            ranked_matches: 1,
            possible_matches: 1,
            coverage_of_total: 0.5,
            coverage_of_possible: 1.0,
        }));
        let encoded = serde_json::to_string(&result).expect("result should serialize");
        let decoded: RankingAucResult =
            serde_json::from_str(&encoded).expect("result should deserialize");
        assert_eq!(decoded, result);
    }
}
