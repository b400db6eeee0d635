// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::integrate::normalized_auc;
use rankauc_core::RankAucError;

/// Largest amount a closed-form AUC may exceed the integral of its own curve.
pub const CLOSED_FORM_TOLERANCE: f64 = 1e-6;

/// Reference curves and their closed-form AUCs for a ranking of `n` items with
/// `P` positives.
#[derive(Clone, Debug, PartialEq)]
pub struct Baselines {
    pub population_proportion: f64,
    pub y_expected_case: Vec<f64>,
    pub auc_expected_case: f64,
    pub y_worst_case: Vec<f64>,
    pub auc_worst_case: f64,
}

impl Baselines {
    /// Generates both reference curves over `x` and checks each closed form
    /// against the trapezoidal integral of its curve.
    pub fn compute(x: &[usize], total_positive: usize) -> Result<Self, RankAucError> {
        let n = x.len();
        let y_expected_case = expected_case_curve(n, total_positive)?;
        let y_worst_case = worst_case_curve(n, total_positive)?;
        let auc_expected_case = expected_case_auc(n, total_positive);
        let auc_worst_case = worst_case_auc(n, total_positive);

        check_closed_form("expected-case", auc_expected_case, x, &y_expected_case)?;
        check_closed_form("worst-case", auc_worst_case, x, &y_worst_case)?;

        Ok(Self {
            population_proportion: population_proportion(total_positive, n),
            y_expected_case,
            auc_expected_case,
            y_worst_case,
            auc_worst_case,
        })
    }
}

/// Fraction of items that are positive, `P / n`.
pub fn population_proportion(total_positive: usize, n: usize) -> f64 {
    total_positive as f64 / n as f64
}

/// `num` evenly spaced values from `start` to `stop`, both inclusive.
///
/// Values are `start + i * step`; the last one is pinned to `stop`.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut values = (0..num)
                .map(|i| i as f64 * step + start)
                .collect::<Vec<_>>();
            values[num - 1] = stop;
            values
        }
    }
}

/// Curve for positives spread evenly through the ranking.
///
/// Flat at `P / n` for the first `P - 1` ranks, then a linear ramp of
/// `n - P + 1` points from `P / n` to `1`.
pub fn expected_case_curve(n: usize, total_positive: usize) -> Result<Vec<f64>, RankAucError> {
    check_population(n, total_positive)?;
    let proportion = population_proportion(total_positive, n);
    let mut curve = vec![proportion; total_positive - 1];
    curve.extend(linspace(proportion, 1.0, n - total_positive + 1));
    Ok(curve)
}

/// Curve for positives pushed to the end of the ranking.
///
/// Flat at `0` for the first `n - P - 1` ranks, then a linear ramp of `P + 1`
/// points from `0` to `1`.
pub fn worst_case_curve(n: usize, total_positive: usize) -> Result<Vec<f64>, RankAucError> {
    check_population(n, total_positive)?;
    let mut curve = vec![0.0; n - total_positive - 1];
    curve.extend(linspace(0.0, 1.0, total_positive + 1));
    Ok(curve)
}

/// Closed-form AUC assigned to the expected case:
/// `0.5 + ((P - 1) * (P / n) / 2) / (n - 1)`.
pub fn expected_case_auc(n: usize, total_positive: usize) -> f64 {
    let proportion = population_proportion(total_positive, n);
    0.5 + ((total_positive as f64 - 1.0) * proportion / 2.0) / (n as f64 - 1.0)
}

/// Closed-form AUC of the worst case: `(P / 2) / (n - 1)`.
pub fn worst_case_auc(n: usize, total_positive: usize) -> f64 {
    (total_positive as f64 / 2.0) / (n as f64 - 1.0)
}

fn check_population(n: usize, total_positive: usize) -> Result<(), RankAucError> {
    if total_positive == 0 || total_positive >= n {
        return Err(RankAucError::invalid_input(format!(
            "baselines require 0 < total_positive < n; got total_positive={total_positive}, n={n}"
        )));
    }
    Ok(())
}

// One-sided: the expected-case closed form sits below its integral by
// (1 - P/n) / (2(n - 1)); only an excess is a defect.
fn check_closed_form(
    name: &str,
    closed_form: f64,
    x: &[usize],
    curve: &[f64],
) -> Result<(), RankAucError> {
    let integrated = normalized_auc(x, curve)?;
    if closed_form - integrated < CLOSED_FORM_TOLERANCE {
        return Ok(());
    }
    Err(RankAucError::internal_consistency(format!(
        "{name} closed-form AUC {closed_form} exceeds integrated AUC {integrated} by more than {CLOSED_FORM_TOLERANCE}"
    )))
}

#[cfg(test)]
mod tests {
    use super::{
        Baselines, check_closed_form, expected_case_auc, expected_case_curve, linspace,
        population_proportion, worst_case_auc, worst_case_curve,
    };
    use crate::integrate::{normalized_auc, positions};

    fn assert_approx_eq(actual: f64, expected: f64) {
        let delta = (actual - expected).abs();
        assert!(
            delta <= 1e-12,
            "expected {expected}, got {actual} (delta={delta})"
        );
    }

    fn assert_curve_approx_eq(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "curve lengths differ");
        for (a, e) in actual.iter().zip(expected) {
            assert_approx_eq(*a, *e);
        }
    }

    #[test]
    fn linspace_includes_both_endpoints() {
        assert_curve_approx_eq(&linspace(0.4, 1.0, 4), &[0.4, 0.6, 0.8, 1.0]);
        assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn linspace_pins_last_value_to_stop() {
        for num in 2..40 {
            let values = linspace(1.0 / 3.0, 1.0, num);
            assert_eq!(values.len(), num);
            assert_eq!(values[num - 1], 1.0);
        }
    }

    #[test]
    fn linspace_degenerate_lengths() {
        assert!(linspace(0.2, 1.0, 0).is_empty());
        assert_eq!(linspace(0.2, 1.0, 1), vec![0.2]);
    }

    #[test]
    fn expected_case_curve_matches_hand_computed_values() {
        let curve = expected_case_curve(5, 2).expect("valid population");
        assert_curve_approx_eq(&curve, &[0.4, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(curve[4], 1.0);
    }

    #[test]
    fn expected_case_curve_with_single_positive_is_all_ramp() {
        let curve = expected_case_curve(4, 1).expect("valid population");
        assert_curve_approx_eq(&curve, &[0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn worst_case_curve_matches_hand_computed_values() {
        let curve = worst_case_curve(5, 2).expect("valid population");
        assert_eq!(curve, vec![0.0, 0.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn worst_case_curve_with_single_negative_is_all_ramp() {
        let curve = worst_case_curve(4, 3).expect("valid population");
        assert_curve_approx_eq(&curve, &[0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0]);
    }

    #[test]
    fn curves_reject_single_class_populations() {
        assert!(expected_case_curve(5, 0).is_err());
        assert!(expected_case_curve(5, 5).is_err());
        assert!(worst_case_curve(5, 0).is_err());
        assert!(worst_case_curve(5, 5).is_err());
    }

    #[test]
    fn closed_forms_match_hand_computed_values() {
        assert_approx_eq(population_proportion(2, 5), 0.4);
        assert_approx_eq(expected_case_auc(5, 2), 0.55);
        assert_approx_eq(worst_case_auc(5, 2), 0.25);
    }

    #[test]
    fn worst_case_closed_form_equals_integral() {
        for n in 2..30 {
            for total in 1..n {
                let x = positions(n);
                let curve = worst_case_curve(n, total).expect("valid population");
                let integrated = normalized_auc(&x, &curve).expect("valid curve");
                assert!((worst_case_auc(n, total) - integrated).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn expected_case_closed_form_trails_integral_by_fixed_gap() {
        for n in 2..30 {
            for total in 1..n {
                let x = positions(n);
                let curve = expected_case_curve(n, total).expect("valid population");
                let integrated = normalized_auc(&x, &curve).expect("valid curve");
                let proportion = population_proportion(total, n);
                let gap = (1.0 - proportion) / (2.0 * (n as f64 - 1.0));
                assert!((integrated - expected_case_auc(n, total) - gap).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn compute_assembles_both_baselines() {
        let baselines = Baselines::compute(&positions(5), 2).expect("valid population");
        assert_approx_eq(baselines.population_proportion, 0.4);
        assert_approx_eq(baselines.auc_expected_case, 0.55);
        assert_approx_eq(baselines.auc_worst_case, 0.25);
        assert_eq!(baselines.y_worst_case, vec![0.0, 0.0, 0.0, 0.5, 1.0]);
        assert_eq!(baselines.y_expected_case.len(), 5);
    }

    #[test]
    fn check_closed_form_flags_excess_as_internal_consistency() {
        let x = positions(3);
        let err = check_closed_form("worst-case", 0.9, &x, &[0.0, 0.5, 1.0])
            .expect_err("closed form far above integral should fail");
        assert_eq!(err.code(), "internal_consistency");
        assert!(!err.is_input_error());
        assert!(err.to_string().contains("worst-case closed-form AUC 0.9"));
    }

    #[test]
    fn check_closed_form_accepts_values_within_tolerance() {
        let x = positions(3);
        check_closed_form("worst-case", 0.5 + 5e-7, &x, &[0.0, 0.5, 1.0])
            .expect("excess below tolerance should pass");
    }
}
