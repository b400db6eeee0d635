// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use rankauc_core::RankAucError;

/// Rank positions `1..=n` used as the x-axis of every curve.
pub fn positions(n: usize) -> Vec<usize> {
    (1..=n).collect()
}

/// Trapezoidal area under `y` over `x`.
pub fn trapezoid_area(x: &[usize], y: &[f64]) -> Result<f64, RankAucError> {
    validate_curve(x, y)?;
    let area = x
        .windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) as f64 * (ys[0] + ys[1]) / 2.0)
        .sum::<f64>();
    Ok(area)
}

/// Trapezoidal area divided by the x-range, mapping a `[0, 1]` curve into
/// `[0, 1]` independently of its length.
pub fn normalized_auc(x: &[usize], y: &[f64]) -> Result<f64, RankAucError> {
    let area = trapezoid_area(x, y)?;
    let span = x[x.len() - 1] - x[0];
    Ok(area / span as f64)
}

fn validate_curve(x: &[usize], y: &[f64]) -> Result<(), RankAucError> {
    if x.len() != y.len() {
        return Err(RankAucError::invalid_input(format!(
            "curve x and y must have the same length; got x={}, y={}",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(RankAucError::invalid_input(format!(
            "curve needs at least 2 points to integrate; got {}",
            x.len()
        )));
    }
    for index in 1..x.len() {
        if x[index - 1] >= x[index] {
            return Err(RankAucError::invalid_input(format!(
                "curve x must be strictly increasing; x[{}]={} and x[{index}]={}",
                index - 1,
                x[index - 1],
                x[index],
            )));
        }
    }
    Ok(())
}
