// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

fn lcg_next(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state
}

/// Deterministic scores and 0/1 labels for benchmarking.
///
/// Roughly one item in eight is positive, and positives score higher on
/// average. The first item is always positive and the last always negative,
/// so any `n >= 2` yields a valid ranking.
pub fn synthetic_ranking(n: usize, seed: u64) -> (Vec<f64>, Vec<u8>) {
    let mut state = seed;
    let mut scores = Vec::with_capacity(n);
    let mut labels = Vec::with_capacity(n);

    for _ in 0..n {
        let is_positive = lcg_next(&mut state) % 8 == 0;
        let noise = (lcg_next(&mut state) >> 11) as f64 / (1u64 << 53) as f64;
        scores.push(if is_positive { 0.3 + noise } else { noise });
        labels.push(u8::from(is_positive));
    }
    if n >= 2 {
        labels[0] = 1;
        labels[n - 1] = 0;
    }

    (scores, labels)
}
