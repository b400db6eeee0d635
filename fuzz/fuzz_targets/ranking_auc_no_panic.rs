// SPDX-License-Identifier: MIT OR Apache-2.0

#![no_main]

#[path = "common.rs"]
mod common;

use libfuzzer_sys::fuzz_target;
use rankauc_eval::{RankAucError, RankingAucConfig, ranking_auc};

fn build_score(cursor: &mut common::ByteCursor<'_>) -> f64 {
    match cursor.next_u8() % 8 {
        0 => cursor.next_f64(),
        1 => f64::NAN,
        2 => f64::INFINITY,
        3 => -0.0,
        4 => 0.0,
        _ => f64::from(cursor.next_i16()) / 16.0,
    }
}

fn build_top_k(seed: u8, value_seed: u8, n: usize) -> Option<usize> {
    match seed % 4 {
        0 => None,
        1 => Some(0),
        2 => Some(n.saturating_add(usize::from(value_seed % 4))),
        _ => Some(common::bounded(value_seed, 1, n.max(1))),
    }
}

fuzz_target!(|data: &[u8]| {
    let mut cursor = common::ByteCursor::new(data);

    let n = common::bounded(cursor.next_u8(), 0, 128);
    let label_classes = common::bounded(cursor.next_u8(), 1, 4) as u8;
    let pos_label = cursor.next_u8() % (label_classes + 1);
    let config = RankingAucConfig {
        greater_is_better: cursor.next_u8() & 1 == 0,
        top_k: build_top_k(cursor.next_u8(), cursor.next_u8(), n),
    };

    let mut scores = Vec::with_capacity(n);
    let mut labels = Vec::with_capacity(n);
    for _ in 0..n {
        scores.push(build_score(&mut cursor));
        labels.push(cursor.next_u8() % label_classes);
    }
    if cursor.next_u8() % 16 == 0 {
        labels.pop();
    }

    match ranking_auc(&scores, &labels, &pos_label, &config) {
        Ok(result) => {
            let last = result.n_elements - 1;
            assert_eq!(result.y[last], 1.0);
            assert_eq!(result.y_expected_case[last], 1.0);
            assert_eq!(result.y_worst_case[last], 1.0);
            assert!((0.0..=1.0).contains(&result.auc));
            assert!((0.0..=1.0).contains(&result.auc_expected_case));
            assert!((0.0..=1.0).contains(&result.auc_worst_case));
        }
        Err(err) => {
            assert!(
                !matches!(err, RankAucError::InternalConsistency(_)),
                "closed-form baseline diverged: {err}"
            );
        }
    }
});
