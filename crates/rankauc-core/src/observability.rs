// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

/// Receiver for intermediate values produced while a ranking is evaluated.
///
/// Keys are static so sinks can match on them without allocating. Only
/// `record_scalar` is required; sequence hooks default to no-ops.
pub trait TraceSink {
    fn record_scalar(&self, key: &'static str, value: f64);

    fn record_counts(&self, key: &'static str, values: &[usize]) {
        let _ = (key, values);
    }

    fn record_curve(&self, key: &'static str, values: &[f64]) {
        let _ = (key, values);
    }
}

impl<T: TraceSink + ?Sized> TraceSink for &T {
    fn record_scalar(&self, key: &'static str, value: f64) {
        (**self).record_scalar(key, value);
    }

    fn record_counts(&self, key: &'static str, values: &[usize]) {
        (**self).record_counts(key, values);
    }

    fn record_curve(&self, key: &'static str, values: &[f64]) {
        (**self).record_curve(key, values);
    }
}
