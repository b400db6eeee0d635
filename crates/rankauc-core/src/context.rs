// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::observability::TraceSink;

/// Evaluation context passed through the ranking pipeline.
#[derive(Clone, Copy, Default)]
pub struct EvalContext<'a> {
    pub trace: Option<&'a dyn TraceSink>,
}

impl<'a> EvalContext<'a> {
    /// Creates a context with no optional hooks.
    pub fn new() -> Self {
        Self { trace: None }
    }

    /// Sets an optional trace sink.
    pub fn with_trace_sink(mut self, trace: &'a dyn TraceSink) -> Self {
        self.trace = Some(trace);
        self
    }

    /// Returns true when a trace sink is attached.
    pub fn is_tracing(&self) -> bool {
        self.trace.is_some()
    }

    /// Emits a scalar to the sink, if configured.
    pub fn record_scalar(&self, key: &'static str, value: f64) {
        if let Some(sink) = self.trace {
            sink.record_scalar(key, value);
        }
    }

    /// Emits an integer sequence to the sink, if configured.
    pub fn record_counts(&self, key: &'static str, values: &[usize]) {
        if let Some(sink) = self.trace {
            sink.record_counts(key, values);
        }
    }

    /// Emits a curve to the sink, if configured.
    pub fn record_curve(&self, key: &'static str, values: &[f64]) {
        if let Some(sink) = self.trace {
            sink.record_curve(key, values);
        }
    }
}

impl std::fmt::Debug for EvalContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvalContext")
            .field("tracing", &self.is_tracing())
            .finish()
    }
}
