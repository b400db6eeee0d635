// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use std::fmt;

/// Error taxonomy shared by every rankauc crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RankAucError {
    /// No item carries the positive label.
    NoPositiveLabels(String),
    /// Every item carries the positive label.
    NoNegativeLabels(String),
    /// Caller-supplied data violates a precondition.
    InvalidInput(String),
    /// A requested index lies outside the computed curves.
    OutOfRange(String),
    /// A closed form and its numerically integrated curve disagree.
    InternalConsistency(String),
}

impl RankAucError {
    pub fn no_positive_labels(msg: impl Into<String>) -> Self {
        Self::NoPositiveLabels(msg.into())
    }

    pub fn no_negative_labels(msg: impl Into<String>) -> Self {
        Self::NoNegativeLabels(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }

    pub fn internal_consistency(msg: impl Into<String>) -> Self {
        Self::InternalConsistency(msg.into())
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoPositiveLabels(_) => "no_positive_labels",
            Self::NoNegativeLabels(_) => "no_negative_labels",
            Self::InvalidInput(_) => "invalid_input",
            Self::OutOfRange(_) => "out_of_range",
            Self::InternalConsistency(_) => "internal_consistency",
        }
    }

    /// Returns true when the caller can fix the error by changing its input.
    ///
    /// Only [`RankAucError::InternalConsistency`] signals a defect in the
    /// implementation itself.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::InternalConsistency(_))
    }
}

impl fmt::Display for RankAucError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPositiveLabels(msg) => write!(f, "no positive labels: {msg}"),
            Self::NoNegativeLabels(msg) => write!(f, "no negative labels: {msg}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::OutOfRange(msg) => write!(f, "out of range: {msg}"),
            Self::InternalConsistency(msg) => {
                write!(f, "internal consistency check failed: {msg}")
            }
        }
    }
}

impl std::error::Error for RankAucError {}
