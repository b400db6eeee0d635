// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

pub mod context;
pub mod error;
pub mod observability;

pub use context::EvalContext;
pub use error::RankAucError;
pub use observability::TraceSink;
