// File: crates/chart-model/src/error.rs
// Summary: Error type for the coordinate and composition model.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    /// Malformed caller input: empty or duplicated axis index lists, clearing the
    /// primary axis location, a parent chain that would loop back on itself.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A range that an axis cannot display (empty, reversed, non-finite, or
    /// non-positive on a log scale).
    #[error("invalid range [{lower}, {upper}]")]
    InvalidRange { lower: f64, upper: f64 },
}

impl PlotError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;
