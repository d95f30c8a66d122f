//! Error types for circstat.

use thiserror::Error;

/// Result alias for circstat operations.
pub type CircStatResult<T> = std::result::Result<T, CircStatError>;

/// Errors that can occur when computing circular statistics.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CircStatError {
    /// A range identifier did not name one of the four canonical ranges.
    #[error("invalid angle range: {tag}")]
    InvalidRangeTag {
        /// The rejected identifier as given by the caller.
        tag: String,
    },
    /// Paired sequences have different lengths.
    #[error("length mismatch: x has {x_len} values, y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },
    /// A sequence that must be non-empty was empty.
    #[error("empty input: {context}")]
    EmptyInput { context: &'static str },
    /// The residuals of at least one sequence have zero energy.
    #[error("degenerate correlation: residual sum of squares is zero")]
    DegenerateCorrelation,
}
