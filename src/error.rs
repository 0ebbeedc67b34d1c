//! Error types for curve reordering.
//!
//! The reorderer is a pure computation, so every failure here is a caller
//! mistake surfaced before any work is done. File and configuration glue
//! around it uses `anyhow` instead.

use thiserror::Error;

/// Result type alias for reordering operations
pub type Result<T> = std::result::Result<T, ReorderError>;

/// Failures of the curve reorderer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReorderError {
    /// Nothing to reorder
    #[error("cannot reorder an empty sequence")]
    EmptyInput,

    /// A score was NaN or infinite
    #[error("score at position {position} is not finite: {score}")]
    NonFiniteScore {
        /// 0-based position of the offending item in the input
        position: usize,
        /// The rejected value
        score: f64,
    },

    /// Curve selector outside the six known shapes
    #[error("unknown curve selector `{0}` (expected 1-6 or one of: positive-linear, negative-linear, positive-quadratic, negative-quadratic, positive-cubic, negative-cubic)")]
    InvalidSelector(String),
}

impl ReorderError {
    /// True for the input-validation class (empty or non-finite).
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::NonFiniteScore { .. })
    }
}
