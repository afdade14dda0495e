//! Error types for growth projection.

use thiserror::Error;

/// A specialized Result type for projection operations.
pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Errors raised by the growth projector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// A parameter is outside its domain.
    #[error("Invalid projection parameter '{field}': {reason}")]
    InvalidParameters {
        /// The offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// The balance left the representable decimal range.
    #[error("Projection overflowed at month {month}")]
    Overflow {
        /// 1-based month at which arithmetic overflowed.
        month: u32,
    },
}

impl ProjectionError {
    /// Create an invalid parameter error.
    #[must_use]
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            field,
            reason: reason.into(),
        }
    }
}
