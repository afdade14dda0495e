//! Error types for portfolio analytics.

use nestegg_core::CoreError;
use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// The holdings list was empty.
    ///
    /// This is an expected outcome ("nothing to analyze"), not a zero-valued
    /// portfolio.
    #[error("No assets found in portfolio")]
    NoAssetsFound,

    /// Risk profile outside 1..=4.
    #[error("Risk profile must be between 1 and 4, got {value}")]
    InvalidRiskProfile {
        /// The rejected value.
        value: u8,
    },

    /// A portfolio-level sum does not fit in a decimal.
    #[error("Arithmetic overflow computing {field}")]
    Overflow {
        /// The aggregate being computed.
        field: &'static str,
    },

    /// Invalid domain input.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PortfolioError {
    /// Returns true for the "nothing to analyze" outcome.
    #[must_use]
    pub fn is_no_assets(&self) -> bool {
        matches!(self, Self::NoAssetsFound)
    }
}
