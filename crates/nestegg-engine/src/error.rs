//! Engine error types.

use nestegg_portfolio::PortfolioError;
use nestegg_traits::TraitError;
use thiserror::Error;
use uuid::Uuid;

/// Engine error type.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Storage error
    #[error("storage error: {0}")]
    StorageError(String),

    /// Holding not found
    #[error("holding not found: {0}")]
    HoldingNotFound(String),

    /// Invalid input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Analysis failed (including "no assets")
    #[error(transparent)]
    Analysis(#[from] PortfolioError),

    /// The transaction was recorded but the holding could not be removed.
    ///
    /// The transaction is kept; the holding has to be removed by hand.
    #[error("transaction {transaction_id} recorded but holding was not removed: {reason}")]
    PartialClose {
        /// The persisted transaction.
        transaction_id: Uuid,
        /// Why the delete failed.
        reason: String,
    },

    /// Timeout
    #[error("timeout")]
    Timeout,
}

impl EngineError {
    /// Returns true for the "nothing to analyze" outcome.
    pub fn is_no_assets(&self) -> bool {
        matches!(self, Self::Analysis(e) if e.is_no_assets())
    }
}

/// Store errors in general. A `NotFound` only means a missing holding when
/// it comes from a holding lookup, which the service maps itself.
impl From<TraitError> for EngineError {
    fn from(e: TraitError) -> Self {
        match e {
            TraitError::Timeout => EngineError::Timeout,
            TraitError::InvalidInput(msg) => EngineError::InvalidInput(msg),
            other => EngineError::StorageError(other.to_string()),
        }
    }
}

impl From<nestegg_core::CoreError> for EngineError {
    fn from(e: nestegg_core::CoreError) -> Self {
        EngineError::InvalidInput(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_trait_error() {
        assert!(matches!(EngineError::from(TraitError::Timeout), EngineError::Timeout));
        assert!(matches!(
            EngineError::from(TraitError::DatabaseError("locked".into())),
            EngineError::StorageError(ref m) if m.contains("locked")
        ));
        assert!(matches!(
            EngineError::from(TraitError::NotFound("transactions for u1".into())),
            EngineError::StorageError(ref m) if m.contains("transactions for u1")
        ));
    }

    #[test]
    fn test_no_assets() {
        assert!(EngineError::from(PortfolioError::NoAssetsFound).is_no_assets());
        assert!(!EngineError::Timeout.is_no_assets());
    }
}
