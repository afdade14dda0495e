//! Error types for the Nestegg core.
//!
//! Structured errors raised while constructing domain values.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Symbol was empty after trimming.
    #[error("Invalid symbol: '{value}'")]
    InvalidSymbol {
        /// The rejected input.
        value: String,
    },

    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// A numeric field carried a value outside its domain.
    #[error("Invalid holding '{symbol}': {field} must be non-negative, got {value}")]
    NegativeAmount {
        /// Symbol of the offending holding or transaction.
        symbol: String,
        /// The field name.
        field: String,
        /// The rejected value.
        value: Decimal,
    },

    /// An amount does not fit in a decimal.
    #[error("Arithmetic overflow computing {field} for '{symbol}'")]
    Overflow {
        /// Symbol of the offending holding or transaction.
        symbol: String,
        /// The quantity being computed.
        field: String,
    },

    /// Sector table could not be parsed.
    #[error("Invalid sector table: {reason}")]
    InvalidSectorTable {
        /// Parser message.
        reason: String,
    },
}

impl CoreError {
    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an overflow error.
    #[must_use]
    pub fn overflow(symbol: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Overflow {
            symbol: symbol.into(),
            field: field.into(),
        }
    }

    /// Create a negative amount error.
    #[must_use]
    pub fn negative(symbol: impl Into<String>, field: impl Into<String>, value: Decimal) -> Self {
        Self::NegativeAmount {
            symbol: symbol.into(),
            field: field.into(),
            value,
        }
    }
}
