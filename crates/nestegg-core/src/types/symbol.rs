//! Ticker symbol newtype.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A ticker symbol, trimmed and normalized to uppercase.
///
/// # Examples
///
/// ```
/// use nestegg_core::Symbol;
///
/// let symbol = Symbol::new(" brk.b ").unwrap();
/// assert_eq!(symbol.as_str(), "BRK.B");
/// assert!(Symbol::new("   ").is_err());
/// ```
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Creates a normalized symbol.
    pub fn new(raw: &str) -> CoreResult<Self> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(CoreError::InvalidSymbol {
                value: raw.to_string(),
            });
        }
        Ok(Self(normalized))
    }

    /// Wraps an already-uppercase literal.
    pub(crate) fn from_static(symbol: &'static str) -> Self {
        Self(symbol.to_string())
    }

    /// Get the symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Symbol {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = CoreError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
