//! Price source trait.
//!
//! A [`PriceSource`] returns the last known price per symbol. Symbols the
//! source knows nothing about are simply absent from the result; callers fall
//! back to cost basis for those.

use std::collections::HashMap;

use async_trait::async_trait;
use nestegg_core::Symbol;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::TraitError;

/// Source type for price data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceType {
    /// Snapshot/request-response (REST APIs)
    Snapshot,
    /// File-based (CSV, JSON)
    File,
    /// Manual entry or in-memory fixture
    Manual,
}

/// Trait for last-price providers.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Source type.
    fn source_type(&self) -> SourceType;

    /// Last known price for one symbol.
    async fn get_price(&self, symbol: &Symbol) -> Result<Option<Decimal>, TraitError>;

    /// Last known prices for several symbols.
    ///
    /// Unknown symbols are omitted from the map.
    async fn get_prices(&self, symbols: &[Symbol]) -> Result<HashMap<Symbol, Decimal>, TraitError> {
        let mut out = HashMap::with_capacity(symbols.len());
        for symbol in symbols {
            if let Some(price) = self.get_price(symbol).await? {
                out.insert(symbol.clone(), price);
            }
        }
        Ok(out)
    }
}
