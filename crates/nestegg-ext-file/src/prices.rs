//! File-based price sources.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use async_trait::async_trait;
use dashmap::DashMap;
use rust_decimal::Decimal;
use serde::Deserialize;

use nestegg_core::Symbol;
use nestegg_traits::error::TraitError;
use nestegg_traits::market_data::{PriceSource, SourceType};

// =============================================================================
// CSV PRICE SOURCE
// =============================================================================

/// CSV record for prices.
#[derive(Debug, Deserialize)]
struct PriceRecord {
    symbol: String,
    price: Option<String>,
}

/// CSV-based last-price source (`symbol,price`).
///
/// Rows with an empty price are skipped, so the symbol is reported as unpriced.
pub struct CsvPriceSource {
    file_path: PathBuf,
    prices: DashMap<Symbol, Decimal>,
}

impl CsvPriceSource {
    /// Create a new CSV price source.
    pub fn new(file_path: impl AsRef<Path>) -> Result<Self, TraitError> {
        let source = Self {
            file_path: file_path.as_ref().to_path_buf(),
            prices: DashMap::new(),
        };
        source.reload()?;
        Ok(source)
    }

    /// Reload prices from file.
    pub fn reload(&self) -> Result<(), TraitError> {
        if !self.file_path.exists() {
            return Ok(()); // Empty source
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.file_path)
            .map_err(|e| TraitError::IoError(e.to_string()))?;

        self.prices.clear();
        for (row, result) in reader.deserialize().enumerate() {
            let record: PriceRecord = result.map_err(|e| TraitError::ParseError(e.to_string()))?;

            let Some(raw) = record.price.filter(|p| !p.is_empty()) else {
                continue;
            };
            let symbol = Symbol::new(&record.symbol)?;
            let price = Decimal::from_str(&raw).map_err(|e| {
                TraitError::ParseError(format!("row {}: bad price {raw:?}: {e}", row + 1))
            })?;
            if price < Decimal::ZERO {
                return Err(TraitError::ParseError(format!(
                    "row {}: negative price {price} for {symbol}",
                    row + 1
                )));
            }

            self.prices.insert(symbol, price);
        }

        Ok(())
    }

    /// Number of priced symbols.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns true if no prices were loaded.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

#[async_trait]
impl PriceSource for CsvPriceSource {
    fn source_type(&self) -> SourceType {
        SourceType::File
    }

    async fn get_price(&self, symbol: &Symbol) -> Result<Option<Decimal>, TraitError> {
        Ok(self.prices.get(symbol).map(|p| *p))
    }

    async fn get_prices(&self, symbols: &[Symbol]) -> Result<HashMap<Symbol, Decimal>, TraitError> {
        Ok(symbols
            .iter()
            .filter_map(|s| self.prices.get(s).map(|p| (s.clone(), *p)))
            .collect())
    }
}

// =============================================================================
// STATIC PRICE SOURCE
// =============================================================================

/// Fixed prices supplied by the caller.
#[derive(Debug, Default)]
pub struct StaticPriceSource {
    prices: HashMap<Symbol, Decimal>,
}

impl StaticPriceSource {
    /// Create a source from a symbol → price map.
    pub fn new(prices: HashMap<Symbol, Decimal>) -> Self {
        Self { prices }
    }

    /// Add or replace a price.
    #[must_use]
    pub fn with_price(mut self, symbol: Symbol, price: Decimal) -> Self {
        self.prices.insert(symbol, price);
        self
    }
}

#[async_trait]
impl PriceSource for StaticPriceSource {
    fn source_type(&self) -> SourceType {
        SourceType::Manual
    }

    async fn get_price(&self, symbol: &Symbol) -> Result<Option<Decimal>, TraitError> {
        Ok(self.prices.get(symbol).copied())
    }
}
