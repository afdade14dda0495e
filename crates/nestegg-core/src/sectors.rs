//! Sector classification and the static symbol→sector table.
//!
//! Sectors are data, not logic: the built-in table covers the symbols the
//! application lists by default, and any unknown symbol maps to
//! [`Sector::Other`]. Callers can layer overrides on top of the defaults.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Symbol;

/// Sector a holding is bucketed under.
///
/// Known sectors are enum variants; anything else read from configuration is
/// kept verbatim in [`Sector::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sector {
    /// Technology
    Technology,
    /// Consumer Cyclical
    ConsumerCyclical,
    /// Consumer Defensive
    ConsumerDefensive,
    /// Automotive
    Automotive,
    /// Financial
    Financial,
    /// Healthcare
    Healthcare,
    /// Communication
    Communication,
    /// Cryptocurrency
    Cryptocurrency,
    /// Exchange-traded fund
    Etf,
    /// Fallback for symbols missing from the table.
    Other,
    /// A sector name not covered by the variants above.
    Custom(String),
}

impl Sector {
    /// Returns the display name of the sector.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Technology => "Technology",
            Self::ConsumerCyclical => "Consumer Cyclical",
            Self::ConsumerDefensive => "Consumer Defensive",
            Self::Automotive => "Automotive",
            Self::Financial => "Financial",
            Self::Healthcare => "Healthcare",
            Self::Communication => "Communication",
            Self::Cryptocurrency => "Cryptocurrency",
            Self::Etf => "ETF",
            Self::Other => "Other",
            Self::Custom(name) => name,
        }
    }

    /// Parses a sector name, case-insensitively.
    ///
    /// Unrecognized names become [`Sector::Custom`]; an empty name is `Other`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "technology" => Self::Technology,
            "consumer cyclical" => Self::ConsumerCyclical,
            "consumer defensive" => Self::ConsumerDefensive,
            "automotive" => Self::Automotive,
            "financial" => Self::Financial,
            "healthcare" => Self::Healthcare,
            "communication" => Self::Communication,
            "cryptocurrency" => Self::Cryptocurrency,
            "etf" => Self::Etf,
            "other" | "" => Self::Other,
            _ => Self::Custom(trimmed.to_string()),
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for Sector {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Sector> for String {
    fn from(sector: Sector) -> Self {
        sector.name().to_string()
    }
}

/// Built-in symbol→sector assignments.
const DEFAULT_SECTORS: &[(&str, Sector)] = &[
    ("AAPL", Sector::Technology),
    ("GOOGL", Sector::Technology),
    ("MSFT", Sector::Technology),
    ("META", Sector::Technology),
    ("NVDA", Sector::Technology),
    ("AMZN", Sector::ConsumerCyclical),
    ("HD", Sector::ConsumerCyclical),
    ("TSLA", Sector::Automotive),
    ("JPM", Sector::Financial),
    ("V", Sector::Financial),
    ("MA", Sector::Financial),
    ("JNJ", Sector::Healthcare),
    ("WMT", Sector::ConsumerDefensive),
    ("PG", Sector::ConsumerDefensive),
    ("DIS", Sector::Communication),
    ("BTC-USD", Sector::Cryptocurrency),
    ("ETH-USD", Sector::Cryptocurrency),
    ("SPY", Sector::Etf),
    ("QQQ", Sector::Etf),
    ("VTI", Sector::Etf),
];

/// Symbol→sector lookup table.
///
/// # Examples
///
/// ```
/// use nestegg_core::{Sector, SectorTable, Symbol};
///
/// let table = SectorTable::default();
/// assert_eq!(table.lookup(&Symbol::new("msft").unwrap()), Sector::Technology);
/// assert_eq!(table.lookup(&Symbol::new("XYZ").unwrap()), Sector::Other);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorTable {
    entries: HashMap<Symbol, Sector>,
}

impl Default for SectorTable {
    fn default() -> Self {
        let entries = DEFAULT_SECTORS
            .iter()
            .map(|(symbol, sector)| (Symbol::from_static(symbol), sector.clone()))
            .collect();
        Self { entries }
    }
}

impl SectorTable {
    /// Creates a table with the built-in assignments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with no assignments; every lookup yields `Other`.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Parses a JSON object of `{"SYMBOL": "Sector Name"}` pairs.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let raw: HashMap<String, String> =
            serde_json::from_str(json).map_err(|e| CoreError::InvalidSectorTable {
                reason: e.to_string(),
            })?;
        let mut table = Self::empty();
        for (symbol, sector) in raw {
            let symbol = Symbol::new(&symbol).map_err(|e| CoreError::InvalidSectorTable {
                reason: e.to_string(),
            })?;
            table.insert(symbol, Sector::from_name(&sector));
        }
        Ok(table)
    }

    /// Assigns a sector to a symbol, replacing any existing entry.
    pub fn insert(&mut self, symbol: Symbol, sector: Sector) {
        self.entries.insert(symbol, sector);
    }

    /// Returns a copy of this table with `overrides` applied on top.
    #[must_use]
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a Symbol, &'a Sector)>,
    {
        for (symbol, sector) in overrides {
            self.insert(symbol.clone(), sector.clone());
        }
        self
    }

    /// Returns the sector for a symbol, or [`Sector::Other`] when unknown.
    #[must_use]
    pub fn lookup(&self, symbol: &Symbol) -> Sector {
        self.entries.get(symbol).cloned().unwrap_or(Sector::Other)
    }

    /// Number of explicit assignments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no assignments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(s: &str) -> Symbol {
        Symbol::new(s).unwrap()
    }

    #[test]
    fn test_default_lookup() {
        let table = SectorTable::default();
        assert_eq!(table.lookup(&sym("AAPL")), Sector::Technology);
        assert_eq!(table.lookup(&sym("btc-usd")), Sector::Cryptocurrency);
        assert_eq!(table.lookup(&sym("VTI")), Sector::Etf);
        assert_eq!(table.len(), DEFAULT_SECTORS.len());
    }

    #[test]
    fn test_unknown_symbol_is_other() {
        let table = SectorTable::default();
        assert_eq!(table.lookup(&sym("UNKNOWN")), Sector::Other);
        assert_eq!(SectorTable::empty().lookup(&sym("AAPL")), Sector::Other);
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let overrides: HashMap<Symbol, Sector> = [
            (sym("AAPL"), Sector::ConsumerCyclical),
            (sym("ASML"), Sector::Custom("Semiconductors".into())),
        ]
        .into_iter()
        .collect();

        let table = SectorTable::default().with_overrides(&overrides);
        assert_eq!(table.lookup(&sym("AAPL")), Sector::ConsumerCyclical);
        assert_eq!(
            table.lookup(&sym("ASML")).to_string(),
            "Semiconductors".to_string()
        );
    }

    #[test]
    fn test_from_name_round_trips_known_names() {
        for (_, sector) in DEFAULT_SECTORS {
            assert_eq!(&Sector::from_name(sector.name()), sector);
        }
        assert_eq!(Sector::from_name("  etf "), Sector::Etf);
        assert_eq!(Sector::from_name(""), Sector::Other);
    }

    #[test]
    fn test_from_json() {
        let table = SectorTable::from_json(r#"{"shop": "Consumer Cyclical", "XOM": "Energy"}"#)
            .unwrap();
        assert_eq!(table.lookup(&sym("SHOP")), Sector::ConsumerCyclical);
        assert_eq!(table.lookup(&sym("XOM")), Sector::Custom("Energy".into()));

        assert!(SectorTable::from_json("not json").is_err());
        assert!(SectorTable::from_json(r#"{"  ": "Energy"}"#).is_err());
    }

    #[test]
    fn test_sector_serde_as_name() {
        let json = serde_json::to_string(&Sector::ConsumerDefensive).unwrap();
        assert_eq!(json, "\"Consumer Defensive\"");
        let parsed: Sector = serde_json::from_str("\"Healthcare\"").unwrap();
        assert_eq!(parsed, Sector::Healthcare);
    }
}
