//! Configuration for portfolio analytics computation.

use std::collections::HashMap;

use nestegg_core::{Sector, SectorTable, Symbol};
use serde::{Deserialize, Serialize};

/// Configuration for portfolio analytics computation.
///
/// Controls parallelism, optional recommendation rules, and sector lookups.
/// Concentration thresholds are fixed and not configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum holdings count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,

    /// Add take-profit / review-losses advice based on total gain percent.
    pub performance_rules: bool,

    /// Number of holdings listed in the narrative report.
    pub report_top_holdings: usize,

    /// Symbol→sector assignments layered over the built-in table.
    pub sector_overrides: HashMap<Symbol, Sector>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 100,
            performance_rules: false,
            report_top_holdings: 3,
            sector_overrides: HashMap::new(),
        }
    }
}

impl AnalyticsConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Enables or disables the gain-based recommendation rules.
    #[must_use]
    pub fn with_performance_rules(mut self, enabled: bool) -> Self {
        self.performance_rules = enabled;
        self
    }

    /// Assigns a sector to a symbol, overriding the built-in table.
    #[must_use]
    pub fn with_sector_override(mut self, symbol: Symbol, sector: Sector) -> Self {
        self.sector_overrides.insert(symbol, sector);
        self
    }

    /// Sets how many top holdings the report lists.
    #[must_use]
    pub fn with_report_top_holdings(mut self, count: usize) -> Self {
        self.report_top_holdings = count;
        self
    }

    /// Builds the effective symbol→sector table.
    #[must_use]
    pub fn sector_table(&self) -> SectorTable {
        SectorTable::default().with_overrides(&self.sector_overrides)
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = AnalyticsConfig::default();
        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 100);
        assert!(!config.performance_rules);
        assert!(config.sector_overrides.is_empty());
        assert_eq!(config.report_top_holdings, 3);
    }

    #[test]
    fn test_builder_pattern() {
        let config = AnalyticsConfig::sequential()
            .with_threshold(50)
            .with_performance_rules(true)
            .with_report_top_holdings(5);

        assert!(!config.parallel);
        assert_eq!(config.parallel_threshold, 50);
        assert!(config.performance_rules);
        assert_eq!(config.report_top_holdings, 5);
    }

    #[test]
    fn test_sector_override_applies() {
        let xom = Symbol::new("XOM").unwrap();
        let config = AnalyticsConfig::new()
            .with_sector_override(xom.clone(), Sector::Custom("Energy".into()));

        let table = config.sector_table();
        assert_eq!(table.lookup(&xom).name(), "Energy");
        assert_eq!(
            table.lookup(&Symbol::new("AAPL").unwrap()),
            Sector::Technology
        );
    }

    #[test]
    fn test_should_parallelize() {
        let config = AnalyticsConfig::new().with_threshold(100);

        #[cfg(feature = "parallel")]
        {
            assert!(!config.should_parallelize(50));
            assert!(config.should_parallelize(100));
        }

        #[cfg(not(feature = "parallel"))]
        {
            assert!(!config.should_parallelize(50));
            assert!(!config.should_parallelize(500));
        }
    }

    #[test]
    fn test_serde_partial() {
        let parsed: AnalyticsConfig =
            serde_json::from_str(r#"{"performance_rules": true, "sector_overrides": {"xom": "Energy"}}"#)
                .unwrap();

        assert!(parsed.performance_rules);
        assert_eq!(parsed.parallel_threshold, 100);
        assert_eq!(
            parsed.sector_overrides.get(&Symbol::new("XOM").unwrap()),
            Some(&Sector::Custom("Energy".into()))
        );
    }
}
