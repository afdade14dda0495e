//! Engine configuration.

use std::path::Path;
use std::time::Duration;

use nestegg_portfolio::AnalyticsConfig;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Engine configuration.
///
/// Holdings without a usable price are always valued at cost basis; there is
/// no switch for that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Upper bound on one price-source round trip, in milliseconds.
    #[serde(default = "default_price_timeout_ms")]
    pub price_timeout_ms: u64,

    /// Analyzer settings.
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

fn default_price_timeout_ms() -> u64 {
    5000
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            price_timeout_ms: default_price_timeout_ms(),
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| EngineError::ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, or defaults if it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, EngineError> {
        toml::from_str(content).map_err(|e| EngineError::ConfigError(e.to_string()))
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, EngineError> {
        toml::to_string_pretty(self).map_err(|e| EngineError::ConfigError(e.to_string()))
    }

    /// Price-source timeout as a [`Duration`].
    pub fn price_timeout(&self) -> Duration {
        Duration::from_millis(self.price_timeout_ms)
    }
}
