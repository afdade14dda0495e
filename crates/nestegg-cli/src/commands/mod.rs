//! CLI command implementations.

pub mod allocation;
pub mod analyze;
pub mod close;
pub mod config;
pub mod project;
pub mod realized;

// Re-export submodules for convenience
pub use allocation::AllocationArgs;
pub use analyze::AnalyzeArgs;
pub use close::CloseArgs;
pub use config::ConfigArgs;
pub use project::ProjectArgs;
pub use realized::RealizedArgs;

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use nestegg_engine::EngineConfig;
use nestegg_traits::UserId;
use rust_decimal::Decimal;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Owner of the file-backed ledger. Files hold a single user's data.
pub const LOCAL_USER: &str = "local";

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format.
    pub format: OutputFormat,
    /// Suppress headers and informational lines.
    pub quiet: bool,
    /// Explicit `--config` path.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// The user every file-backed command acts as.
    pub fn user(&self) -> UserId {
        UserId::new(LOCAL_USER)
    }

    /// Effective engine configuration.
    ///
    /// An explicit `--config` file must exist; the default location may be
    /// absent, in which case defaults apply.
    pub fn engine_config(&self) -> anyhow::Result<EngineConfig> {
        match &self.config_path {
            Some(path) => {
                require_file(path)?;
                Ok(EngineConfig::from_file(path)?)
            }
            None => Ok(EngineConfig::load_or_default(default_config_path()?)?),
        }
    }

    /// Prints a section header unless quiet.
    pub fn header(&self, title: &str) {
        if !self.quiet {
            crate::output::print_header(title);
        }
    }
}

/// Default config file location.
pub fn default_config_path() -> CliResult<PathBuf> {
    let home = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| CliError::Config("Could not determine config directory".into()))?;
    Ok(home.join("nestegg").join("nestegg.toml"))
}

/// Fails with [`CliError::FileNotFound`] unless `path` exists.
pub fn require_file(path: &Path) -> CliResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(CliError::FileNotFound(path.to_path_buf()))
    }
}

/// Parses a date string in YYYY-MM-DD format, as midnight UTC.
pub fn parse_date(s: &str) -> CliResult<DateTime<Utc>> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| CliError::InvalidDate(s.to_string()))
}

/// Validates a price value.
pub fn validate_price(price: Decimal) -> CliResult<Decimal> {
    if price < Decimal::ZERO {
        return Err(CliError::InvalidPrice(price.to_string()));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_date() {
        let d = parse_date("2025-03-14").unwrap();
        assert_eq!((d.year(), d.month(), d.day(), d.hour()), (2025, 3, 14, 0));
        assert!(matches!(parse_date("14/03/2025"), Err(CliError::InvalidDate(_))));
        assert!(parse_date("2025-02-30").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Decimal::ZERO).is_ok());
        assert!(validate_price(Decimal::NEGATIVE_ONE).is_err());
    }

    #[test]
    fn test_require_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(require_file(dir.path()).is_ok());
        assert!(matches!(
            require_file(&dir.path().join("missing.csv")),
            Err(CliError::FileNotFound(_))
        ));
    }
}
