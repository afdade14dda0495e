//! Builder pattern for the portfolio service.

use std::sync::Arc;

use nestegg_traits::{HoldingStore, PriceSource, TransactionStore};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::service::PortfolioService;

/// Builder for constructing a [`PortfolioService`].
///
/// Both stores are required. The price source is optional; without one,
/// holdings are valued at their stored price or cost basis.
pub struct PortfolioServiceBuilder {
    config: Option<EngineConfig>,
    holdings: Option<Arc<dyn HoldingStore>>,
    transactions: Option<Arc<dyn TransactionStore>>,
    prices: Option<Arc<dyn PriceSource>>,
}

impl PortfolioServiceBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: None,
            holdings: None,
            transactions: None,
            prices: None,
        }
    }

    /// Set the engine configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the holding store.
    pub fn with_holdings(mut self, store: Arc<dyn HoldingStore>) -> Self {
        self.holdings = Some(store);
        self
    }

    /// Set the transaction store.
    pub fn with_transactions(mut self, store: Arc<dyn TransactionStore>) -> Self {
        self.transactions = Some(store);
        self
    }

    /// Set the price source.
    pub fn with_prices(mut self, source: Arc<dyn PriceSource>) -> Self {
        self.prices = Some(source);
        self
    }

    /// Build the service.
    pub fn build(self) -> Result<PortfolioService, EngineError> {
        let config = self.config.unwrap_or_default();

        let holdings = self
            .holdings
            .ok_or_else(|| EngineError::ConfigError("holding store not configured".into()))?;

        let transactions = self
            .transactions
            .ok_or_else(|| EngineError::ConfigError("transaction store not configured".into()))?;

        Ok(PortfolioService::new(config, holdings, transactions, self.prices))
    }
}

impl Default for PortfolioServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
