//! Portfolio service: stores and price source wired to the analyzer.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use nestegg_core::{ClosedTransaction, Holding, Symbol};
use nestegg_portfolio::{
    analyze_portfolio, summarize_realized, PortfolioSnapshot, RealizedGainsSummary,
};
use nestegg_traits::{HoldingId, HoldingStore, PriceSource, TraitError, TransactionStore, UserId};
use rust_decimal::Decimal;
use tracing::{debug, error, info, warn};

use crate::config::EngineConfig;
use crate::error::EngineError;

/// Stateful front of the engine.
///
/// Every call reads fresh data from the stores; nothing is cached.
pub struct PortfolioService {
    config: EngineConfig,
    holdings: Arc<dyn HoldingStore>,
    transactions: Arc<dyn TransactionStore>,
    prices: Option<Arc<dyn PriceSource>>,
}

impl PortfolioService {
    pub(crate) fn new(
        config: EngineConfig,
        holdings: Arc<dyn HoldingStore>,
        transactions: Arc<dyn TransactionStore>,
        prices: Option<Arc<dyn PriceSource>>,
    ) -> Self {
        Self {
            config,
            holdings,
            transactions,
            prices,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyzes a user's open holdings.
    ///
    /// Holdings are priced through the configured [`PriceSource`]. A source
    /// error or timeout is not fatal: every holding without a fresh quote is
    /// valued at cost basis and the snapshot carries a warning naming it.
    /// Without a price source the stored prices are used as they are.
    pub async fn analyze(&self, user: &UserId) -> Result<PortfolioSnapshot, EngineError> {
        let holdings = self.holdings.list_holdings(user).await?;
        debug!("Loaded {} holdings for {}", holdings.len(), user);
        if holdings.is_empty() {
            info!("No holdings for {}", user);
        }

        let priced = self.apply_prices(holdings).await;
        let snapshot = analyze_portfolio(&priced, &self.config.analytics)?;

        info!(
            user = %user,
            assets = snapshot.assets.len(),
            total_value = %snapshot.total_value,
            degraded = snapshot.is_degraded(),
            "Portfolio analyzed"
        );
        Ok(snapshot)
    }

    /// Closed-position history for a user, most recent first.
    pub async fn realized_gains(&self, user: &UserId) -> Result<RealizedGainsSummary, EngineError> {
        let transactions = self.transactions.list_transactions(user).await?;
        Ok(summarize_realized(&transactions)?)
    }

    /// Liquidates a holding at `sale_price`, dated now.
    pub async fn close_position(
        &self,
        user: &UserId,
        holding_id: &HoldingId,
        sale_price: Decimal,
    ) -> Result<ClosedTransaction, EngineError> {
        self.close_position_at(user, holding_id, sale_price, Utc::now())
            .await
    }

    /// Liquidates a holding at `sale_price` on `sale_date`.
    ///
    /// The transaction is persisted before the holding is deleted. If the
    /// insert fails the holding is untouched. If the delete fails the
    /// transaction stays and [`EngineError::PartialClose`] is returned.
    pub async fn close_position_at(
        &self,
        user: &UserId,
        holding_id: &HoldingId,
        sale_price: Decimal,
        sale_date: DateTime<Utc>,
    ) -> Result<ClosedTransaction, EngineError> {
        let holding = match self.holdings.get_holding(user, holding_id).await {
            Ok(Some(holding)) => holding,
            Ok(None) | Err(TraitError::NotFound(_)) => {
                return Err(EngineError::HoldingNotFound(holding_id.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        let transaction = holding.close(sale_price, sale_date)?;

        self.transactions
            .insert_transaction(user, &transaction)
            .await
            .map_err(|e| {
                error!(holding = %holding_id, error = %e, "Failed to record transaction");
                EngineError::from(e)
            })?;
        debug!("Transaction {} recorded for {}", transaction.id, holding_id);

        match self.holdings.delete_holding(user, holding_id).await {
            Ok(true) => {}
            Ok(false) => {
                warn!(holding = %holding_id, "Holding vanished before delete");
                return Err(EngineError::PartialClose {
                    transaction_id: transaction.id,
                    reason: format!("holding {holding_id} was already removed"),
                });
            }
            Err(e) => {
                error!(
                    holding = %holding_id,
                    transaction = %transaction.id,
                    error = %e,
                    "Transaction recorded but holding delete failed"
                );
                return Err(EngineError::PartialClose {
                    transaction_id: transaction.id,
                    reason: e.to_string(),
                });
            }
        }

        info!(
            symbol = %transaction.symbol,
            transaction = %transaction.id,
            "Position closed"
        );
        Ok(transaction)
    }

    /// Replaces each holding's price with a fresh quote.
    ///
    /// Holdings the source has no usable quote for lose their stored price.
    async fn apply_prices(&self, holdings: Vec<Holding>) -> Vec<Holding> {
        let Some(source) = &self.prices else {
            return holdings;
        };
        if holdings.is_empty() {
            return holdings;
        }

        let mut seen = HashSet::new();
        let symbols: Vec<Symbol> = holdings
            .iter()
            .filter(|h| seen.insert(h.symbol.clone()))
            .map(|h| h.symbol.clone())
            .collect();

        let prices: HashMap<Symbol, Decimal> =
            match tokio::time::timeout(self.config.price_timeout(), source.get_prices(&symbols))
                .await
            {
                Ok(Ok(prices)) => prices,
                Ok(Err(e)) => {
                    warn!(error = %e, "Price source failed; valuing at cost basis");
                    HashMap::new()
                }
                Err(_) => {
                    warn!(
                        timeout_ms = self.config.price_timeout_ms,
                        "Price source timed out; valuing at cost basis"
                    );
                    HashMap::new()
                }
            };

        holdings
            .into_iter()
            .map(|h| {
                let quote = match prices.get(&h.symbol) {
                    Some(price) if *price < Decimal::ZERO => {
                        warn!(symbol = %h.symbol, %price, "Ignoring negative quote");
                        None
                    }
                    other => other.copied(),
                };
                h.with_current_price(quote)
            })
            .collect()
    }
}
