//! Realized gains from closed positions.
//!
//! Realized results are kept apart from the snapshot's `total_gain`, which
//! only covers open holdings. [`combined_gain`] composes the two on request.

use nestegg_core::rounding::round_money;
use nestegg_core::ClosedTransaction;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analytics::PortfolioSnapshot;
use crate::error::{PortfolioError, PortfolioResult};

/// History of closed positions with their aggregate result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealizedGainsSummary {
    /// Transactions, most recent sale first.
    pub transactions: Vec<ClosedTransaction>,
    /// Sum of profit/loss (2 dp).
    pub total_realized_gains: Decimal,
    /// Number of transactions.
    pub total_transactions: usize,
}

/// Orders transactions by sale date (descending) and totals them.
///
/// Transactions sharing a sale date keep their input order.
///
/// # Errors
///
/// Fails with an overflow error if a profit or the running total leaves the
/// decimal range.
pub fn summarize_realized(transactions: &[ClosedTransaction]) -> PortfolioResult<RealizedGainsSummary> {
    let mut ordered = transactions.to_vec();
    ordered.sort_by(|a, b| b.sale_date.cmp(&a.sale_date));

    let mut total = Decimal::ZERO;
    for t in &ordered {
        total = total
            .checked_add(t.profit_loss()?)
            .ok_or(PortfolioError::Overflow { field: "total_realized_gains" })?;
    }

    Ok(RealizedGainsSummary {
        total_transactions: ordered.len(),
        total_realized_gains: round_money(total),
        transactions: ordered,
    })
}

/// Unrealized and realized gains side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedGain {
    /// Gain on open holdings (2 dp).
    pub unrealized: Decimal,
    /// Gain locked in by closed positions (2 dp).
    pub realized: Decimal,
    /// `unrealized + realized`.
    pub total: Decimal,
}

/// Composes a snapshot's unrealized gain with realized history.
pub fn combined_gain(
    snapshot: &PortfolioSnapshot,
    realized: &RealizedGainsSummary,
) -> PortfolioResult<CombinedGain> {
    let unrealized = snapshot.total_gain;
    let realized = realized.total_realized_gains;
    let total = unrealized
        .checked_add(realized)
        .ok_or(PortfolioError::Overflow { field: "combined_gain" })?;
    Ok(CombinedGain {
        unrealized,
        realized,
        total: round_money(total),
    })
}
