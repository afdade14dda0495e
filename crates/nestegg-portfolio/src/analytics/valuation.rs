//! Per-holding valuation and portfolio totals.
//!
//! Everything here is unrounded. Rounding happens when the snapshot is built.

use nestegg_core::{Holding, Sector, SectorTable, Symbol};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::parallel::maybe_parallel_map;
use crate::error::{PortfolioError, PortfolioResult};
use crate::types::AnalyticsConfig;

/// Unrounded valuation of one holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetValuation {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Display name.
    pub name: String,
    /// Sector from the lookup table.
    pub sector: Sector,
    /// Units held.
    pub quantity: Decimal,
    /// `quantity * effective_price`.
    pub value: Decimal,
    /// `quantity * cost_basis_price`.
    pub cost: Decimal,
    /// False when the holding was valued at its cost basis.
    pub priced: bool,
}

impl AssetValuation {
    /// Values a single holding.
    ///
    /// # Errors
    ///
    /// Fails with an overflow error when value or cost does not fit in a decimal.
    pub fn from_holding(holding: &Holding, sectors: &SectorTable) -> PortfolioResult<Self> {
        Ok(Self {
            symbol: holding.symbol.clone(),
            name: holding.name.clone(),
            sector: sectors.lookup(&holding.symbol),
            quantity: holding.quantity,
            value: holding.market_value()?,
            cost: holding.cost()?,
            priced: holding.is_priced(),
        })
    }

    /// `value - cost`.
    #[must_use]
    pub fn profit_loss(&self) -> Decimal {
        self.value - self.cost
    }

    /// Profit or loss as a percent of cost; zero when cost is zero.
    #[must_use]
    pub fn profit_loss_percent(&self) -> Decimal {
        nestegg_core::rounding::percent_of(self.profit_loss(), self.cost)
    }
}

/// Unrounded portfolio totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortfolioTotals {
    /// Sum of market values.
    pub value: Decimal,
    /// Sum of costs.
    pub invested: Decimal,
}

impl PortfolioTotals {
    /// `value - invested`.
    #[must_use]
    pub fn gain(&self) -> Decimal {
        self.value - self.invested
    }

    /// Gain as a percent of invested; zero when nothing was invested.
    #[must_use]
    pub fn gain_percent(&self) -> Decimal {
        nestegg_core::rounding::percent_of(self.gain(), self.invested)
    }
}

/// Values every holding, preserving input order.
///
/// The first holding that fails to value aborts the whole run.
pub fn value_holdings(
    holdings: &[Holding],
    sectors: &SectorTable,
    config: &AnalyticsConfig,
) -> PortfolioResult<Vec<AssetValuation>> {
    maybe_parallel_map(holdings, config, |h| AssetValuation::from_holding(h, sectors))
        .into_iter()
        .collect()
}

/// Accumulates totals over valuations.
///
/// # Errors
///
/// Returns [`PortfolioError::Overflow`] if either sum leaves the decimal range.
pub fn totals(valuations: &[AssetValuation]) -> PortfolioResult<PortfolioTotals> {
    valuations
        .iter()
        .try_fold(PortfolioTotals::default(), |acc, v| {
            Ok(PortfolioTotals {
                value: acc
                    .value
                    .checked_add(v.value)
                    .ok_or(PortfolioError::Overflow { field: "total_value" })?,
                invested: acc
                    .invested
                    .checked_add(v.cost)
                    .ok_or(PortfolioError::Overflow { field: "total_invested" })?,
            })
        })
}
