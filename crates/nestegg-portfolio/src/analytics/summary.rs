//! Portfolio snapshot: the analyzer's full output.

use nestegg_core::rounding::{round_money, round_percent};
use nestegg_core::{Holding, Symbol};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::recommendations::{recommend, Recommendation, RecommendationInputs};
use super::risk::{risk_metrics, RiskMetrics};
use super::valuation::{totals, value_holdings};
use super::weights::{rank_assets, weight_of, AssetAnalysis};
use crate::bucketing::{bucket_by_sector, SectorBreakdown};
use crate::error::{PortfolioError, PortfolioResult};
use crate::report::format_currency;
use crate::types::AnalyticsConfig;

/// Non-fatal conditions attached to a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisWarning {
    /// These holdings had no current price and were valued at cost basis.
    UpstreamDataDegraded {
        /// Affected symbols, in input order.
        symbols: Vec<Symbol>,
    },
}

/// Computed view of a portfolio at one moment.
///
/// Never persisted; recomputed on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    /// One-line description.
    pub summary: String,
    /// Sum of market values (2 dp).
    pub total_value: Decimal,
    /// Sum of costs (2 dp).
    pub total_invested: Decimal,
    /// `total_value - total_invested` (2 dp).
    pub total_gain: Decimal,
    /// Gain as percent of invested (2 dp).
    pub total_gain_percent: f64,
    /// Assets ranked by weight.
    pub assets: Vec<AssetAnalysis>,
    /// Sectors ranked by weight.
    pub sectors: Vec<SectorBreakdown>,
    /// Diversification and concentration.
    pub risk_metrics: RiskMetrics,
    /// Advice, in rule order.
    pub recommendations: Vec<Recommendation>,
    /// Degradations encountered while valuing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<AnalysisWarning>,
}

impl PortfolioSnapshot {
    /// Returns the largest holding, if any.
    #[must_use]
    pub fn top_holding(&self) -> Option<&AssetAnalysis> {
        self.assets.first()
    }

    /// Returns true if any holding was valued at cost basis.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Analyzes a set of holdings.
///
/// # Errors
///
/// Returns [`PortfolioError::NoAssetsFound`] when `holdings` is empty, and an
/// overflow error when a value, cost or total leaves the decimal range.
///
/// # Example
///
/// ```rust
/// use nestegg_portfolio::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let holdings = vec![Holding::builder()
///     .symbol("AAPL")
///     .quantity(dec!(10))
///     .cost_basis_price(dec!(150))
///     .current_price(dec!(150))
///     .build()
///     .unwrap()];
///
/// let snapshot = analyze_portfolio(&holdings, &AnalyticsConfig::default()).unwrap();
/// assert_eq!(snapshot.total_value, dec!(1500));
/// assert_eq!(snapshot.risk_metrics.concentration_risk, ConcentrationRisk::High);
/// ```
pub fn analyze_portfolio(
    holdings: &[Holding],
    config: &AnalyticsConfig,
) -> PortfolioResult<PortfolioSnapshot> {
    if holdings.is_empty() {
        return Err(PortfolioError::NoAssetsFound);
    }

    let table = config.sector_table();
    let valuations = value_holdings(holdings, &table, config)?;
    let totals = totals(&valuations)?;

    let unpriced: Vec<Symbol> = valuations
        .iter()
        .filter(|v| !v.priced)
        .map(|v| v.symbol.clone())
        .collect();
    let mut warnings = Vec::new();
    if !unpriced.is_empty() {
        log::warn!(
            "{} holding(s) valued at cost basis: {:?}",
            unpriced.len(),
            unpriced.iter().map(Symbol::as_str).collect::<Vec<_>>()
        );
        warnings.push(AnalysisWarning::UpstreamDataDegraded { symbols: unpriced });
    }

    let assets = rank_assets(&valuations, totals.value);
    let sectors = bucket_by_sector(&valuations, totals.value)?;

    // Rank and top weight both come from the same rounded figure.
    let top = valuations
        .iter()
        .map(|v| (&v.symbol, weight_of(v.value, totals.value)))
        .fold(None, |best: Option<(&Symbol, Decimal)>, cur| match best {
            Some(b) if b.1 >= cur.1 => Some(b),
            _ => Some(cur),
        });
    let top_weight = top.map_or(Decimal::ZERO, |(_, w)| w);

    let risk = risk_metrics(assets.len(), sectors.len(), top_weight);
    let gain_percent = totals.gain_percent();

    let recommendations = recommend(&RecommendationInputs {
        asset_count: assets.len(),
        sector_count: sectors.len(),
        top_holding: top,
        total_gain_percent: gain_percent,
        performance_rules: config.performance_rules,
    });

    let total_value = round_money(totals.value);
    let summary = format!(
        "Your portfolio of {} assets is valued at {}",
        assets.len(),
        format_currency(total_value)
    );

    log::debug!(
        "analyzed {} holdings: value={} invested={} score={}",
        assets.len(),
        total_value,
        totals.invested,
        risk.diversification_score
    );

    Ok(PortfolioSnapshot {
        summary,
        total_value,
        total_invested: round_money(totals.invested),
        total_gain: round_money(totals.gain()),
        total_gain_percent: round_percent(gain_percent),
        assets,
        sectors,
        risk_metrics: risk,
        recommendations,
        warnings,
    })
}
