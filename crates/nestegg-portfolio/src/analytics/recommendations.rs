//! Rule-based recommendations.
//!
//! Every applicable rule fires, in a fixed order. When none applies the
//! portfolio gets a single well-balanced affirmation.

use std::fmt;

use nestegg_core::Symbol;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::risk::MEDIUM_CONCENTRATION_THRESHOLD;

/// Fewer assets than this triggers [`Recommendation::AddAssets`].
pub const MIN_ASSETS: usize = 5;

/// Fewer sectors than this triggers [`Recommendation::DiversifySectors`].
pub const MIN_SECTORS: usize = 3;

/// Total gain percent above which [`Recommendation::TakeProfits`] fires.
pub const TAKE_PROFITS_ABOVE: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Total gain percent below which [`Recommendation::ReviewLosses`] fires.
pub const REVIEW_LOSSES_BELOW: Decimal = Decimal::from_parts(10, 0, 0, true, 0);

/// Advice attached to a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    /// Too few positions.
    AddAssets,
    /// Too few sectors.
    DiversifySectors,
    /// The largest holding dominates.
    Rebalance {
        /// Top holding symbol.
        symbol: Symbol,
        /// Its weight in percent (1 dp).
        weight: f64,
    },
    /// Strong overall gain.
    TakeProfits,
    /// Significant overall loss.
    ReviewLosses,
    /// Nothing else applied.
    WellBalanced,
}

impl Recommendation {
    /// Human-readable advice.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::AddAssets => "Consider adding more assets to improve diversification. \
                A well-diversified portfolio typically has 10-15 positions."
                .to_string(),
            Self::DiversifySectors => "Your portfolio is concentrated in few sectors. \
                Consider adding exposure to other sectors like Healthcare, Technology, or Consumer Staples."
                .to_string(),
            Self::Rebalance { symbol, weight } => format!(
                "Your top holding ({}) represents {:.1}% of your portfolio. \
                 Consider rebalancing to reduce concentration risk.",
                symbol, weight
            ),
            Self::TakeProfits => "Excellent returns! Consider taking some profits to lock in gains \
                and rebalance your portfolio."
                .to_string(),
            Self::ReviewLosses => "Your portfolio is down significantly. Review your holdings and \
                consider if your investment thesis still holds."
                .to_string(),
            Self::WellBalanced => "Your portfolio looks well-balanced! Continue monitoring and \
                consider regular rebalancing every 6-12 months."
                .to_string(),
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Inputs to the recommendation rules.
#[derive(Debug, Clone)]
pub struct RecommendationInputs<'a> {
    /// Holdings analyzed.
    pub asset_count: usize,
    /// Distinct sectors.
    pub sector_count: usize,
    /// Largest holding, with its rounded weight.
    pub top_holding: Option<(&'a Symbol, Decimal)>,
    /// Unrounded total gain percent.
    pub total_gain_percent: Decimal,
    /// Whether the gain-based rules apply.
    pub performance_rules: bool,
}

/// Evaluates the rules in order.
#[must_use]
pub fn recommend(inputs: &RecommendationInputs<'_>) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if inputs.asset_count < MIN_ASSETS {
        out.push(Recommendation::AddAssets);
    }
    if inputs.sector_count < MIN_SECTORS {
        out.push(Recommendation::DiversifySectors);
    }
    if let Some((symbol, weight)) = inputs.top_holding {
        if weight > MEDIUM_CONCENTRATION_THRESHOLD {
            out.push(Recommendation::Rebalance {
                symbol: symbol.clone(),
                weight: nestegg_core::rounding::round_weight(weight),
            });
        }
    }
    if inputs.performance_rules {
        if inputs.total_gain_percent > TAKE_PROFITS_ABOVE {
            out.push(Recommendation::TakeProfits);
        } else if inputs.total_gain_percent < REVIEW_LOSSES_BELOW {
            out.push(Recommendation::ReviewLosses);
        }
    }

    if out.is_empty() {
        out.push(Recommendation::WellBalanced);
    }
    out
}
