//! Diversification scoring and concentration risk.
//!
//! The score is a 0-100 heuristic built from three capped components:
//!
//! | Component | Formula | Cap |
//! |---|---|---|
//! | assets | `asset_count * 10` | 40 |
//! | sectors | `sector_count * 15` | 30 |
//! | concentration | `30 - top_holding_weight` | floor 0 |

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Top-holding weight above which concentration risk is `High`.
pub const HIGH_CONCENTRATION_THRESHOLD: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Top-holding weight above which concentration risk is `Medium`.
pub const MEDIUM_CONCENTRATION_THRESHOLD: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Qualitative bucket for the largest holding's weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcentrationRisk {
    /// Top holding at most 30%.
    Low,
    /// Top holding above 30% and at most 50%.
    Medium,
    /// Top holding above 50%.
    High,
}

impl ConcentrationRisk {
    /// Classifies a top-holding weight in percent.
    #[must_use]
    pub fn from_top_weight(top_weight: Decimal) -> Self {
        if top_weight > HIGH_CONCENTRATION_THRESHOLD {
            Self::High
        } else if top_weight > MEDIUM_CONCENTRATION_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Display label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for ConcentrationRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk summary of a portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Diversification heuristic in `[0, 100]`.
    pub diversification_score: u8,
    /// Bucket for the top holding weight.
    pub concentration_risk: ConcentrationRisk,
    /// Largest single weight (1 dp).
    pub top_holding_weight: f64,
    /// Distinct sectors.
    pub sector_count: usize,
    /// Holdings analyzed.
    pub asset_count: usize,
}

/// Computes the diversification score.
///
/// `top_weight` is the already rounded weight of the largest holding. The
/// result is rounded half away from zero and clamped to `[0, 100]`.
#[must_use]
pub fn diversification_score(asset_count: usize, sector_count: usize, top_weight: Decimal) -> u8 {
    let asset_score = Decimal::from(asset_count.min(4) * 10);
    let sector_score = Decimal::from(sector_count.min(2) * 15);
    let concentration_score = (Decimal::from(30) - top_weight).max(Decimal::ZERO);

    (asset_score + sector_score + concentration_score)
        .min(Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u8()
        .unwrap_or(0)
}

/// Builds [`RiskMetrics`] from counts and the rounded top weight.
#[must_use]
pub fn risk_metrics(asset_count: usize, sector_count: usize, top_weight: Decimal) -> RiskMetrics {
    RiskMetrics {
        diversification_score: diversification_score(asset_count, sector_count, top_weight),
        concentration_risk: ConcentrationRisk::from_top_weight(top_weight),
        top_holding_weight: top_weight.to_f64().unwrap_or(0.0),
        sector_count,
        asset_count,
    }
}
