//! Per-asset weights and the ranked asset breakdown.

use nestegg_core::rounding::{percent_of, round_money, round_percent, round_weight};
use nestegg_core::{Sector, Symbol};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::valuation::AssetValuation;

/// Weight of `value` in `total` as a percent, rounded to 1 dp.
///
/// Zero when `total` is not positive.
#[must_use]
pub fn weight_of(value: Decimal, total: Decimal) -> Decimal {
    percent_of(value, total).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// One row of the asset breakdown, rounded for output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetAnalysis {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Display name.
    pub name: String,
    /// Sector from the lookup table.
    pub sector: Sector,
    /// Units held.
    pub quantity: Decimal,
    /// Market value (2 dp).
    pub value: Decimal,
    /// Cost (2 dp).
    pub cost: Decimal,
    /// `value - cost` (2 dp).
    pub profit_loss: Decimal,
    /// Profit or loss percent of cost (2 dp).
    pub profit_loss_percent: f64,
    /// Share of total value in percent (1 dp).
    pub weight: f64,
    /// False when valued at cost basis.
    pub priced: bool,
}

/// Builds the ranked asset breakdown.
///
/// Assets are ordered by rounded weight, descending. Ties keep input order.
#[must_use]
pub fn rank_assets(valuations: &[AssetValuation], total_value: Decimal) -> Vec<AssetAnalysis> {
    let mut ranked: Vec<(Decimal, AssetAnalysis)> = valuations
        .iter()
        .map(|v| {
            let weight = weight_of(v.value, total_value);
            let row = AssetAnalysis {
                symbol: v.symbol.clone(),
                name: v.name.clone(),
                sector: v.sector.clone(),
                quantity: v.quantity,
                value: round_money(v.value),
                cost: round_money(v.cost),
                profit_loss: round_money(v.profit_loss()),
                profit_loss_percent: round_percent(v.profit_loss_percent()),
                weight: round_weight(weight),
                priced: v.priced,
            };
            (weight, row)
        })
        .collect();

    // slice::sort_by is stable
    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked.into_iter().map(|(_, row)| row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    fn valuation(symbol: &str, value: Decimal, cost: Decimal) -> AssetValuation {
        AssetValuation {
            symbol: Symbol::new(symbol).unwrap(),
            name: symbol.to_string(),
            sector: Sector::Other,
            quantity: Decimal::ONE,
            value,
            cost,
            priced: true,
        }
    }

    #[test]
    fn test_weight_of() {
        assert_eq!(weight_of(dec!(1), dec!(3)), dec!(33.3));
        assert_eq!(weight_of(dec!(2), dec!(3)), dec!(66.7));
        assert_eq!(weight_of(dec!(5), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_rank_descending() {
        let vals = vec![
            valuation("A", dec!(100), dec!(100)),
            valuation("B", dec!(300), dec!(200)),
            valuation("C", dec!(600), dec!(700)),
        ];
        let ranked = rank_assets(&vals, dec!(1000));
        let order: Vec<&str> = ranked.iter().map(|a| a.symbol.as_str()).collect();
        assert_eq!(order, vec!["C", "B", "A"]);
        assert_relative_eq!(ranked[0].weight, 60.0);
        assert_eq!(ranked[0].profit_loss, dec!(-100));
        assert_relative_eq!(ranked[1].profit_loss_percent, 50.0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let vals = vec![
            valuation("X", dec!(250), dec!(250)),
            valuation("Y", dec!(500), dec!(500)),
            valuation("Z", dec!(250), dec!(250)),
        ];
        let ranked = rank_assets(&vals, dec!(1000));
        let order: Vec<&str> = ranked.iter().map(|a| a.symbol.as_str()).collect();
        assert_eq!(order, vec!["Y", "X", "Z"]);
    }

    #[test]
    fn test_ties_after_rounding_keep_input_order() {
        // 33.34 and 33.33 both round to 33.3
        let vals = vec![
            valuation("LOW", dec!(3333), dec!(1)),
            valuation("HIGH", dec!(3334), dec!(1)),
            valuation("REST", dec!(3333), dec!(1)),
        ];
        let ranked = rank_assets(&vals, dec!(10000));
        let order: Vec<&str> = ranked.iter().map(|a| a.symbol.as_str()).collect();
        assert_eq!(order, vec!["LOW", "HIGH", "REST"]);
    }
}
