//! Boundary rounding helpers.
//!
//! Accumulation always happens on unrounded [`Decimal`] values. These helpers
//! are applied once, when a figure leaves the engine:
//!
//! - money: 2 decimal places
//! - percents (gain %, return %): 2 decimal places
//! - weights: 1 decimal place
//!
//! All rounding is half away from zero.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a currency amount to cents.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a percentage to 2 decimal places and converts it to `f64`.
#[must_use]
pub fn round_percent(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Rounds a weight to 1 decimal place and converts it to `f64`.
#[must_use]
pub fn round_weight(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Returns `part / whole * 100`, or zero when `whole` is not positive.
#[must_use]
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_money_half_away_from_zero() {
        assert_eq!(round_money(dec!(1.005)), dec!(1.01));
        assert_eq!(round_money(dec!(-1.005)), dec!(-1.01));
        assert_eq!(round_money(dec!(2.004)), dec!(2.00));
    }

    #[test]
    fn test_round_weight() {
        assert_relative_eq!(round_weight(dec!(33.333333)), 33.3);
        assert_relative_eq!(round_weight(dec!(66.65)), 66.7);
        assert_relative_eq!(round_weight(dec!(100)), 100.0);
    }

    #[test]
    fn test_round_percent() {
        assert_relative_eq!(round_percent(dec!(12.3456)), 12.35);
        assert_relative_eq!(round_percent(dec!(-0.004)), 0.0);
    }

    #[test]
    fn test_percent_of_zero_guard() {
        assert_eq!(percent_of(dec!(10), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(percent_of(dec!(10), dec!(-5)), Decimal::ZERO);
        assert_eq!(percent_of(dec!(25), dec!(200)), dec!(12.5));
    }
}
