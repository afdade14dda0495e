//! Holding representation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ClosedTransaction, Symbol};
use crate::error::{CoreError, CoreResult};
use crate::rounding::percent_of;

/// A single owned position.
///
/// `current_price` is optional: when the price source had nothing for the
/// symbol the holding is valued at its cost basis (see [`Holding::effective_price`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HoldingRecord")]
pub struct Holding {
    /// Store identifier, if the holding came from a store.
    pub id: Option<String>,

    /// Normalized ticker symbol.
    pub symbol: Symbol,

    /// Display name (defaults to the symbol).
    pub name: String,

    /// Units held.
    pub quantity: Decimal,

    /// Price per unit at acquisition.
    pub cost_basis_price: Decimal,

    /// Latest known price per unit, if any.
    pub current_price: Option<Decimal>,

    /// When the position was opened.
    pub acquired_at: Option<DateTime<Utc>>,
}

/// Unvalidated wire form of a [`Holding`].
#[derive(Debug, Deserialize)]
struct HoldingRecord {
    #[serde(default)]
    id: Option<String>,
    symbol: String,
    #[serde(default)]
    name: Option<String>,
    quantity: Decimal,
    cost_basis_price: Decimal,
    #[serde(default)]
    current_price: Option<Decimal>,
    #[serde(default)]
    acquired_at: Option<DateTime<Utc>>,
}

impl TryFrom<HoldingRecord> for Holding {
    type Error = CoreError;

    fn try_from(record: HoldingRecord) -> Result<Self, Self::Error> {
        let mut builder = HoldingBuilder::new()
            .symbol(record.symbol)
            .quantity(record.quantity)
            .cost_basis_price(record.cost_basis_price);
        if let Some(id) = record.id {
            builder = builder.id(id);
        }
        if let Some(name) = record.name {
            builder = builder.name(name);
        }
        if let Some(price) = record.current_price {
            builder = builder.current_price(price);
        }
        if let Some(at) = record.acquired_at {
            builder = builder.acquired_at(at);
        }
        builder.build()
    }
}

impl Holding {
    /// Creates a new holding builder.
    #[must_use]
    pub fn builder() -> HoldingBuilder {
        HoldingBuilder::new()
    }

    /// Price used for valuation: the current price, else the cost basis.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        self.current_price.unwrap_or(self.cost_basis_price)
    }

    /// Returns true if a current price is present.
    #[must_use]
    pub fn is_priced(&self) -> bool {
        self.current_price.is_some()
    }

    /// `quantity * effective_price`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Overflow`] if the product does not fit in a decimal.
    pub fn market_value(&self) -> CoreResult<Decimal> {
        self.quantity
            .checked_mul(self.effective_price())
            .ok_or_else(|| CoreError::overflow(self.symbol.as_str(), "market_value"))
    }

    /// `quantity * cost_basis_price`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Overflow`] if the product does not fit in a decimal.
    pub fn cost(&self) -> CoreResult<Decimal> {
        self.quantity
            .checked_mul(self.cost_basis_price)
            .ok_or_else(|| CoreError::overflow(self.symbol.as_str(), "cost"))
    }

    /// Unrealized profit or loss.
    pub fn unrealized_gain(&self) -> CoreResult<Decimal> {
        Ok(self.market_value()? - self.cost()?)
    }

    /// Unrealized profit or loss as a percent of cost; zero when cost is zero.
    pub fn unrealized_gain_percent(&self) -> CoreResult<Decimal> {
        Ok(percent_of(self.unrealized_gain()?, self.cost()?))
    }

    /// Returns a copy with the current price replaced.
    ///
    /// Negative quotes are ignored and the previous price is kept.
    #[must_use]
    pub fn with_current_price(mut self, price: Option<Decimal>) -> Self {
        match price {
            Some(p) if p < Decimal::ZERO => {
                log::warn!("ignoring negative price {} for {}", p, self.symbol);
            }
            other => self.current_price = other,
        }
        self
    }

    /// Liquidates the whole position at `sale_price`.
    ///
    /// The holding itself is not consumed; removing it from a store is the
    /// caller's job once the returned transaction is persisted.
    pub fn close(
        &self,
        sale_price: Decimal,
        sale_date: DateTime<Utc>,
    ) -> CoreResult<ClosedTransaction> {
        ClosedTransaction::builder()
            .symbol(self.symbol.clone())
            .name(self.name.clone())
            .quantity(self.quantity)
            .purchase_price(self.cost_basis_price)
            .sale_price(sale_price)
            .purchase_date(self.acquired_at)
            .sale_date(sale_date)
            .build()
    }
}

/// Builder for constructing a [`Holding`].
#[derive(Debug, Clone, Default)]
pub struct HoldingBuilder {
    id: Option<String>,
    symbol: Option<String>,
    name: Option<String>,
    quantity: Option<Decimal>,
    cost_basis_price: Option<Decimal>,
    current_price: Option<Decimal>,
    acquired_at: Option<DateTime<Utc>>,
}

impl HoldingBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store identifier.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the symbol (normalized on build).
    #[must_use]
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the quantity.
    #[must_use]
    pub fn quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Sets the cost basis price per unit.
    #[must_use]
    pub fn cost_basis_price(mut self, price: Decimal) -> Self {
        self.cost_basis_price = Some(price);
        self
    }

    /// Sets the current price per unit.
    #[must_use]
    pub fn current_price(mut self, price: Decimal) -> Self {
        self.current_price = Some(price);
        self
    }

    /// Sets the acquisition time.
    #[must_use]
    pub fn acquired_at(mut self, at: DateTime<Utc>) -> Self {
        self.acquired_at = Some(at);
        self
    }

    /// Builds the holding.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing, the symbol is blank,
    /// or any quantity or price is negative.
    pub fn build(self) -> CoreResult<Holding> {
        let raw_symbol = self
            .symbol
            .ok_or_else(|| CoreError::missing_field("symbol"))?;
        let symbol = Symbol::new(&raw_symbol)?;

        let quantity = self
            .quantity
            .ok_or_else(|| CoreError::missing_field("quantity"))?;
        let cost_basis_price = self
            .cost_basis_price
            .ok_or_else(|| CoreError::missing_field("cost_basis_price"))?;

        let checks = [
            ("quantity", Some(quantity)),
            ("cost_basis_price", Some(cost_basis_price)),
            ("current_price", self.current_price),
        ];
        for (field, value) in checks {
            if let Some(v) = value {
                if v < Decimal::ZERO {
                    return Err(CoreError::negative(symbol.as_str(), field, v));
                }
            }
        }

        let name = match self.name {
            Some(n) if !n.trim().is_empty() => n,
            _ => symbol.to_string(),
        };

        Ok(Holding {
            id: self.id,
            symbol,
            name,
            quantity,
            cost_basis_price,
            current_price: self.current_price,
            acquired_at: self.acquired_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn aapl() -> Holding {
        Holding::builder()
            .symbol("aapl")
            .quantity(dec!(10))
            .cost_basis_price(dec!(150))
            .current_price(dec!(165))
            .build()
            .unwrap()
    }

    #[test]
    fn test_valuation() {
        let h = aapl();
        assert_eq!(h.market_value().unwrap(), dec!(1650));
        assert_eq!(h.cost().unwrap(), dec!(1500));
        assert_eq!(h.unrealized_gain().unwrap(), dec!(150));
        assert_eq!(h.unrealized_gain_percent().unwrap(), dec!(10));
    }

    #[test]
    fn test_name_defaults_to_symbol() {
        assert_eq!(aapl().name, "AAPL");
        let named = Holding::builder()
            .symbol("AAPL")
            .name("Apple Inc.")
            .quantity(dec!(1))
            .cost_basis_price(dec!(1))
            .build()
            .unwrap();
        assert_eq!(named.name, "Apple Inc.");
    }

    #[test]
    fn test_missing_price_falls_back_to_cost_basis() {
        let h = aapl().with_current_price(None);
        assert!(!h.is_priced());
        assert_eq!(h.effective_price(), dec!(150));
        assert_eq!(h.unrealized_gain().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_quote_is_ignored() {
        let h = aapl().with_current_price(Some(dec!(-3)));
        assert_eq!(h.current_price, Some(dec!(165)));
    }

    #[test]
    fn test_zero_cost_percent_is_zero() {
        let gift = Holding::builder()
            .symbol("GIFT")
            .quantity(dec!(5))
            .cost_basis_price(Decimal::ZERO)
            .current_price(dec!(10))
            .build()
            .unwrap();
        assert_eq!(gift.unrealized_gain().unwrap(), dec!(50));
        assert_eq!(gift.unrealized_gain_percent().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_oversized_position_reports_overflow() {
        let huge = dec!(1000000000000000);
        let h = Holding::builder()
            .symbol("BIG")
            .quantity(huge)
            .cost_basis_price(huge)
            .current_price(huge)
            .build()
            .unwrap();

        assert_eq!(
            h.market_value().unwrap_err(),
            CoreError::overflow("BIG", "market_value")
        );
        assert_eq!(h.cost().unwrap_err(), CoreError::overflow("BIG", "cost"));
        assert!(h.unrealized_gain().is_err());
    }

    #[test]
    fn test_build_validation() {
        let err = Holding::builder()
            .symbol("AAPL")
            .quantity(dec!(-1))
            .cost_basis_price(dec!(1))
            .build()
            .unwrap_err();
        assert!(matches!(err, CoreError::NegativeAmount { ref field, .. } if field == "quantity"));

        let err = Holding::builder()
            .quantity(dec!(1))
            .cost_basis_price(dec!(1))
            .build()
            .unwrap_err();
        assert_eq!(err, CoreError::missing_field("symbol"));

        assert!(Holding::builder()
            .symbol("AAPL")
            .quantity(dec!(1))
            .cost_basis_price(dec!(1))
            .current_price(dec!(-0.01))
            .build()
            .is_err());
    }

    #[test]
    fn test_close_carries_position() {
        let opened = Utc.with_ymd_and_hms(2024, 1, 2, 15, 0, 0).unwrap();
        let sold = Utc.with_ymd_and_hms(2025, 3, 4, 15, 0, 0).unwrap();
        let h = Holding {
            acquired_at: Some(opened),
            ..aapl()
        };

        let tx = h.close(dec!(180), sold).unwrap();
        assert_eq!(tx.symbol, h.symbol);
        assert_eq!(tx.quantity, dec!(10));
        assert_eq!(tx.purchase_price, dec!(150));
        assert_eq!(tx.purchase_date, Some(opened));
        assert_eq!(tx.sale_date, sold);
        assert_eq!(tx.profit_loss().unwrap(), dec!(300));
    }

    #[test]
    fn test_deserialize_validates() {
        let h: Holding = serde_json::from_str(
            r#"{"symbol": "nvda", "quantity": 2, "cost_basis_price": 400.5}"#,
        )
        .unwrap();
        assert_eq!(h.symbol.as_str(), "NVDA");
        assert_eq!(h.name, "NVDA");
        assert_eq!(h.current_price, None);

        let bad = serde_json::from_str::<Holding>(
            r#"{"symbol": "nvda", "quantity": -2, "cost_basis_price": 400.5}"#,
        );
        assert!(bad.is_err());
    }
}
