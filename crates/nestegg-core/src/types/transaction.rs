//! Closed-position transactions (realized gains).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Symbol;
use crate::error::{CoreError, CoreResult};
use crate::rounding::percent_of;

/// A historical realized event: a position that was sold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TransactionRecord")]
pub struct ClosedTransaction {
    /// Transaction identifier.
    pub id: Uuid,

    /// Symbol that was sold.
    pub symbol: Symbol,

    /// Display name at the time of sale.
    pub name: String,

    /// Units sold.
    pub quantity: Decimal,

    /// Price per unit paid.
    pub purchase_price: Decimal,

    /// Price per unit received.
    pub sale_price: Decimal,

    /// When the position was opened, if known.
    pub purchase_date: Option<DateTime<Utc>>,

    /// When the position was closed.
    pub sale_date: DateTime<Utc>,
}

/// Unvalidated wire form of a [`ClosedTransaction`].
#[derive(Debug, Deserialize)]
struct TransactionRecord {
    #[serde(default)]
    id: Option<Uuid>,
    symbol: String,
    #[serde(default)]
    name: Option<String>,
    quantity: Decimal,
    purchase_price: Decimal,
    sale_price: Decimal,
    #[serde(default)]
    purchase_date: Option<DateTime<Utc>>,
    sale_date: DateTime<Utc>,
}

impl TryFrom<TransactionRecord> for ClosedTransaction {
    type Error = CoreError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        let mut builder = ClosedTransactionBuilder::default()
            .symbol(Symbol::new(&record.symbol)?)
            .quantity(record.quantity)
            .purchase_price(record.purchase_price)
            .sale_price(record.sale_price)
            .purchase_date(record.purchase_date)
            .sale_date(record.sale_date);
        if let Some(id) = record.id {
            builder = builder.id(id);
        }
        if let Some(name) = record.name {
            builder = builder.name(name);
        }
        builder.build()
    }
}

impl ClosedTransaction {
    /// Creates a new transaction builder.
    #[must_use]
    pub fn builder() -> ClosedTransactionBuilder {
        ClosedTransactionBuilder::default()
    }

    fn times_quantity(&self, price: Decimal, field: &str) -> CoreResult<Decimal> {
        self.quantity
            .checked_mul(price)
            .ok_or_else(|| CoreError::overflow(self.symbol.as_str(), field))
    }

    /// `quantity * purchase_price`.
    pub fn total_cost(&self) -> CoreResult<Decimal> {
        self.times_quantity(self.purchase_price, "total_cost")
    }

    /// `quantity * sale_price`.
    pub fn total_revenue(&self) -> CoreResult<Decimal> {
        self.times_quantity(self.sale_price, "total_revenue")
    }

    /// `quantity * (sale_price - purchase_price)`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Overflow`] if the product does not fit in a decimal.
    pub fn profit_loss(&self) -> CoreResult<Decimal> {
        self.times_quantity(self.sale_price - self.purchase_price, "profit_loss")
    }

    /// Realized profit as a percent of cost; zero when cost is zero.
    pub fn profit_loss_percent(&self) -> CoreResult<Decimal> {
        Ok(percent_of(self.profit_loss()?, self.total_cost()?))
    }
}

/// Builder for a [`ClosedTransaction`].
#[derive(Debug, Clone, Default)]
pub struct ClosedTransactionBuilder {
    id: Option<Uuid>,
    symbol: Option<Symbol>,
    name: Option<String>,
    quantity: Option<Decimal>,
    purchase_price: Option<Decimal>,
    sale_price: Option<Decimal>,
    purchase_date: Option<DateTime<Utc>>,
    sale_date: Option<DateTime<Utc>>,
}

impl ClosedTransactionBuilder {
    /// Sets an explicit id (a fresh v4 id is used otherwise).
    #[must_use]
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the symbol.
    #[must_use]
    pub fn symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = Some(symbol);
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the quantity sold.
    #[must_use]
    pub fn quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Sets the purchase price per unit.
    #[must_use]
    pub fn purchase_price(mut self, price: Decimal) -> Self {
        self.purchase_price = Some(price);
        self
    }

    /// Sets the sale price per unit.
    #[must_use]
    pub fn sale_price(mut self, price: Decimal) -> Self {
        self.sale_price = Some(price);
        self
    }

    /// Sets the purchase date.
    #[must_use]
    pub fn purchase_date(mut self, date: Option<DateTime<Utc>>) -> Self {
        self.purchase_date = date;
        self
    }

    /// Sets the sale date.
    #[must_use]
    pub fn sale_date(mut self, date: DateTime<Utc>) -> Self {
        self.sale_date = Some(date);
        self
    }

    /// Builds the transaction.
    pub fn build(self) -> CoreResult<ClosedTransaction> {
        let symbol = self
            .symbol
            .ok_or_else(|| CoreError::missing_field("symbol"))?;
        let quantity = self
            .quantity
            .ok_or_else(|| CoreError::missing_field("quantity"))?;
        let purchase_price = self
            .purchase_price
            .ok_or_else(|| CoreError::missing_field("purchase_price"))?;
        let sale_price = self
            .sale_price
            .ok_or_else(|| CoreError::missing_field("sale_price"))?;
        let sale_date = self
            .sale_date
            .ok_or_else(|| CoreError::missing_field("sale_date"))?;

        for (field, value) in [
            ("quantity", quantity),
            ("purchase_price", purchase_price),
            ("sale_price", sale_price),
        ] {
            if value < Decimal::ZERO {
                return Err(CoreError::negative(symbol.as_str(), field, value));
            }
        }

        Ok(ClosedTransaction {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name.unwrap_or_else(|| symbol.to_string()),
            symbol,
            quantity,
            purchase_price,
            sale_price,
            purchase_date: self.purchase_date,
            sale_date,
        })
    }
}
