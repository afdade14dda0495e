//! # Nestegg Core
//!
//! Core domain types for the Nestegg portfolio analytics engine.
//!
//! This crate provides the building blocks shared by the analyzer, the growth
//! projector and the service layer:
//!
//! - **Types**: [`Symbol`], [`Holding`], [`ClosedTransaction`]
//! - **Sectors**: [`Sector`] and the static symbol→sector [`SectorTable`]
//! - **Rounding**: boundary rounding for money, percents and weights
//!
//! ## Design Philosophy
//!
//! - **Decimal money**: every currency amount is a [`rust_decimal::Decimal`]
//! - **Round at the edge**: intermediate sums stay unrounded, outputs are rounded once
//! - **Validated construction**: builders reject negative quantities and prices
//!
//! ## Example
//!
//! ```rust
//! use nestegg_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let holding = Holding::builder()
//!     .symbol("aapl")
//!     .quantity(dec!(10))
//!     .cost_basis_price(dec!(150))
//!     .current_price(dec!(180))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(holding.symbol.as_str(), "AAPL");
//! assert_eq!(holding.market_value().unwrap(), dec!(1800));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod rounding;
pub mod sectors;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use sectors::{Sector, SectorTable};
pub use types::{ClosedTransaction, ClosedTransactionBuilder, Holding, HoldingBuilder, Symbol};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::rounding::{percent_of, round_money, round_percent, round_weight};
    pub use crate::sectors::{Sector, SectorTable};
    pub use crate::types::{ClosedTransaction, Holding, HoldingBuilder, Symbol};
    pub use rust_decimal::Decimal;
}
