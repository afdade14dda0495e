//! # Nestegg Traits
//!
//! Trait definitions for the collaborators of the Nestegg engine.
//!
//! This crate contains ONLY trait definitions and the small types they share.
//! Implementations live in extension crates such as `nestegg-ext-file`.
//!
//! ## Module Structure
//!
//! - [`market_data`]: [`PriceSource`](market_data::PriceSource) for last-known prices
//! - [`storage`]: [`HoldingStore`](storage::HoldingStore) and
//!   [`TransactionStore`](storage::TransactionStore)
//! - [`ids`]: user and holding identifiers
//!
//! ## Dependency Injection
//!
//! The engine receives these traits as trait objects:
//!
//! ```ignore
//! PortfolioServiceBuilder::new()
//!     .with_holdings(Arc::new(store.clone()))
//!     .with_transactions(Arc::new(store))
//!     .with_prices(Arc::new(prices))
//!     .build()
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod ids;
pub mod market_data;
pub mod storage;

// Re-export commonly used types
pub use error::TraitError;
pub use ids::*;
pub use market_data::{PriceSource, SourceType};
pub use storage::{HoldingStore, TransactionStore};
