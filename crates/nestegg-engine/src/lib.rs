//! # Nestegg Engine
//!
//! The stateful side of Nestegg.
//!
//! This crate provides:
//! - [`PortfolioService`]: prices holdings and runs the analyzer, closes
//!   positions, reports realized gains
//! - [`PortfolioServiceBuilder`]: wires stores and the price source
//! - [`EngineConfig`]: TOML-backed settings
//!
//! ## Architecture
//!
//! ```text
//! HoldingStore ──> PortfolioService ──> analyze_portfolio ──> PortfolioSnapshot
//!                    │      ▲
//!                    │      └── PriceSource (timeout, cost-basis fallback)
//!                    │
//!                    └──> TransactionStore (insert, then delete holding)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let service = PortfolioServiceBuilder::new()
//!     .with_config(EngineConfig::load_or_default(path)?)
//!     .with_holdings(ledger.clone())
//!     .with_transactions(ledger)
//!     .with_prices(prices)
//!     .build()?;
//!
//! let snapshot = service.analyze(&UserId::new("me")).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod config;
pub mod error;
pub mod service;

// Re-exports
pub use builder::PortfolioServiceBuilder;
pub use config::EngineConfig;
pub use error::EngineError;
pub use service::PortfolioService;
