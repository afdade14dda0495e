//! Configuration types for portfolio analytics.
//!
//! Domain types ([`Holding`](nestegg_core::Holding), [`Sector`](nestegg_core::Sector))
//! live in `nestegg-core` and are re-exported here for convenience.

mod config;

pub use config::AnalyticsConfig;
pub use nestegg_core::{ClosedTransaction, Holding, HoldingBuilder, Sector, SectorTable, Symbol};
