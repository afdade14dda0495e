//! Portfolio-level analytics.
//!
//! This module provides the analyzer pipeline:
//! - valuation of each holding and portfolio totals
//! - weights and the ranked asset breakdown
//! - diversification scoring and concentration risk
//! - rule-based recommendations
//! - the [`PortfolioSnapshot`] that ties them together
//!
//! All functions are pure - they take holdings and configuration as input
//! and return computed results. No caching, no I/O, no side effects.

mod parallel;
mod recommendations;
mod risk;
mod summary;
mod valuation;
mod weights;

pub use parallel::*;
pub use recommendations::*;
pub use risk::*;
pub use summary::*;
pub use valuation::*;
pub use weights::*;
