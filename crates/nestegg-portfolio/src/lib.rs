//! # Nestegg Portfolio
//!
//! Portfolio analytics for personal investment holdings.
//!
//! This crate turns a list of raw holdings into a [`PortfolioSnapshot`]:
//! valuations, weights, sector concentration, a diversification score and
//! rule-based recommendations.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: All calculations are stateless with explicit inputs
//! - **Decimal money**: Sums accumulate unrounded; rounding happens once at the output
//! - **Stable ordering**: Ties in weight keep input order
//! - **Config-driven parallelism**: Optional rayon support with threshold-based switching
//!
//! ## Features
//!
//! - **Valuation**: Market value, cost, unrealized gain per holding
//! - **Weights**: Per-asset and per-sector share of total value
//! - **Risk**: Diversification score and concentration bucket
//! - **Recommendations**: Rule-based advice, with optional gain-based rules
//! - **Report**: Markdown narrative of a snapshot
//! - **Realized gains**: Summary of closed positions
//! - **Allocations**: Model stock/bond/cash splits for risk profiles 1-4
//!
//! ## Quick Start
//!
//! ```rust
//! use nestegg_portfolio::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let holdings = vec![
//!     Holding::builder().symbol("AAPL").quantity(dec!(10))
//!         .cost_basis_price(dec!(150)).current_price(dec!(180)).build().unwrap(),
//!     Holding::builder().symbol("JPM").quantity(dec!(5))
//!         .cost_basis_price(dec!(140)).current_price(dec!(200)).build().unwrap(),
//! ];
//!
//! let snapshot = analyze_portfolio(&holdings, &AnalyticsConfig::default()).unwrap();
//! assert_eq!(snapshot.total_value, dec!(2800));
//! assert_eq!(snapshot.sectors.len(), 2);
//!
//! let report = render_report(&snapshot, &ReportOptions::default());
//! assert!(report.contains("Top Holdings"));
//! ```
//!
//! ## Module Overview
//!
//! - [`analytics`] - Valuation, weights, risk, recommendations, snapshot
//! - [`bucketing`] - Sector distribution
//! - [`report`] - Narrative report and currency formatting
//! - [`realized`] - Realized gains summary
//! - [`allocation`] - Model allocations by risk profile
//! - [`types`] - Configuration
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel valuation for large portfolios

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

// Module declarations
pub mod allocation;
pub mod analytics;
pub mod bucketing;
pub mod error;
pub mod realized;
pub mod report;
pub mod types;

// Re-export error types at crate root
pub use error::{PortfolioError, PortfolioResult};

// Re-export main types
pub use types::{AnalyticsConfig, ClosedTransaction, Holding, HoldingBuilder, Sector, Symbol};

// Re-export analytics types and functions
pub use analytics::{
    analyze_portfolio, maybe_parallel_map, AnalysisWarning, AssetAnalysis, ConcentrationRisk,
    PortfolioSnapshot, Recommendation, RiskMetrics,
};

pub use allocation::{
    allocation_for_profile, suggestions_for_profile, AllocationProfile, RiskProfile,
    StockSuggestion,
};
pub use bucketing::{bucket_by_sector, SectorBreakdown};
pub use realized::{combined_gain, summarize_realized, CombinedGain, RealizedGainsSummary};
pub use report::{format_currency, render_report, ReportOptions};

/// Prelude module for convenient imports.
///
/// ```rust
/// use nestegg_portfolio::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{PortfolioError, PortfolioResult};

    // Domain types
    pub use crate::types::{ClosedTransaction, Holding, HoldingBuilder, Sector, SectorTable, Symbol};

    // Config types
    pub use crate::types::AnalyticsConfig;

    // Analytics
    pub use crate::analytics::{
        analyze_portfolio, AnalysisWarning, AssetAnalysis, ConcentrationRisk, PortfolioSnapshot,
        Recommendation, RiskMetrics,
    };

    // Bucketing
    pub use crate::bucketing::{bucket_by_sector, SectorBreakdown};

    // Report, realized gains, allocations
    pub use crate::allocation::{
        allocation_for_profile, suggestions_for_profile, AllocationProfile, RiskProfile,
        StockSuggestion,
    };
    pub use crate::realized::{combined_gain, summarize_realized, CombinedGain, RealizedGainsSummary};
    pub use crate::report::{render_report, ReportOptions};

    pub use rust_decimal::Decimal;
}
