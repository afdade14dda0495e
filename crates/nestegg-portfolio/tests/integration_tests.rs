//! Integration tests for nestegg-portfolio.
//!
//! These tests verify end-to-end functionality with realistic portfolios.

use approx::assert_relative_eq;
use chrono::{TimeZone, Utc};
use nestegg_portfolio::prelude::*;
use rust_decimal_macros::dec;

// =============================================================================
// TEST FIXTURES
// =============================================================================

fn create_holding(symbol: &str, quantity: Decimal, cost: Decimal, price: Decimal) -> Holding {
    Holding::builder()
        .symbol(symbol)
        .quantity(quantity)
        .cost_basis_price(cost)
        .current_price(price)
        .build()
        .unwrap()
}

/// A diversified eight-position portfolio across five sectors.
fn create_diversified_portfolio() -> Vec<Holding> {
    vec![
        create_holding("AAPL", dec!(20), dec!(150), dec!(190)),
        create_holding("MSFT", dec!(8), dec!(300), dec!(410)),
        create_holding("JPM", dec!(15), dec!(140), dec!(195)),
        create_holding("V", dec!(10), dec!(220), dec!(275)),
        create_holding("JNJ", dec!(18), dec!(160), dec!(150)),
        create_holding("WMT", dec!(25), dec!(60), dec!(80)),
        create_holding("AMZN", dec!(12), dec!(130), dec!(185)),
        create_holding("SPY", dec!(6), dec!(420), dec!(560)),
    ]
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_single_flat_position() {
    let holdings = vec![create_holding("AAPL", dec!(10), dec!(150), dec!(150))];
    let snap = analyze_portfolio(&holdings, &AnalyticsConfig::default()).unwrap();

    assert_eq!(snap.total_value, dec!(1500));
    assert_eq!(snap.total_gain, Decimal::ZERO);
    assert_relative_eq!(snap.risk_metrics.top_holding_weight, 100.0);
    assert_eq!(snap.risk_metrics.concentration_risk, ConcentrationRisk::High);
    assert_eq!(
        snap.recommendations,
        vec![
            Recommendation::AddAssets,
            Recommendation::DiversifySectors,
            Recommendation::Rebalance {
                symbol: Symbol::new("AAPL").unwrap(),
                weight: 100.0,
            },
        ]
    );
}

#[test]
fn test_empty_portfolio() {
    let err = analyze_portfolio(&[], &AnalyticsConfig::default()).unwrap_err();
    assert!(err.is_no_assets());
}

#[test]
fn test_diversified_portfolio() {
    let holdings = create_diversified_portfolio();
    let snap = analyze_portfolio(&holdings, &AnalyticsConfig::default()).unwrap();

    // 3800 + 3280 + 2925 + 2750 + 2700 + 2000 + 2220 + 3360
    assert_eq!(snap.total_value, dec!(23035));
    // 3000 + 2400 + 2100 + 2200 + 2880 + 1500 + 1560 + 2520
    assert_eq!(snap.total_invested, dec!(18160));
    assert_eq!(snap.total_gain, dec!(4875));
    assert_relative_eq!(snap.total_gain_percent, 26.84);

    assert_eq!(snap.assets[0].symbol.as_str(), "AAPL");
    assert_relative_eq!(snap.assets[0].weight, 16.5);
    assert_eq!(snap.risk_metrics.concentration_risk, ConcentrationRisk::Low);

    // Technology, Financial, Healthcare, Consumer Defensive, Consumer Cyclical, ETF
    assert_eq!(snap.sectors.len(), 6);
    assert_eq!(snap.sectors[0].sector, Sector::Technology);
    assert_eq!(snap.sectors[0].count, 2);

    // 40 + 30 + (30 - 16.5)
    assert_eq!(snap.risk_metrics.diversification_score, 84);
    assert_eq!(snap.recommendations, vec![Recommendation::WellBalanced]);

    let jnj = snap.assets.iter().find(|a| a.symbol.as_str() == "JNJ").unwrap();
    assert_eq!(jnj.profit_loss, dec!(-180));
    assert_relative_eq!(jnj.profit_loss_percent, -6.25);
}

#[test]
fn test_performance_rules() {
    let holdings = create_diversified_portfolio();
    let config = AnalyticsConfig::default().with_performance_rules(true);
    let snap = analyze_portfolio(&holdings, &config).unwrap();
    assert_eq!(snap.recommendations, vec![Recommendation::TakeProfits]);
}

#[test]
fn test_sector_override() {
    let holdings = vec![
        create_holding("XOM", dec!(10), dec!(100), dec!(110)),
        create_holding("CVX", dec!(10), dec!(100), dec!(90)),
    ];
    let config = AnalyticsConfig::default()
        .with_sector_override(Symbol::new("XOM").unwrap(), Sector::from_name("Energy"))
        .with_sector_override(Symbol::new("cvx").unwrap(), Sector::from_name("Energy"));

    let snap = analyze_portfolio(&holdings, &config).unwrap();
    assert_eq!(snap.sectors.len(), 1);
    assert_eq!(snap.sectors[0].sector.name(), "Energy");
    assert_eq!(snap.sectors[0].count, 2);
}

#[test]
fn test_parallel_matches_sequential() {
    let holdings: Vec<Holding> = (0..250)
        .map(|i| {
            create_holding(
                &format!("T{i}"),
                Decimal::from(i + 1),
                dec!(10),
                Decimal::from(5 + i % 17),
            )
        })
        .collect();

    let seq = analyze_portfolio(&holdings, &AnalyticsConfig::sequential()).unwrap();
    let par = analyze_portfolio(&holdings, &AnalyticsConfig::default().with_threshold(10)).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn test_snapshot_serializes() {
    let snap = analyze_portfolio(&create_diversified_portfolio(), &AnalyticsConfig::default())
        .unwrap();
    let json = serde_json::to_value(&snap).unwrap();

    assert_eq!(json["risk_metrics"]["concentration_risk"], "Low");
    assert_eq!(json["sectors"][0]["sector"], "Technology");
    assert!(json.get("warnings").is_none());
}

#[test]
fn test_report_and_realized_together() {
    let snap = analyze_portfolio(&create_diversified_portfolio(), &AnalyticsConfig::default())
        .unwrap();
    let report = render_report(&snap, &ReportOptions::default());
    assert!(report.contains("$23,035.00"));
    assert!(report.contains("1. **AAPL**"));
    assert!(report.contains("Excellent!"));

    let tx = ClosedTransaction::builder()
        .symbol(Symbol::new("NVDA").unwrap())
        .quantity(dec!(3))
        .purchase_price(dec!(400))
        .sale_price(dec!(900))
        .sale_date(Utc.with_ymd_and_hms(2025, 6, 30, 16, 0, 0).unwrap())
        .build()
        .unwrap();
    let realized = summarize_realized(&[tx]).unwrap();
    let combined = combined_gain(&snap, &realized).unwrap();

    assert_eq!(combined.realized, dec!(1500));
    assert_eq!(combined.total, dec!(6375));
    assert_eq!(snap.total_gain, dec!(4875));
}

#[test]
fn test_allocation_profiles() {
    let conservative = allocation_for_profile(1).unwrap();
    assert_eq!(conservative.profile_type, RiskProfile::Conservative);
    assert_eq!(conservative.bonds, 60);
    assert!(allocation_for_profile(7).is_err());
}
