//! Property-based tests for portfolio invariants.
//!
//! These tests verify key properties that should always hold:
//! - Asset and sector weights sum to 100% within rounding
//! - Total gain reconciles with value and invested
//! - Bucketing covers all holdings and spreads across sectors
//! - The diversification score stays in range
//! - Concentration risk follows the top weight

use nestegg_portfolio::prelude::*;
use proptest::prelude::*;
use rust_decimal_macros::dec;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

const SYMBOLS: [&str; 12] = [
    "AAPL", "MSFT", "AMZN", "TSLA", "JPM", "JNJ", "WMT", "DIS", "SPY", "BTC-USD", "XOM", "KO",
];

/// Generates N holdings with varying characteristics.
///
/// Symbols come straight from the sector table, so a symbol may repeat as
/// a second lot.
fn generate_holdings(n: usize, seed: u64) -> Vec<Holding> {
    (0..n)
        .map(|i| {
            let hash = simple_hash(seed, i as u64);
            let symbol = SYMBOLS[hash as usize % SYMBOLS.len()];
            let quantity = Decimal::from(1 + (hash % 500) as i64);
            let cost = Decimal::new(100 + (hash % 90_000) as i64, 2);
            let price = Decimal::new(100 + ((hash >> 16) % 90_000) as i64, 2);

            let builder = Holding::builder()
                .symbol(symbol)
                .quantity(quantity)
                .cost_basis_price(cost);
            // Roughly one holding in seven has no quote.
            let builder = if hash % 7 == 0 {
                builder
            } else {
                builder.current_price(price)
            };
            builder.build().unwrap()
        })
        .collect()
}

/// Simple deterministic hash for test data generation.
fn simple_hash(seed: u64, i: u64) -> u64 {
    let mut x = seed.wrapping_add(i).wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x = x.wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x
}

/// Each 1 dp weight may be off by up to 0.05.
fn rounding_tolerance(rows: usize) -> f64 {
    rows as f64 * 0.05 + 1e-9
}

// =============================================================================
// PROPERTY: WEIGHTS SUM TO 100%
// =============================================================================

#[test]
fn property_asset_weights_sum_to_100() {
    let config = AnalyticsConfig::default();

    for seed in 0..10 {
        for size in [1, 5, 10, 25, 50] {
            let snap = analyze_portfolio(&generate_holdings(size, seed), &config).unwrap();
            let total: f64 = snap.assets.iter().map(|a| a.weight).sum();

            assert!(
                (total - 100.0).abs() <= rounding_tolerance(snap.assets.len()),
                "Asset weights should sum to 100%, got {} for size={}, seed={}",
                total,
                size,
                seed
            );
        }
    }
}

#[test]
fn property_sector_weights_sum_to_100() {
    let config = AnalyticsConfig::default();

    for seed in 0..10 {
        for size in [1, 5, 10, 25, 50] {
            let snap = analyze_portfolio(&generate_holdings(size, seed), &config).unwrap();
            let total: f64 = snap.sectors.iter().map(|s| s.weight).sum();

            assert!(
                (total - 100.0).abs() <= rounding_tolerance(snap.sectors.len()),
                "Sector weights should sum to 100%, got {} for size={}, seed={}",
                total,
                size,
                seed
            );
        }
    }
}

// =============================================================================
// PROPERTY: TOTALS RECONCILE
// =============================================================================

#[test]
fn property_total_gain_reconciles() {
    let config = AnalyticsConfig::default();

    for seed in 0..20 {
        let snap = analyze_portfolio(&generate_holdings(15, seed), &config).unwrap();
        let diff = (snap.total_gain - (snap.total_value - snap.total_invested)).abs();
        assert!(diff <= dec!(0.01), "seed={seed}: gain off by {diff}");
    }
}

#[test]
fn property_asset_values_sum_to_total() {
    let config = AnalyticsConfig::default();

    for seed in 0..20 {
        let snap = analyze_portfolio(&generate_holdings(20, seed), &config).unwrap();
        let sum: Decimal = snap.assets.iter().map(|a| a.value).sum();
        // each row rounds to the cent independently
        let tolerance = Decimal::new(5, 3) * Decimal::from(snap.assets.len());
        assert!((sum - snap.total_value).abs() <= tolerance, "seed={seed}");
    }
}

// =============================================================================
// PROPERTY: BUCKETING COVERS ALL HOLDINGS
// =============================================================================

#[test]
fn property_sector_bucketing_covers_all() {
    let config = AnalyticsConfig::default();

    for seed in 0..10 {
        for size in [1, 7, 30] {
            let snap = analyze_portfolio(&generate_holdings(size, seed), &config).unwrap();
            let count: usize = snap.sectors.iter().map(|s| s.count).sum();
            assert_eq!(count, snap.risk_metrics.asset_count);
            assert_eq!(count, size);
            assert_eq!(snap.sectors.len(), snap.risk_metrics.sector_count);
        }
    }
}

#[test]
fn property_larger_portfolios_span_several_sectors() {
    let config = AnalyticsConfig::default();

    for seed in 0..10 {
        for size in [10, 25, 50] {
            let snap = analyze_portfolio(&generate_holdings(size, seed), &config).unwrap();
            assert!(
                snap.sectors.len() > 1,
                "size={size}, seed={seed}: everything landed in {:?}",
                snap.sectors.first().map(|s| &s.sector)
            );
            assert!(snap.sectors.iter().any(|s| s.sector != Sector::Other));
        }
    }
}

#[test]
fn property_ordering_is_descending() {
    let config = AnalyticsConfig::default();

    for seed in 0..10 {
        let snap = analyze_portfolio(&generate_holdings(25, seed), &config).unwrap();
        assert!(snap.assets.windows(2).all(|w| w[0].weight >= w[1].weight));
        assert!(snap.sectors.windows(2).all(|w| w[0].weight >= w[1].weight));
        assert_eq!(
            snap.risk_metrics.top_holding_weight,
            snap.assets[0].weight,
            "seed={seed}"
        );
    }
}

// =============================================================================
// PROPERTY: RISK
// =============================================================================

#[test]
fn property_degraded_symbols_are_the_unpriced_ones() {
    let config = AnalyticsConfig::default();

    for seed in 0..10 {
        let holdings = generate_holdings(30, seed);
        let snap = analyze_portfolio(&holdings, &config).unwrap();

        let expected: Vec<Symbol> = holdings
            .iter()
            .filter(|h| !h.is_priced())
            .map(|h| h.symbol.clone())
            .collect();
        let reported: Vec<Symbol> = snap
            .warnings
            .iter()
            .flat_map(|w| match w {
                AnalysisWarning::UpstreamDataDegraded { symbols } => symbols.clone(),
            })
            .collect();
        assert_eq!(reported, expected);
    }
}

proptest! {
    #[test]
    fn prop_score_in_range(
        quantities in prop::collection::vec(0u32..10_000, 1..40),
        price_cents in 0i64..1_000_000,
    ) {
        let holdings: Vec<Holding> = quantities
            .iter()
            .enumerate()
            .map(|(i, q)| {
                Holding::builder()
                    .symbol(SYMBOLS[i % SYMBOLS.len()])
                    .quantity(Decimal::from(*q))
                    .cost_basis_price(Decimal::new(price_cents, 2))
                    .current_price(Decimal::new(price_cents + i as i64, 2))
                    .build()
                    .unwrap()
            })
            .collect();

        let snap = analyze_portfolio(&holdings, &AnalyticsConfig::default()).unwrap();
        prop_assert!(snap.risk_metrics.diversification_score <= 100);
        // AAPL and MSFT share Technology; AMZN is the first to add a sector
        prop_assert_eq!(
            snap.risk_metrics.sector_count > 1,
            quantities.len() > 2,
            "sectors: {:?}",
            snap.sectors.iter().map(|s| &s.sector).collect::<Vec<_>>()
        );

        let top = snap.risk_metrics.top_holding_weight;
        let high = snap.risk_metrics.concentration_risk == ConcentrationRisk::High;
        prop_assert_eq!(high, top > 50.0);
        prop_assert!(!snap.recommendations.is_empty());
    }
}
