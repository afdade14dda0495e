//! Property-based tests for core domain invariants.

use nestegg_core::prelude::*;
use proptest::prelude::*;

fn amount() -> impl Strategy<Value = Decimal> {
    // Up to 1,000,000.0000 with four decimal places.
    (0i64..10_000_000_000).prop_map(|raw| Decimal::new(raw, 4))
}

proptest! {
    #[test]
    fn value_and_cost_are_non_negative(
        quantity in amount(),
        cost in amount(),
        price in proptest::option::of(amount()),
    ) {
        let mut builder = Holding::builder()
            .symbol("TEST")
            .quantity(quantity)
            .cost_basis_price(cost);
        if let Some(p) = price {
            builder = builder.current_price(p);
        }
        let holding = builder.build().unwrap();

        let value = holding.market_value().unwrap();
        let cost = holding.cost().unwrap();
        prop_assert!(value >= Decimal::ZERO);
        prop_assert!(cost >= Decimal::ZERO);
        prop_assert_eq!(holding.unrealized_gain().unwrap(), value - cost);
    }

    #[test]
    fn realized_profit_matches_revenue_minus_cost(
        quantity in amount(),
        buy in amount(),
        sell in amount(),
    ) {
        let holding = Holding::builder()
            .symbol("TEST")
            .quantity(quantity)
            .cost_basis_price(buy)
            .build()
            .unwrap();
        let tx = holding.close(sell, chrono::Utc::now()).unwrap();

        let cost = tx.total_cost().unwrap();
        prop_assert_eq!(tx.profit_loss().unwrap(), tx.total_revenue().unwrap() - cost);
        if cost.is_zero() {
            prop_assert!(tx.profit_loss_percent().unwrap().is_zero());
        }
    }

    #[test]
    fn money_rounding_stays_within_half_cent(value in amount()) {
        let rounded = round_money(value);
        prop_assert!((rounded - value).abs() <= Decimal::new(5, 3));
        prop_assert!(rounded.scale() <= 2);
    }

    #[test]
    fn symbols_are_uppercase(raw in "[a-zA-Z]{1,5}") {
        let symbol = Symbol::new(&raw).unwrap();
        prop_assert_eq!(symbol.as_str(), raw.to_uppercase());
    }
}
