//! Property-based tests for the growth projector.

use nestegg_projection::prelude::*;
use proptest::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

fn params_strategy() -> impl Strategy<Value = ProjectionParameters> {
    (
        0i64..5_000_000,
        0i64..500_000,
        1u32..=50,
        -1500i64..2500,
        any::<bool>(),
    )
        .prop_map(|(initial_cents, monthly_cents, years, rate_bp, start)| {
            let timing = if start {
                ContributionTiming::StartOfMonth
            } else {
                ContributionTiming::EndOfMonth
            };
            ProjectionParameters::new(
                Decimal::new(initial_cents, 2),
                Decimal::new(monthly_cents, 2),
                years,
                Decimal::new(rate_bp, 2),
            )
            .with_timing(timing)
        })
}

proptest! {
    #[test]
    fn prop_final_equals_contributed_plus_gains(params in params_strategy()) {
        let summary = project_growth(&params).unwrap().summary;
        let diff = (summary.final_balance - (summary.total_contributed + summary.total_gains)).abs();
        prop_assert!(diff <= dec!(0.01));
    }

    #[test]
    fn prop_breakdown_has_one_point_per_year(params in params_strategy()) {
        let projection = project_growth(&params).unwrap();
        prop_assert_eq!(projection.data_points.len(), params.years as usize + 1);
        for (i, point) in projection.data_points.iter().enumerate() {
            prop_assert_eq!(point.year as usize, i);
        }
        let last = projection.data_points.last().unwrap();
        prop_assert_eq!(last.balance, projection.summary.final_balance);
        prop_assert_eq!(last.invested, projection.summary.total_contributed);
    }

    #[test]
    fn prop_contributed_is_linear(params in params_strategy()) {
        let summary = project_growth(&params).unwrap().summary;
        let expected = params.initial_investment
            + params.monthly_contribution * Decimal::from(params.years * 12);
        prop_assert_eq!(summary.total_contributed, expected.round_dp(2));
    }

    #[test]
    fn prop_zero_contribution_compounds(
        initial_cents in 1i64..10_000_000,
        years in 1u32..=40,
        rate_bp in 0i64..1500,
    ) {
        let initial = Decimal::new(initial_cents, 2);
        let rate = Decimal::new(rate_bp, 2);
        let params = ProjectionParameters::new(initial, Decimal::ZERO, years, rate);
        let balance = project_growth(&params).unwrap().summary.final_balance;

        let i = initial.to_f64().unwrap();
        let r = rate.to_f64().unwrap();
        let expected = i * (1.0 + r / 100.0 / 12.0).powi((12 * years) as i32);
        let actual = balance.to_f64().unwrap();
        prop_assert!((actual - expected).abs() <= 0.01 + expected * 1e-12);
    }

    #[test]
    fn prop_positive_rate_never_loses(params in params_strategy()) {
        prop_assume!(params.annual_return_percent >= Decimal::ZERO);
        let summary = project_growth(&params).unwrap().summary;
        prop_assert!(summary.total_gains >= Decimal::ZERO);
    }
}

#[test]
fn test_years_zero_is_rejected() {
    let params = ProjectionParameters::new(dec!(1000), dec!(100), 0, dec!(7));
    assert!(matches!(
        project_growth(&params),
        Err(ProjectionError::InvalidParameters { field: "years", .. })
    ));
}

#[test]
fn test_reference_scenario() {
    let params = ProjectionParameters::new(dec!(1000), dec!(100), 10, dec!(7.0));
    let summary = project_growth(&params).unwrap().summary;

    assert_eq!(summary.total_contributed, dec!(13000));
    assert!(summary.total_gains > Decimal::ZERO);
    assert_eq!(summary.final_balance, dec!(19318.14));
    assert_eq!(summary.initial_investment, dec!(1000));
    assert_eq!(summary.years, 10);
}
