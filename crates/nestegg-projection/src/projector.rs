//! Month-by-month growth projection.

use nestegg_core::rounding::{percent_of, round_money, round_percent};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, ProjectionResult};
use crate::params::{ContributionTiming, ProjectionParameters};

/// Balance at the end of a year (year 0 is the starting point).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Years elapsed.
    pub year: u32,
    /// Balance (2 dp).
    pub balance: Decimal,
    /// Cumulative amount contributed (2 dp).
    pub invested: Decimal,
    /// `balance - invested` (2 dp).
    pub gains: Decimal,
}

/// Totals of a projection, with the inputs echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    /// Lump sum at month zero.
    pub initial_investment: Decimal,
    /// Amount added every month.
    pub monthly_contribution: Decimal,
    /// Horizon in years.
    pub years: u32,
    /// Annual return in percent.
    pub annual_return_percent: Decimal,
    /// When contributions landed.
    pub contribution_timing: ContributionTiming,
    /// Balance after the last month (2 dp).
    pub final_balance: Decimal,
    /// Initial plus all contributions (2 dp).
    pub total_contributed: Decimal,
    /// `final_balance - total_contributed` (2 dp).
    pub total_gains: Decimal,
    /// Gains as percent of contributed (2 dp); 0 when nothing was contributed.
    pub total_return_percent: f64,
}

/// Full projection: a yearly breakdown and a summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// `years + 1` points, from year 0 to the horizon.
    pub data_points: Vec<DataPoint>,
    /// Final figures.
    pub summary: ProjectionSummary,
}

fn data_point(year: u32, balance: Decimal, invested: Decimal) -> DataPoint {
    DataPoint {
        year,
        balance: round_money(balance),
        invested: round_money(invested),
        gains: round_money(balance - invested),
    }
}

/// Advances the balance by one month.
fn step(
    balance: Decimal,
    growth: Decimal,
    contribution: Decimal,
    timing: ContributionTiming,
) -> Option<Decimal> {
    match timing {
        ContributionTiming::EndOfMonth => balance.checked_mul(growth)?.checked_add(contribution),
        ContributionTiming::StartOfMonth => balance.checked_add(contribution)?.checked_mul(growth),
    }
}

/// Projects portfolio value under monthly compounding.
///
/// # Errors
///
/// Returns [`ProjectionError::InvalidParameters`] when validation fails and
/// [`ProjectionError::Overflow`] if the balance leaves the decimal range.
///
/// # Example
///
/// ```rust
/// use nestegg_projection::{project_growth, ProjectionParameters};
/// use rust_decimal_macros::dec;
///
/// let params = ProjectionParameters::new(dec!(1000), dec!(100), 10, dec!(7));
/// let projection = project_growth(&params).unwrap();
///
/// assert_eq!(projection.data_points.len(), 11);
/// assert_eq!(projection.summary.total_contributed, dec!(13000));
/// assert_eq!(projection.summary.final_balance, dec!(19318.14));
/// ```
pub fn project_growth(params: &ProjectionParameters) -> ProjectionResult<Projection> {
    params.validate()?;

    let growth = Decimal::ONE + params.monthly_rate();
    let contribution = params.monthly_contribution;
    let mut balance = params.initial_investment;
    let mut contributed = params.initial_investment;

    let mut data_points = Vec::with_capacity(params.years as usize + 1);
    data_points.push(data_point(0, balance, contributed));

    for month in 1..=params.months() {
        balance = step(balance, growth, contribution, params.contribution_timing)
            .ok_or(ProjectionError::Overflow { month })?;
        contributed = contributed
            .checked_add(contribution)
            .ok_or(ProjectionError::Overflow { month })?;

        if month % 12 == 0 {
            data_points.push(data_point(month / 12, balance, contributed));
        }
    }

    let gains = balance - contributed;
    log::debug!(
        "projected {} years at {}%: final={} contributed={}",
        params.years,
        params.annual_return_percent,
        balance,
        contributed
    );

    Ok(Projection {
        data_points,
        summary: ProjectionSummary {
            initial_investment: params.initial_investment,
            monthly_contribution: params.monthly_contribution,
            years: params.years,
            annual_return_percent: params.annual_return_percent,
            contribution_timing: params.contribution_timing,
            final_balance: round_money(balance),
            total_contributed: round_money(contributed),
            total_gains: round_money(gains),
            total_return_percent: round_percent(percent_of(gains, contributed)),
        },
    })
}
