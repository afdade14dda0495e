//! Annuity-formula future value.
//!
//! ```text
//! FV = I (1 + r)^n + C ((1 + r)^n - 1) / r       end of month
//! FV = I (1 + r)^n + C ((1 + r)^n - 1) / r (1+r) start of month
//! ```
//!
//! With `r = 0` the annuity term is `C n`. The month loop in
//! [`project_growth`](crate::project_growth) is the reference; this is a
//! cross-check.

use nestegg_core::rounding::round_money;
use rust_decimal::{Decimal, MathematicalOps};

use crate::error::{ProjectionError, ProjectionResult};
use crate::params::{ContributionTiming, ProjectionParameters};

/// Future value from the closed-form annuity formula, rounded to cents.
///
/// # Errors
///
/// Returns [`ProjectionError::InvalidParameters`] when validation fails and
/// [`ProjectionError::Overflow`] if an intermediate leaves the decimal range.
pub fn closed_form_future_value(params: &ProjectionParameters) -> ProjectionResult<Decimal> {
    params.validate()?;

    let months = params.months();
    let overflow = ProjectionError::Overflow { month: months };
    let rate = params.monthly_rate();
    let contribution = params.monthly_contribution;

    if rate.is_zero() {
        let annuity = contribution
            .checked_mul(Decimal::from(months))
            .ok_or_else(|| overflow.clone())?;
        return params
            .initial_investment
            .checked_add(annuity)
            .map(round_money)
            .ok_or(overflow);
    }

    let growth = Decimal::ONE + rate;
    let compounded = growth
        .checked_powi(i64::from(months))
        .ok_or_else(|| overflow.clone())?;

    let lump = params
        .initial_investment
        .checked_mul(compounded)
        .ok_or_else(|| overflow.clone())?;
    let mut annuity = contribution
        .checked_mul(compounded - Decimal::ONE)
        .and_then(|v| v.checked_div(rate))
        .ok_or_else(|| overflow.clone())?;
    if params.contribution_timing == ContributionTiming::StartOfMonth {
        annuity = annuity.checked_mul(growth).ok_or_else(|| overflow.clone())?;
    }

    lump.checked_add(annuity).map(round_money).ok_or(overflow)
}
