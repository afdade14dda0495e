//! Projection inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, ProjectionResult};

/// Longest horizon accepted, in years.
pub const MAX_YEARS: u32 = 100;

/// Lowest annual return accepted, in percent.
///
/// Below -100% a single year would lose more than the whole balance.
pub const MIN_ANNUAL_RETURN_PERCENT: Decimal = Decimal::from_parts(100, 0, 0, true, 0);

/// When within a month the contribution is added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionTiming {
    /// Grow the balance, then add the contribution.
    #[default]
    EndOfMonth,
    /// Add the contribution, then grow the balance.
    StartOfMonth,
}

/// Scalar inputs to [`project_growth`](crate::project_growth).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionParameters {
    /// Lump sum at month zero.
    pub initial_investment: Decimal,
    /// Amount added every month.
    pub monthly_contribution: Decimal,
    /// Horizon in whole years.
    pub years: u32,
    /// Expected annual return in percent (7 means 7%). May be negative.
    pub annual_return_percent: Decimal,
    /// When contributions land.
    #[serde(default)]
    pub contribution_timing: ContributionTiming,
}

impl ProjectionParameters {
    /// Creates parameters with end-of-month contributions.
    #[must_use]
    pub fn new(
        initial_investment: Decimal,
        monthly_contribution: Decimal,
        years: u32,
        annual_return_percent: Decimal,
    ) -> Self {
        Self {
            initial_investment,
            monthly_contribution,
            years,
            annual_return_percent,
            contribution_timing: ContributionTiming::default(),
        }
    }

    /// Sets the contribution timing.
    #[must_use]
    pub fn with_timing(mut self, timing: ContributionTiming) -> Self {
        self.contribution_timing = timing;
        self
    }

    /// `annual_return_percent / 100 / 12`.
    #[must_use]
    pub fn monthly_rate(&self) -> Decimal {
        self.annual_return_percent / Decimal::ONE_HUNDRED / Decimal::from(12)
    }

    /// Number of compounding periods.
    #[must_use]
    pub fn months(&self) -> u32 {
        self.years * 12
    }

    /// Checks every field against its domain.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::InvalidParameters`] naming the first bad field.
    pub fn validate(&self) -> ProjectionResult<()> {
        if self.years == 0 {
            return Err(ProjectionError::invalid("years", "must be at least 1"));
        }
        if self.years > MAX_YEARS {
            return Err(ProjectionError::invalid(
                "years",
                format!("must be at most {MAX_YEARS}, got {}", self.years),
            ));
        }
        if self.initial_investment < Decimal::ZERO {
            return Err(ProjectionError::invalid(
                "initial_investment",
                format!("must be non-negative, got {}", self.initial_investment),
            ));
        }
        if self.monthly_contribution < Decimal::ZERO {
            return Err(ProjectionError::invalid(
                "monthly_contribution",
                format!("must be non-negative, got {}", self.monthly_contribution),
            ));
        }
        if self.annual_return_percent < MIN_ANNUAL_RETURN_PERCENT {
            return Err(ProjectionError::invalid(
                "annual_return_percent",
                format!(
                    "must be at least {MIN_ANNUAL_RETURN_PERCENT}, got {}",
                    self.annual_return_percent
                ),
            ));
        }
        Ok(())
    }
}
