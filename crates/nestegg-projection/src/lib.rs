//! # Nestegg Projection
//!
//! Growth projection under monthly compounding with periodic contributions.
//!
//! - [`project_growth`] walks the horizon month by month and reports one
//!   [`DataPoint`] per year plus a [`ProjectionSummary`]
//! - [`closed_form_future_value`] evaluates the annuity formula as a check
//!
//! Money is a [`rust_decimal::Decimal`] throughout and is rounded to cents
//! only when it leaves the projector. Arithmetic is checked: a balance that
//! leaves the decimal range is a [`ProjectionError::Overflow`], never a panic.
//!
//! ## Example
//!
//! ```rust
//! use nestegg_projection::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let params = ProjectionParameters::new(dec!(5000), dec!(200), 20, dec!(6))
//!     .with_timing(ContributionTiming::StartOfMonth);
//! let projection = project_growth(&params).unwrap();
//!
//! let last = projection.data_points.last().unwrap();
//! assert_eq!(last.year, 20);
//! assert_eq!(last.invested, dec!(53000));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod closed_form;
pub mod error;
pub mod params;
pub mod projector;

pub use closed_form::closed_form_future_value;
pub use error::{ProjectionError, ProjectionResult};
pub use params::{ContributionTiming, ProjectionParameters, MAX_YEARS};
pub use projector::{project_growth, DataPoint, Projection, ProjectionSummary};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::closed_form::closed_form_future_value;
    pub use crate::error::{ProjectionError, ProjectionResult};
    pub use crate::params::{ContributionTiming, ProjectionParameters};
    pub use crate::projector::{project_growth, DataPoint, Projection, ProjectionSummary};
    pub use rust_decimal::Decimal;
}
