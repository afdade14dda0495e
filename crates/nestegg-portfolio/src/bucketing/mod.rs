//! Portfolio bucketing.
//!
//! Groups holdings by sector and reports each bucket's share of total value.
//! All functions are pure.

mod sector;

pub use sector::*;
