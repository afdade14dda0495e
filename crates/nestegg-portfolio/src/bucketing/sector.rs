//! Sector-based portfolio bucketing.
//!
//! Provides the distribution of value across sectors.

use nestegg_core::rounding::{round_money, round_weight};
use nestegg_core::Sector;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analytics::{weight_of, AssetValuation};
use crate::error::{PortfolioError, PortfolioResult};

/// Aggregated value of the holdings in one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorBreakdown {
    /// The sector.
    pub sector: Sector,
    /// Total market value (2 dp).
    pub value: Decimal,
    /// Weight as percentage of total (1 dp).
    pub weight: f64,
    /// Number of holdings in this sector.
    pub count: usize,
}

/// Groups valuations by sector.
///
/// Buckets are created in first-seen order and then sorted by rounded weight,
/// descending, with ties keeping first-seen order.
///
/// # Errors
///
/// Returns [`PortfolioError::Overflow`] if a sector sum leaves the decimal range.
pub fn bucket_by_sector(
    valuations: &[AssetValuation],
    total_value: Decimal,
) -> PortfolioResult<Vec<SectorBreakdown>> {
    let mut buckets: Vec<(Sector, Decimal, usize)> = Vec::new();

    for v in valuations {
        match buckets.iter_mut().find(|(sector, _, _)| *sector == v.sector) {
            Some((_, value, count)) => {
                *value = value
                    .checked_add(v.value)
                    .ok_or(PortfolioError::Overflow { field: "sector_value" })?;
                *count += 1;
            }
            None => buckets.push((v.sector.clone(), v.value, 1)),
        }
    }

    let mut weighted: Vec<(Decimal, SectorBreakdown)> = buckets
        .into_iter()
        .map(|(sector, value, count)| {
            let weight = weight_of(value, total_value);
            (
                weight,
                SectorBreakdown {
                    sector,
                    value: round_money(value),
                    weight: round_weight(weight),
                    count,
                },
            )
        })
        .collect();

    weighted.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(weighted.into_iter().map(|(_, row)| row).collect())
}
