//! Aggregations over a month of sale records.
//!
//! All three reducers are pure and run to completion over an in-memory slice:
//! - [`monthly::MonthlySummary`]: revenue plus sold/unsold counts
//! - [`ranges::PriceRangeHistogram`]: ten fixed price bands
//! - [`category::CategoryBreakdown`]: count per category label

pub mod category;
pub mod monthly;
pub mod ranges;

use serde::Serialize;

pub use category::CategoryBreakdown;
pub use monthly::MonthlySummary;
pub use ranges::{BandBoundaryPolicy, PriceRangeHistogram};

use crate::models::Sale;

/// All three aggregates over the same record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompleteAnalytics {
    /// Revenue and sold/unsold counts.
    pub analytics: MonthlySummary,
    /// Price band histogram.
    pub ranges: PriceRangeHistogram,
    /// Category counts.
    pub categories: CategoryBreakdown,
}

impl CompleteAnalytics {
    /// Compute every aggregate from one fetch.
    pub fn from_sales(sales: &[Sale], policy: BandBoundaryPolicy) -> Self {
        Self {
            analytics: MonthlySummary::from_sales(sales),
            ranges: PriceRangeHistogram::from_sales_with_policy(sales, policy),
            categories: CategoryBreakdown::from_sales(sales),
        }
    }
}
