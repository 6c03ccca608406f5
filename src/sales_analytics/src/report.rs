//! Request handlers: parse the month, fetch once, aggregate.
//!
//! Each handler takes the record source by injection so tests can pass
//! [`crate::sales::InMemorySalesRepo`]. The month is validated before the store
//! is touched; store failures come back as [`crate::error::AnalyticsError::Fetch`].

use crate::{
    analytics::{
        BandBoundaryPolicy, CategoryBreakdown, CompleteAnalytics, MonthlySummary,
        PriceRangeHistogram,
    },
    error::AnalyticsResult,
    models::Sale,
    month::SalesMonth,
    sales::SalesRepo,
};

fn fetch<R: SalesRepo + ?Sized>(repo: &mut R, month: &str) -> AnalyticsResult<Vec<Sale>> {
    let month: SalesMonth = month.parse()?;
    let sales = repo.sales_in_month(month)?;
    tracing::debug!(%month, records = sales.len(), "fetched sales");
    Ok(sales)
}

/// Revenue plus sold/unsold counts for `month`.
pub fn monthly_analytics<R: SalesRepo + ?Sized>(
    repo: &mut R,
    month: &str,
) -> AnalyticsResult<MonthlySummary> {
    let sales = fetch(repo, month)?;
    Ok(MonthlySummary::from_sales(&sales))
}

/// Price band histogram for `month`.
pub fn bar_chart_data<R: SalesRepo + ?Sized>(
    repo: &mut R,
    month: &str,
    policy: BandBoundaryPolicy,
) -> AnalyticsResult<PriceRangeHistogram> {
    let sales = fetch(repo, month)?;
    Ok(PriceRangeHistogram::from_sales_with_policy(&sales, policy))
}

/// Category counts for `month`.
pub fn category_wise_data<R: SalesRepo + ?Sized>(
    repo: &mut R,
    month: &str,
) -> AnalyticsResult<CategoryBreakdown> {
    let sales = fetch(repo, month)?;
    Ok(CategoryBreakdown::from_sales(&sales))
}

/// All three aggregates for `month` from a single fetch.
pub fn complete_analytics<R: SalesRepo + ?Sized>(
    repo: &mut R,
    month: &str,
    policy: BandBoundaryPolicy,
) -> AnalyticsResult<CompleteAnalytics> {
    let sales = fetch(repo, month)?;
    Ok(CompleteAnalytics::from_sales(&sales, policy))
}
