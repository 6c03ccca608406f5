//! Typed errors returned by the record source and request handlers.

use thiserror::Error;

use crate::month::SalesMonth;

/// Errors surfaced to callers of the analytics operations.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// The month parameter is not one of the twelve canonical English month names.
    #[error("invalid month name: {0:?} (expected e.g. \"January\")")]
    InvalidMonth(String),

    /// The data store could not serve the month query.
    #[error("failed to fetch sales for {month}")]
    Fetch {
        /// Month being queried.
        month: SalesMonth,
        /// Underlying diesel error.
        #[source]
        source: diesel::result::Error,
    },
}

/// Result alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
