//! Record source: sale records for one calendar month.
//!
//! [`SalesRepo`] is the injected data-access seam. Handlers in [`crate::report`]
//! take any implementation, so the SQLite store ([`repo::SqliteSalesRepo`]) and
//! the in-memory fake ([`memory::InMemorySalesRepo`]) are interchangeable.

pub mod memory;
pub mod repo;

pub use memory::InMemorySalesRepo;
pub use repo::SqliteSalesRepo;

use crate::{error::AnalyticsResult, models::Sale, month::SalesMonth};

/// Portable surface; the SQLite implementation lives in `repo.rs`.
pub trait SalesRepo {
    /// Every record whose sale date falls in `month`, in any year.
    ///
    /// Records whose date cannot be parsed never match. Store failures surface as
    /// [`crate::error::AnalyticsError::Fetch`].
    fn sales_in_month(&mut self, month: SalesMonth) -> AnalyticsResult<Vec<Sale>>;
}

impl<R: SalesRepo + ?Sized> SalesRepo for &mut R {
    fn sales_in_month(&mut self, month: SalesMonth) -> AnalyticsResult<Vec<Sale>> {
        (**self).sales_in_month(month)
    }
}
