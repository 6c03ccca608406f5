//! In-memory record source for tests and offline use.

use crate::{error::AnalyticsResult, models::Sale, month::SalesMonth, sales::SalesRepo};

/// Holds records in a `Vec` and filters them with the same date rules SQLite applies.
#[derive(Debug, Default, Clone)]
pub struct InMemorySalesRepo {
    records: Vec<Sale>,
    queries: usize,
}

impl InMemorySalesRepo {
    /// Create a repository over the given records.
    pub fn new(records: Vec<Sale>) -> Self {
        Self {
            records,
            queries: 0,
        }
    }

    /// Number of month queries served so far.
    pub fn queries(&self) -> usize {
        self.queries
    }
}

impl SalesRepo for InMemorySalesRepo {
    fn sales_in_month(&mut self, month: SalesMonth) -> AnalyticsResult<Vec<Sale>> {
        self.queries += 1;
        Ok(self
            .records
            .iter()
            .filter(|s| month.contains(&s.date_of_sale))
            .cloned()
            .collect())
    }
}
