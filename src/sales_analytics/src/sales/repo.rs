//! SQLite implementation of [`SalesRepo`].

use diesel::prelude::*;
use diesel::sql_types::Text;

use crate::{
    error::{AnalyticsError, AnalyticsResult},
    models::Sale,
    month::SalesMonth,
    sales::SalesRepo,
    schema::sales,
};

diesel::define_sql_function! {
    /// SQLite `strftime(format, timestring)`; NULL when the timestring does not parse.
    fn strftime(format: Text, timestring: Text) -> diesel::sql_types::Nullable<Text>;
}

/// Month query against the `sales` table over a borrowed connection.
pub struct SqliteSalesRepo<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> SqliteSalesRepo<'c> {
    /// Lend a connection to the repository for the duration of a request.
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }
}

impl SalesRepo for SqliteSalesRepo<'_> {
    fn sales_in_month(&mut self, month: SalesMonth) -> AnalyticsResult<Vec<Sale>> {
        // strftime normalises offsets to UTC and zero-pads the month ("03").
        // It only narrows the scan: rows SQLite cannot read are loaded too, and
        // month_of_sale has the final say on every row.
        let rows = sales::table
            .filter(
                strftime("%m", sales::date_of_sale)
                    .eq(month.two_digit())
                    .or(strftime("%m", sales::date_of_sale).is_null()),
            )
            .order(sales::id)
            .select(Sale::as_select())
            .load::<Sale>(&mut *self.conn)
            .map_err(|source| {
                tracing::warn!(%month, error = %source, "sales query failed");
                AnalyticsError::Fetch { month, source }
            })?;

        let scanned = rows.len();
        let rows: Vec<Sale> = rows
            .into_iter()
            .filter(|s| month.contains(&s.date_of_sale))
            .collect();
        tracing::debug!(%month, scanned, rows = rows.len(), "loaded sales for month");
        Ok(rows)
    }
}
