//! Diesel models mapping to the database schema.
//!
//! [`Sale`] is both the row projection read from [`crate::schema::sales`] and the
//! record type every aggregator consumes. Nullable columns stand in for malformed
//! entries written by external data entry:
//! - `price == None`: missing or non-numeric price
//! - `sold == None`: missing or non-boolean sold flag
//! - `category == None`: missing category

use diesel::prelude::*;
use serde::Serialize;

use crate::schema::sales;

/// One unit-of-sale entry.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = sales, check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Sale timestamp as stored (e.g., "2021-10-27T20:29:54+05:30").
    pub date_of_sale: String,
    /// Price in currency units.
    pub price: Option<f64>,
    /// Whether the item was sold.
    pub sold: Option<bool>,
    /// Category label, verbatim.
    pub category: Option<String>,
}

impl Sale {
    /// Build a well-formed record.
    pub fn new(date_of_sale: impl Into<String>, price: f64, sold: bool, category: &str) -> Self {
        Self {
            date_of_sale: date_of_sale.into(),
            price: Some(price),
            sold: Some(sold),
            category: Some(category.to_string()),
        }
    }
}

/// Insertable form of [`Sale`]. Used by seeding tools and tests.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = sales)]
pub struct NewSale<'a> {
    /// Optional product title.
    pub title: Option<&'a str>,
    /// Sale timestamp string.
    pub date_of_sale: &'a str,
    /// Optional price.
    pub price: Option<f64>,
    /// Optional sold flag.
    pub sold: Option<bool>,
    /// Optional category label.
    pub category: Option<&'a str>,
}

impl<'a> From<&'a Sale> for NewSale<'a> {
    fn from(s: &'a Sale) -> Self {
        Self {
            title: None,
            date_of_sale: &s.date_of_sale,
            price: s.price,
            sold: s.sold,
            category: s.category.as_deref(),
        }
    }
}
