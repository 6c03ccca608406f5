//! Crate-level documentation for the sales_analytics library.
//!
//! Monthly sales analytics over records kept in SQLite: revenue and sold/unsold
//! counts, a ten-band price histogram, and a per-category breakdown.

#![deny(missing_docs)]

pub mod analytics;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod month;
pub mod report;
pub mod response;
pub mod sales;
#[allow(missing_docs)]
pub mod schema;
