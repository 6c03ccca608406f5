#![allow(dead_code)]

use diesel::QueryableByName;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use sales_analytics::db::{connection, migrate};
use sales_analytics::models::{NewSale, Sale};
use sales_analytics::schema::sales;
use std::path::PathBuf;
use tempfile::TempDir;

#[derive(QueryableByName)]
struct JournalMode {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}
#[derive(QueryableByName)]
struct ForeignKeys {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}
#[derive(QueryableByName)]
struct BusyTimeout {
    #[diesel(sql_type = Integer, column_name = "timeout")]
    busy_timeout: i32,
}

pub struct TestDb {
    _dir: TempDir,    // keep alive for the life of the test
    pub path: String, // <tmpdir>/test.db
}

pub fn setup_db() -> (TestDb, SqliteConnection) {
    let dir = TempDir::new().expect("tempdir");
    let mut p = PathBuf::from(dir.path());
    p.push("test.db");
    let path = p.to_string_lossy().to_string();

    migrate::run_all(&path).expect("migrations");

    let conn = connection::connect_sqlite(&path).expect("connect");
    (TestDb { _dir: dir, path }, conn)
}

/// Open a database file that never had migrations applied.
pub fn setup_unmigrated_db() -> (TestDb, SqliteConnection) {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("empty.db").to_string_lossy().to_string();
    let conn = connection::connect_sqlite(&path).expect("connect");
    (TestDb { _dir: dir, path }, conn)
}

pub fn seed_sales(conn: &mut SqliteConnection, rows: &[Sale]) {
    // one statement per row: NULL columns are left to their defaults
    for row in rows {
        diesel::insert_into(sales::table)
            .values(NewSale::from(row))
            .execute(conn)
            .expect("seed sale");
    }
}

/// Records spread over several months, years and offsets.
pub fn fixture() -> Vec<Sale> {
    vec![
        Sale::new("2021-10-27T20:29:54+05:30", 329.85, true, "men's clothing"),
        Sale::new("2021-10-05T10:00:00Z", 100.0, false, "jewelery"),
        Sale::new("2022-10-11T08:15:00Z", 44.6, true, "electronics"),
        Sale::new("2021-11-01T02:00:00+05:30", 999.99, true, "electronics"), // UTC October
        Sale::new("2021-11-15T12:00:00Z", 150.0, true, "electronics"),
        Sale::new("2021-09-30T23:59:59Z", 20.0, true, "women's clothing"),
        Sale::new("2021-03-03", 55.0, false, "jewelery"),
        Sale {
            date_of_sale: "2021-10-20T09:00:00Z".into(),
            price: None,
            sold: None,
            category: None,
        },
        Sale::new("not a date", 10.0, true, "electronics"),
    ]
}

/// Date strings where SQLite's date functions and chrono read differently.
pub fn loose_dates() -> Vec<Sale> {
    [
        "2021-02-30",             // no such day; SQLite rolls it into March
        "2021-10-27T20:29+05:30", // offset, no seconds
        "2021-10-27T20:29:54 ",   // trailing whitespace
        "2021-10-27t20:29:54z",   // lowercase separators
        "2021-10-27T20:29Z",
        " 2021-12-01",
        "2021-13-01",
    ]
    .into_iter()
    .map(|d| Sale::new(d, 10.0, true, d.trim()))
    .collect()
}

pub fn assert_sqlite_pragmas(conn: &mut SqliteConnection) {
    use diesel::sql_query;

    let jm: JournalMode = sql_query("PRAGMA journal_mode;").get_result(conn).unwrap();
    assert_eq!(jm.journal_mode.to_lowercase(), "wal"); // WAL is persistent per DB file

    let fk: ForeignKeys = sql_query("PRAGMA foreign_keys;").get_result(conn).unwrap();
    assert_eq!(fk.foreign_keys, 1);

    let bt: BusyTimeout = sql_query("PRAGMA busy_timeout;").get_result(conn).unwrap();
    assert_eq!(bt.busy_timeout, 5000);
}
