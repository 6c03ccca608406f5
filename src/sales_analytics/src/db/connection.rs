//! SQLite connection helpers.
//!
//! Provides [`connect_sqlite`] that opens a connection and applies recommended PRAGMAs:
//! WAL journaling, foreign_keys=ON, and a 5000ms busy_timeout.

use anyhow::Context;
use diesel::{Connection, RunQueryDsl, SqliteConnection, sql_query};

use super::sqlite_path;

/// Open a SQLite connection and apply connection-wide PRAGMAs.
pub fn connect_sqlite(database_url: &str) -> anyhow::Result<SqliteConnection> {
    let path = sqlite_path(database_url);
    let mut conn = SqliteConnection::establish(path)
        .with_context(|| format!("open sqlite database {path}"))?;

    // Readers never block the external writer
    sql_query("PRAGMA journal_mode=WAL;").execute(&mut conn)?;
    sql_query("PRAGMA foreign_keys=ON;").execute(&mut conn)?;
    sql_query("PRAGMA busy_timeout=5000;").execute(&mut conn)?;
    tracing::debug!(path, "sqlite connection ready");
    Ok(conn)
}
