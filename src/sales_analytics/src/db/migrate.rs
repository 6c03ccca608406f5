//! Embedded schema migrations.

use anyhow::anyhow;
use diesel::{Connection, SqliteConnection, connection::SimpleConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use super::sqlite_path;

/// Embedded Diesel migrations bundled with this crate.
///
/// These are applied by [`run_sqlite`] to create the `sales` table.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Runs pending Diesel migrations on a SQLite database at the given URL.
///
/// This sets the SQLite journal mode to WAL and applies all embedded migrations, returning an error on failure.
pub fn run_sqlite(url: &str) -> anyhow::Result<()> {
    let mut conn = SqliteConnection::establish(sqlite_path(url))?;
    conn.batch_execute("PRAGMA journal_mode=WAL;")?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow!(e))?;
    tracing::info!(count = applied.len(), "applied pending migrations");

    Ok(())
}

/// Runs pending migrations for the given database URL.
///
/// Bare paths and `sqlite:` URLs are SQLite. Server URLs (postgres, mysql) are rejected.
pub fn run_all(database_url: &str) -> anyhow::Result<()> {
    if database_url.starts_with("postgres://")
        || database_url.starts_with("postgresql://")
        || database_url.starts_with("mysql://")
    {
        anyhow::bail!("Unsupported DATABASE_URL: {database_url}");
    }
    run_sqlite(database_url)
}
