//! Database connection pool management
//!
//! Uses a sqlx SqlitePool backed by a single store file. The file (and its
//! parent directory) is created on first open and the schema is applied on
//! every open, so a fresh install needs no separate setup step.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use super::repos::DbError;

/// Default maximum connections for the pool.
/// Kept low for single-user tooling.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Schema applied on every open (idempotent).
const SCHEMA: &str = include_str!("schema.sql");

/// Open (creating if missing) the store at `db_path`.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, the file
/// cannot be opened, or the schema fails to apply.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(Path::new("computers.db")).await?;
/// ```
pub async fn create_pool(db_path: &Path) -> Result<SqlitePool, DbError> {
    create_pool_with_options(db_path, DEFAULT_MAX_CONNECTIONS).await
}

/// Open the store with a custom connection limit.
pub async fn create_pool_with_options(
    db_path: &Path,
    max_connections: u32,
) -> Result<SqlitePool, DbError> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await?;

    apply_schema(&pool).await?;
    tracing::debug!(path = %db_path.display(), "store opened");

    Ok(pool)
}

/// Open a private in-memory store.
///
/// Every SQLite connection to `:memory:` sees its own database, so the pool
/// is pinned to one connection that is never recycled.
pub async fn create_pool_in_memory() -> Result<SqlitePool, DbError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    apply_schema(&pool).await?;
    Ok(pool)
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), DbError> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}
