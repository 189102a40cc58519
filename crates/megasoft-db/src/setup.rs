//! Database setup and initialization.
//!
//! This module provides the `setup_database()` function for opening the
//! `SQLite` database. Schema creation is owned by the migrator, so entry
//! points run migrations separately.

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::path::Path;

/// Opens (creating if needed) the `SQLite` database file.
///
/// This function:
/// 1. Creates the parent directory if it doesn't exist
/// 2. Creates the database file if it doesn't exist
/// 3. Enables foreign key enforcement on every connection
///
/// # Errors
///
/// Returns an error if the directory or database file cannot be created
/// or opened.
///
/// # Example
///
/// ```rust,no_run
/// use megasoft_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database(Path::new("/path/to/megasoft.db")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .foreign_keys(true),
    )
    .await?;

    tracing::debug!(path = %db_path.display(), "Opened database");
    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// The pool holds a single connection that never expires, so the
/// in-memory database lives as long as the pool. All embedded migrations
/// are applied.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    let pool = memory_pool().await?;
    crate::migrator::EMBEDDED_MIGRATIONS.run(&pool).await?;
    Ok(pool)
}

/// Single-connection in-memory pool with no schema.
#[cfg(any(test, feature = "test-utils"))]
pub(crate) async fn memory_pool() -> Result<SqlitePool> {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(SqliteConnectOptions::new().in_memory(true).foreign_keys(true))
        .await?;
    Ok(pool)
}
