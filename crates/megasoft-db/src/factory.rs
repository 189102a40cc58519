//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` adapters. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use megasoft_core::{AppCore, DatabaseConfig, Repos};

use crate::migrator::SqliteMigrator;
use crate::repositories::SqliteClientRepository;

/// Factory for creating port implementations with `SQLite` backends.
///
/// This struct provides composition utilities only, no domain logic.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` adapters from a pool.
    ///
    /// Returns a `Repos` struct from `megasoft-core` containing
    /// trait-object-wrapped implementations.
    pub fn build_repos(pool: SqlitePool, config: &DatabaseConfig) -> Repos {
        Repos::new(
            Arc::new(SqliteClientRepository::new(pool.clone())),
            Arc::new(SqliteMigrator::from_config(pool, config)),
        )
    }

    /// Build a complete `AppCore` instance from a pool.
    ///
    /// ```ignore
    /// let pool = setup_database(&config.database_path).await?;
    /// let core = CoreFactory::build_app_core(pool, &config);
    /// core.migrations().migrate_database().await?;
    /// ```
    pub fn build_app_core(pool: SqlitePool, config: &DatabaseConfig) -> AppCore {
        AppCore::new(Self::build_repos(pool, config))
    }

    /// Create a client repository from a pool.
    pub fn client_repository(pool: SqlitePool) -> Arc<SqliteClientRepository> {
        Arc::new(SqliteClientRepository::new(pool))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with all embedded migrations
/// applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with the full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a client repository using this test database.
    pub fn client_repository(&self) -> SqliteClientRepository {
        SqliteClientRepository::new(self.pool.clone())
    }

    /// Create a migrator using this test database.
    pub fn migrator(&self, clean_enabled: bool) -> SqliteMigrator {
        SqliteMigrator::new(
            self.pool.clone(),
            crate::migrator::MigrationSource::Embedded,
            clean_enabled,
        )
    }

    /// Compose an `AppCore` over this test database.
    pub fn app_core(&self, clean_enabled: bool) -> AppCore {
        AppCore::new(Repos::new(
            Arc::new(self.client_repository()),
            Arc::new(self.migrator(clean_enabled)),
        ))
    }
}
