//! Schema migration port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{CleanReport, MigrationInfo, MigrationReport};

/// Errors raised by a migration engine.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// Clean was requested but is not enabled in configuration.
    #[error("Clean is disabled. Set MEGASOFT_CLEAN_ENABLED=true to allow dropping the schema")]
    CleanDisabled,

    /// Applied history does not match the resolved migrations.
    #[error("Migration validation failed: {0}")]
    Validation(String),

    /// Migration scripts could not be resolved.
    #[error("Failed to resolve migrations: {0}")]
    Source(String),

    /// A migration or history query failed while executing.
    #[error("Migration failed: {0}")]
    Execution(String),
}

/// Versioned schema migration engine.
#[async_trait]
pub trait MigrationPort: Send + Sync {
    /// Apply all pending migrations in version order.
    async fn migrate(&self) -> Result<MigrationReport, MigrationError>;

    /// Drop every user object in the schema, migration history included.
    ///
    /// Fails with `MigrationError::CleanDisabled` unless enabled.
    async fn clean(&self) -> Result<CleanReport, MigrationError>;

    /// Resolved and applied migrations merged, ordered by version.
    async fn info(&self) -> Result<Vec<MigrationInfo>, MigrationError>;

    /// Check applied history against resolved migrations.
    async fn validate(&self) -> Result<(), MigrationError>;
}
