//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Repository traits are minimal and CRUD-focused
//! - Migration port speaks in versions and states, not SQL

pub mod client_repository;
pub mod migration;

use std::sync::Arc;
use thiserror::Error;

pub use client_repository::ClientRepository;
pub use migration::{MigrationError, MigrationPort};

/// Container for all port trait objects.
///
/// Adapters build this once at their composition root and hand it to
/// `AppCore`, which keeps core independent of `megasoft-db`.
#[derive(Clone)]
pub struct Repos {
    /// Client repository for CRUD operations on clients.
    pub clients: Arc<dyn ClientRepository>,
    /// Schema migration engine.
    pub migrations: Arc<dyn MigrationPort>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(clients: Arc<dyn ClientRepository>, migrations: Arc<dyn MigrationPort>) -> Self {
        Self {
            clients,
            migrations,
        }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A constraint was violated (e.g., check or unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// A table the repository relies on does not exist.
    #[error("Table '{0}' does not exist")]
    SchemaMissing(String),
}

/// Core error type returned by services.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Schema migration failed.
    #[error(transparent)]
    Migration(#[from] MigrationError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Whether this error means the requested entity does not exist.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(RepositoryError::NotFound(_)))
    }
}
