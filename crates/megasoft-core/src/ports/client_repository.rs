//! Client repository trait definition.
//!
//! This port defines the interface for client persistence.
//! Implementations handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::Client;

/// Repository for client persistence.
///
/// Write operations are atomic: an implementation either commits the
/// change or leaves the store untouched.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - No name validation here; `ClientService` validates before calling
/// - Missing rows on update/delete are reported as `RepositoryError::NotFound`
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Whether the backing `client` table exists.
    async fn table_exists(&self) -> Result<bool, RepositoryError>;

    /// Insert a client and return its generated ID.
    async fn insert(&self, name: &str) -> Result<i64, RepositoryError>;

    /// Look up a client's name by ID.
    async fn find_name(&self, id: i64) -> Result<Option<String>, RepositoryError>;

    /// Rename a client.
    async fn update_name(&self, id: i64, name: &str) -> Result<(), RepositoryError>;

    /// Delete a client by ID.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// List all clients ordered by ID.
    async fn list(&self) -> Result<Vec<Client>, RepositoryError>;
}
