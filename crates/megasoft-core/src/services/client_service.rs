//! Client service - orchestrates client operations.

use std::sync::Arc;

use crate::domain::{Client, validate_client_name};
use crate::ports::{ClientRepository, CoreError, RepositoryError};

const CLIENT_TABLE: &str = "client";

/// Service for client CRUD operations.
///
/// Construct with [`ClientService::connect`], which refuses to hand out a
/// service when the schema has not been migrated.
pub struct ClientService {
    repo: Arc<dyn ClientRepository>,
}

impl std::fmt::Debug for ClientService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientService").finish_non_exhaustive()
    }
}

impl ClientService {
    /// Create a client service after confirming the `client` table exists.
    pub async fn connect(repo: Arc<dyn ClientRepository>) -> Result<Self, CoreError> {
        match repo.table_exists().await {
            Ok(true) => {
                tracing::info!("Confirmed that the table 'client' exists in the database.");
                Ok(Self { repo })
            }
            Ok(false) => {
                tracing::error!(
                    "Table 'client' does not exist in the database. Please check your database setup."
                );
                Err(RepositoryError::SchemaMissing(CLIENT_TABLE.to_string()).into())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to check for table existence");
                Err(e.into())
            }
        }
    }

    /// Create a client and return its ID.
    pub async fn create(&self, name: &str) -> Result<i64, CoreError> {
        validate_client_name(name)?;

        let id = self.repo.insert(name).await.inspect_err(|e| {
            tracing::error!(error = %e, "Creating client failed, transaction rolled back");
        })?;
        tracing::info!(id, "Generated new client ID");
        Ok(id)
    }

    /// Get a client's name by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<String, CoreError> {
        self.repo.find_name(id).await?.ok_or_else(|| {
            RepositoryError::NotFound(format!("Client with ID {id} does not exist.")).into()
        })
    }

    /// Rename a client.
    pub async fn set_name(&self, id: i64, name: &str) -> Result<(), CoreError> {
        validate_client_name(name)?;

        self.repo.update_name(id, name).await.inspect_err(|e| {
            tracing::error!(id, error = %e, "Updating client failed, transaction rolled back");
        })?;
        tracing::info!(id, name, "Updated client name");
        Ok(())
    }

    /// Delete a client by ID.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), CoreError> {
        self.repo.delete(id).await.inspect_err(|e| {
            tracing::error!(id, error = %e, "Deleting client failed, transaction rolled back");
        })?;
        tracing::info!(id, "Deleted client");
        Ok(())
    }

    /// List all clients ordered by ID.
    pub async fn list_all(&self) -> Result<Vec<Client>, CoreError> {
        Ok(self.repo.list().await?)
    }
}
