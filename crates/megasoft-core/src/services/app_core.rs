//! `AppCore` - the application facade handed to adapters.

use crate::ports::{CoreError, Repos};
use crate::services::{ClientService, MigrationService};

/// Composes the core services from a set of ports.
///
/// Adapters construct exactly one of these at their composition root.
#[derive(Clone)]
pub struct AppCore {
    repos: Repos,
}

impl AppCore {
    pub fn new(repos: Repos) -> Self {
        Self { repos }
    }

    /// Migration operations.
    pub fn migrations(&self) -> MigrationService {
        MigrationService::new(self.repos.migrations.clone())
    }

    /// Client operations.
    ///
    /// Fails if the schema has not been migrated yet.
    pub async fn clients(&self) -> Result<ClientService, CoreError> {
        ClientService::connect(self.repos.clients.clone()).await
    }

    /// The underlying ports.
    pub fn repos(&self) -> &Repos {
        &self.repos
    }
}
