//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Environment and `.env` loading
//! - Database configuration
//! - Database pool and adapters (via megasoft-db)
//! - Core services (via megasoft-core)
//!
//! Command handlers receive the fully-composed AppCore and delegate work to it.

use std::path::Path;

use megasoft_core::paths::DATABASE_ENV;
use megasoft_core::{AppCore, DatabaseConfig};
use megasoft_db::{CoreFactory, setup_database};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Database location, clean policy and migration source.
    pub database: DatabaseConfig,
}

/// Load a `.env` file into the process environment.
///
/// Looks for `.env` in the current directory and its parents when `path`
/// is `None`. A missing file is not an error. Variables already set in the
/// environment are left alone. Call this before [`crate::logging::init`]
/// so a `RUST_LOG` from the file takes effect.
pub fn load_env_file(path: Option<&Path>) -> Result<(), dotenvy::Error> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path),
        None => dotenvy::dotenv().map(|_| ()),
    };

    match loaded {
        Err(e) if e.not_found() => Ok(()),
        other => other,
    }
}

impl CliConfig {
    /// Resolve config from the environment.
    ///
    /// `database_override` (the `--database` flag) takes precedence over
    /// `MEGASOFT_DATABASE`.
    pub fn from_env(database_override: Option<&str>) -> Result<Self, CliError> {
        let database = DatabaseConfig::from_lookup(|key| match database_override {
            Some(path) if key == DATABASE_ENV => Some(path.to_string()),
            _ => std::env::var(key).ok(),
        })?;

        Ok(Self { database })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
    /// The configuration the context was built from.
    pub config: CliConfig,
}

impl CliContext {
    /// Access the AppCore.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }

    /// Access the configuration.
    pub const fn config(&self) -> &CliConfig {
        &self.config
    }
}

/// Bootstrap the CLI application.
///
/// Opens the database file (creating it if needed) and composes the
/// `AppCore`. Migrations are not run here; commands decide that.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let pool = setup_database(&config.database.database_path)
        .await
        .map_err(|e| CliError::Database(format!("{e:#}")))?;

    tracing::debug!(
        database = %config.database.database_path.display(),
        migrations = %config.database.migration_source(),
        clean_enabled = config.database.clean_enabled,
        "Bootstrapped CLI context"
    );

    let app = CoreFactory::build_app_core(pool, &config.database);
    Ok(CliContext { app, config })
}
