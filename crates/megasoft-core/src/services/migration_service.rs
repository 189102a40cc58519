//! Migration service - orchestrates schema migrations.

use std::sync::Arc;

use crate::domain::{CleanReport, MigrationInfo, MigrationReport};
use crate::ports::{CoreError, MigrationPort};

/// Service for schema migration operations.
///
/// Every failure is logged here and then returned to the caller.
pub struct MigrationService {
    port: Arc<dyn MigrationPort>,
}

impl MigrationService {
    /// Create a new migration service.
    pub fn new(port: Arc<dyn MigrationPort>) -> Self {
        Self { port }
    }

    /// Apply pending migrations.
    pub async fn migrate_database(&self) -> Result<MigrationReport, CoreError> {
        let report = self.port.migrate().await.inspect_err(|e| {
            tracing::error!(error = %e, "Error applying database migrations");
        })?;

        tracing::info!(
            applied = report.applied_count(),
            current_version = ?report.current_version,
            "Database migrations applied successfully."
        );
        Ok(report)
    }

    /// Drop the whole schema, then apply every migration from scratch.
    pub async fn clean_and_migrate_database(&self) -> Result<MigrationReport, CoreError> {
        let cleaned = self.port.clean().await.inspect_err(|e| {
            tracing::error!(error = %e, "Error during the cleaning and migration process");
        })?;
        tracing::debug!(dropped = ?cleaned.dropped, "Schema cleaned");

        let report = self.port.migrate().await.inspect_err(|e| {
            tracing::error!(error = %e, "Error during the cleaning and migration process");
        })?;

        tracing::info!(
            applied = report.applied_count(),
            current_version = ?report.current_version,
            "Database cleaned and migrations applied successfully."
        );
        Ok(report)
    }

    /// Drop the whole schema without migrating.
    pub async fn clean_database(&self) -> Result<CleanReport, CoreError> {
        let report = self.port.clean().await.inspect_err(|e| {
            tracing::error!(error = %e, "Error cleaning the database");
        })?;
        tracing::info!(dropped = ?report.dropped, "Database cleaned.");
        Ok(report)
    }

    /// Migrate, cleaning first when `clean` is set.
    pub async fn run(&self, clean: bool) -> Result<MigrationReport, CoreError> {
        if clean {
            tracing::info!("Cleaning and migrating the database to ensure a fresh start.");
            self.clean_and_migrate_database().await
        } else {
            tracing::info!("Skipping database cleaning. Only migrating.");
            self.migrate_database().await
        }
    }

    /// Migration info, logged one line per migration.
    pub async fn info(&self) -> Result<Vec<MigrationInfo>, CoreError> {
        let infos = self.port.info().await.inspect_err(|e| {
            tracing::error!(error = %e, "Error reading migration info");
        })?;

        for info in &infos {
            tracing::info!(
                version = info.version,
                description = %info.description,
                status = %info.state,
                "Migration"
            );
        }
        Ok(infos)
    }

    /// Validate applied migrations against the resolved scripts.
    pub async fn validate(&self) -> Result<(), CoreError> {
        self.port.validate().await.inspect_err(|e| {
            tracing::error!(error = %e, "Migration validation failed");
        })?;
        tracing::info!("Applied migrations are valid.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MigrationState;
    use crate::ports::MigrationError;
    use async_trait::async_trait;
    use mockall::{Sequence, mock};

    mock! {
        Migrations {}

        #[async_trait]
        impl MigrationPort for Migrations {
            async fn migrate(&self) -> Result<MigrationReport, MigrationError>;
            async fn clean(&self) -> Result<CleanReport, MigrationError>;
            async fn info(&self) -> Result<Vec<MigrationInfo>, MigrationError>;
            async fn validate(&self) -> Result<(), MigrationError>;
        }
    }

    fn report(applied: Vec<i64>) -> MigrationReport {
        let current_version = applied.last().copied();
        MigrationReport {
            applied,
            current_version,
        }
    }

    #[tokio::test]
    async fn test_run_without_clean_only_migrates() {
        let mut port = MockMigrations::new();
        port.expect_clean().never();
        port.expect_migrate()
            .times(1)
            .returning(|| Ok(report(vec![1])));

        let service = MigrationService::new(Arc::new(port));
        let result = service.run(false).await.unwrap();
        assert_eq!(result.applied, vec![1]);
    }

    #[tokio::test]
    async fn test_run_with_clean_cleans_before_migrating() {
        let mut seq = Sequence::new();
        let mut port = MockMigrations::new();
        port.expect_clean()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| {
                Ok(CleanReport {
                    dropped: vec!["client".to_string()],
                })
            });
        port.expect_migrate()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(report(vec![1])));

        let service = MigrationService::new(Arc::new(port));
        assert_eq!(service.run(true).await.unwrap().current_version, Some(1));
    }

    #[tokio::test]
    async fn test_clean_failure_skips_migrate() {
        let mut port = MockMigrations::new();
        port.expect_clean()
            .times(1)
            .returning(|| Err(MigrationError::CleanDisabled));
        port.expect_migrate().never();

        let service = MigrationService::new(Arc::new(port));
        let err = service.clean_and_migrate_database().await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Migration(MigrationError::CleanDisabled)
        ));
    }

    #[tokio::test]
    async fn test_migrate_error_is_propagated() {
        let mut port = MockMigrations::new();
        port.expect_migrate()
            .returning(|| Err(MigrationError::Execution("syntax error".to_string())));

        let service = MigrationService::new(Arc::new(port));
        let err = service.migrate_database().await.unwrap_err();
        assert_eq!(err.to_string(), "Migration failed: syntax error");
    }

    #[tokio::test]
    async fn test_info_passes_through() {
        let mut port = MockMigrations::new();
        port.expect_info().returning(|| {
            Ok(vec![MigrationInfo {
                version: 1,
                description: "create client table".to_string(),
                state: MigrationState::Pending,
                installed_on: None,
                execution_time_ms: None,
            }])
        });

        let service = MigrationService::new(Arc::new(port));
        let infos = service.info().await.unwrap();
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].state, MigrationState::Pending);
    }
}
