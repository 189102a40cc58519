//! `SQLite` implementation of the `MigrationPort` trait.
//!
//! Scripts are named `<version>_<description>.sql` and applied by
//! `sqlx::migrate::Migrator`. History lives in sqlx's `_sqlx_migrations`
//! table, which `info` reads directly so it can report migrations the
//! migrator itself would refuse to run.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::{Connection, Row, SqliteConnection, SqlitePool};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::PathBuf;

use megasoft_core::{
    CleanReport, DatabaseConfig, MigrationError, MigrationInfo, MigrationPort, MigrationReport,
    MigrationState,
};

/// Migrations compiled into the binary from `crates/megasoft-db/migrations`.
pub static EMBEDDED_MIGRATIONS: Migrator = sqlx::migrate!("./migrations");

const HISTORY_TABLE: &str = "_sqlx_migrations";

/// Where migration scripts are resolved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationSource {
    /// The set embedded at compile time.
    Embedded,
    /// `.sql` files loaded from a directory at runtime.
    Directory(PathBuf),
}

impl MigrationSource {
    pub fn from_config(config: &DatabaseConfig) -> Self {
        config
            .migrations_dir
            .clone()
            .map_or(Self::Embedded, Self::Directory)
    }
}

/// A migrator that is either the embedded static or loaded from disk.
enum Resolved {
    Embedded,
    Loaded(Migrator),
}

impl Resolved {
    fn migrator(&self) -> &Migrator {
        match self {
            Self::Embedded => &EMBEDDED_MIGRATIONS,
            Self::Loaded(migrator) => migrator,
        }
    }
}

/// A resolved (on-disk or embedded) up migration.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ResolvedMigration {
    description: String,
    checksum: Vec<u8>,
}

/// One row of `_sqlx_migrations`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AppliedMigration {
    version: i64,
    description: String,
    installed_on: Option<DateTime<Utc>>,
    success: bool,
    checksum: Vec<u8>,
    execution_time_ns: i64,
}

/// `SQLite` implementation of the `MigrationPort` trait.
pub struct SqliteMigrator {
    pool: SqlitePool,
    source: MigrationSource,
    clean_enabled: bool,
}

impl SqliteMigrator {
    /// Create a migrator with an explicit source and clean policy.
    pub fn new(pool: SqlitePool, source: MigrationSource, clean_enabled: bool) -> Self {
        Self {
            pool,
            source,
            clean_enabled,
        }
    }

    /// Create a migrator from database configuration.
    pub fn from_config(pool: SqlitePool, config: &DatabaseConfig) -> Self {
        Self::new(
            pool,
            MigrationSource::from_config(config),
            config.clean_enabled,
        )
    }

    async fn resolve(&self) -> Result<Resolved, MigrationError> {
        match &self.source {
            MigrationSource::Embedded => Ok(Resolved::Embedded),
            MigrationSource::Directory(dir) => {
                if !dir.is_dir() {
                    return Err(MigrationError::Source(format!(
                        "{} is not a directory",
                        dir.display()
                    )));
                }
                let migrator = Migrator::new(dir.as_path())
                    .await
                    .map_err(map_migrate_error)?;
                Ok(Resolved::Loaded(migrator))
            }
        }
    }

    async fn history_exists(&self) -> Result<bool, MigrationError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
        )
        .bind(HISTORY_TABLE)
        .fetch_one(&self.pool)
        .await
        .map_err(execution)?;
        Ok(count > 0)
    }

    async fn applied(&self) -> Result<Vec<AppliedMigration>, MigrationError> {
        if !self.history_exists().await? {
            return Ok(Vec::new());
        }

        let rows = sqlx::query(
            "SELECT version, description, installed_on, success, checksum, execution_time
             FROM _sqlx_migrations
             ORDER BY version",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(execution)?;

        rows.iter()
            .map(|row| {
                Ok(AppliedMigration {
                    version: row.try_get("version")?,
                    description: row.try_get("description")?,
                    installed_on: Some(row.try_get::<DateTime<Utc>, _>("installed_on")?),
                    success: row.try_get("success")?,
                    checksum: row.try_get("checksum")?,
                    execution_time_ns: row.try_get("execution_time")?,
                })
            })
            .collect::<Result<_, sqlx::Error>>()
            .map_err(execution)
    }
}

#[async_trait]
impl MigrationPort for SqliteMigrator {
    async fn migrate(&self) -> Result<MigrationReport, MigrationError> {
        let resolved = self.resolve().await?;
        let before: HashSet<i64> = self
            .applied()
            .await?
            .into_iter()
            .filter(|m| m.success)
            .map(|m| m.version)
            .collect();

        resolved
            .migrator()
            .run(&self.pool)
            .await
            .map_err(map_migrate_error)?;

        let after = self.applied().await?;
        let applied: Vec<i64> = after
            .iter()
            .filter(|m| m.success && !before.contains(&m.version))
            .map(|m| m.version)
            .collect();
        let current_version = after.iter().filter(|m| m.success).map(|m| m.version).max();

        for version in &applied {
            tracing::debug!(version, "Applied migration");
        }

        Ok(MigrationReport {
            applied,
            current_version,
        })
    }

    async fn clean(&self) -> Result<CleanReport, MigrationError> {
        if !self.clean_enabled {
            return Err(MigrationError::CleanDisabled);
        }

        let mut conn = self.pool.acquire().await.map_err(execution)?;

        // Cannot be toggled inside a transaction.
        sqlx::query("PRAGMA foreign_keys = OFF")
            .execute(&mut *conn)
            .await
            .map_err(execution)?;

        let result = drop_all_objects(&mut conn).await;

        let restored = sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&mut *conn)
            .await
            .map(|_| ());

        let report = clean_outcome(result, restored)?;
        tracing::debug!(dropped = report.dropped.len(), "Schema cleaned");
        Ok(report)
    }

    async fn info(&self) -> Result<Vec<MigrationInfo>, MigrationError> {
        let resolved = self.resolve().await?;
        let applied = self.applied().await?;
        Ok(merge_history(&resolved_migrations(resolved.migrator()), &applied))
    }

    async fn validate(&self) -> Result<(), MigrationError> {
        let problems: Vec<String> = self
            .info()
            .await?
            .into_iter()
            .filter(|info| info.state.is_invalid())
            .map(|info| format!("{} ({}): {}", info.version, info.description, info.state))
            .collect();

        if problems.is_empty() {
            Ok(())
        } else {
            Err(MigrationError::Validation(problems.join(", ")))
        }
    }
}

async fn drop_all_objects(conn: &mut SqliteConnection) -> Result<CleanReport, sqlx::Error> {
    // Views and triggers first so no table drop trips over a dependant.
    let objects: Vec<(String, String)> = sqlx::query_as(
        "SELECT type, name FROM sqlite_master
         WHERE type IN ('view', 'trigger', 'table') AND name NOT LIKE 'sqlite_%'
         ORDER BY CASE type WHEN 'view' THEN 0 WHEN 'trigger' THEN 1 ELSE 2 END, name",
    )
    .fetch_all(&mut *conn)
    .await?;

    let has_sequence: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'sqlite_sequence'",
    )
    .fetch_one(&mut *conn)
    .await?;

    let mut tx = conn.begin().await?;
    let mut dropped = Vec::with_capacity(objects.len());
    for (kind, name) in objects {
        sqlx::query(&drop_statement(&kind, &name))
            .execute(&mut *tx)
            .await?;
        dropped.push(name);
    }
    // Reset AUTOINCREMENT counters so a rebuilt schema starts from 1.
    if has_sequence > 0 {
        sqlx::query("DELETE FROM sqlite_sequence")
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    Ok(CleanReport { dropped })
}

/// Combine the drop result with restoring foreign keys. The drop error wins.
fn clean_outcome(
    dropped: Result<CleanReport, sqlx::Error>,
    restored: Result<(), sqlx::Error>,
) -> Result<CleanReport, MigrationError> {
    match (dropped, restored) {
        (Ok(report), Ok(())) => Ok(report),
        (Err(e), Ok(())) | (Ok(_), Err(e)) => Err(execution(e)),
        (Err(drop), Err(pragma)) => Err(MigrationError::Execution(format!(
            "{drop} (re-enabling foreign keys also failed: {pragma})"
        ))),
    }
}

fn drop_statement(kind: &str, name: &str) -> String {
    format!(
        "DROP {} IF EXISTS \"{}\"",
        kind.to_ascii_uppercase(),
        name.replace('"', "\"\"")
    )
}

fn resolved_migrations(migrator: &Migrator) -> BTreeMap<i64, ResolvedMigration> {
    migrator
        .iter()
        .filter(|m| !m.migration_type.is_down_migration())
        .map(|m| {
            (
                m.version,
                ResolvedMigration {
                    description: m.description.to_string(),
                    checksum: m.checksum.to_vec(),
                },
            )
        })
        .collect()
}

fn merge_history(
    resolved: &BTreeMap<i64, ResolvedMigration>,
    applied: &[AppliedMigration],
) -> Vec<MigrationInfo> {
    let applied_by_version: BTreeMap<i64, &AppliedMigration> =
        applied.iter().map(|m| (m.version, m)).collect();
    let versions: BTreeSet<i64> = resolved
        .keys()
        .chain(applied_by_version.keys())
        .copied()
        .collect();

    versions
        .into_iter()
        .map(|version| {
            let script = resolved.get(&version);
            let history = applied_by_version.get(&version).copied();

            let state = match (script, history) {
                (_, Some(h)) if !h.success => MigrationState::Failed,
                (None, Some(_)) => MigrationState::Missing,
                (Some(s), Some(h)) if s.checksum != h.checksum => MigrationState::Outdated,
                (Some(_), Some(_)) => MigrationState::Success,
                (Some(_), None) | (None, None) => MigrationState::Pending,
            };

            let description = script
                .map(|s| s.description.clone())
                .or_else(|| history.map(|h| h.description.clone()))
                .unwrap_or_default();

            MigrationInfo {
                version,
                description,
                state,
                installed_on: history.and_then(|h| h.installed_on),
                execution_time_ms: history.map(|h| h.execution_time_ns / 1_000_000),
            }
        })
        .collect()
}

fn map_migrate_error(e: MigrateError) -> MigrationError {
    match e {
        MigrateError::VersionMissing(version) => MigrationError::Validation(format!(
            "migration {version} was previously applied but is missing in the resolved migrations"
        )),
        MigrateError::VersionMismatch(version) => MigrationError::Validation(format!(
            "migration {version} was previously applied but has been modified"
        )),
        MigrateError::Source(source) => MigrationError::Source(source.to_string()),
        other => MigrationError::Execution(other.to_string()),
    }
}

fn execution(e: sqlx::Error) -> MigrationError {
    MigrationError::Execution(e.to_string())
}
