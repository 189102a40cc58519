//! Database configuration.
//!
//! Settings come from the environment (after `.env` loading by the entry
//! point) and may be overridden by CLI flags afterwards.

use std::path::PathBuf;

use crate::paths::{DATABASE_ENV, PathError, database_path, normalize_user_path};

/// Environment variable enabling `clean`.
pub const CLEAN_ENABLED_ENV: &str = "MEGASOFT_CLEAN_ENABLED";

/// Environment variable pointing at a runtime migrations directory.
pub const MIGRATIONS_DIR_ENV: &str = "MEGASOFT_MIGRATIONS_DIR";

/// Configuration for the database and its migrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// SQLite database file.
    pub database_path: PathBuf,
    /// Whether `clean` may drop the schema. Off unless explicitly enabled.
    pub clean_enabled: bool,
    /// Load migrations from this directory instead of the embedded set.
    pub migrations_dir: Option<PathBuf>,
}

impl DatabaseConfig {
    /// Config for a database file, with clean disabled and embedded migrations.
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            clean_enabled: false,
            migrations_dir: None,
        }
    }

    /// Resolve configuration from process environment variables.
    pub fn from_env() -> Result<Self, PathError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary variable lookup.
    ///
    /// The database path itself goes through [`database_path`], which reads
    /// the process environment, unless `MEGASOFT_DATABASE` is supplied by
    /// `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PathError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = match lookup(DATABASE_ENV) {
            Some(raw) => normalize_user_path(&raw)?,
            None => database_path()?,
        };

        let clean_enabled = lookup(CLEAN_ENABLED_ENV).is_some_and(|v| parse_flag(&v));

        let migrations_dir = lookup(MIGRATIONS_DIR_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(|v| normalize_user_path(&v))
            .transpose()?;

        Ok(Self {
            database_path,
            clean_enabled,
            migrations_dir,
        })
    }

    /// Human-readable description of where migrations come from.
    pub fn migration_source(&self) -> String {
        self.migrations_dir.as_ref().map_or_else(
            || "embedded".to_string(),
            |dir| dir.display().to_string(),
        )
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
