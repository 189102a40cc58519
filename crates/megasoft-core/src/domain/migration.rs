//! Schema migration descriptors.
//!
//! These describe migration history independently of the engine that
//! applies the scripts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single migration relative to the database history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationState {
    /// Resolved but not yet applied.
    Pending,
    /// Applied successfully and matches the resolved script.
    Success,
    /// Recorded in history as failed.
    Failed,
    /// Applied, but no script with this version can be resolved anymore.
    Missing,
    /// Applied, but the resolved script has changed since.
    Outdated,
}

impl MigrationState {
    /// Canonical upper-case name, as printed in info tables.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Success => "SUCCESS",
            Self::Failed => "FAILED",
            Self::Missing => "MISSING",
            Self::Outdated => "OUTDATED",
        }
    }

    /// Whether this state blocks validation.
    pub const fn is_invalid(self) -> bool {
        matches!(self, Self::Failed | Self::Missing | Self::Outdated)
    }
}

impl fmt::Display for MigrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of migration info.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationInfo {
    pub version: i64,
    pub description: String,
    pub state: MigrationState,
    /// When the migration was applied, if it was.
    pub installed_on: Option<DateTime<Utc>>,
    /// How long the migration took, if it was applied.
    pub execution_time_ms: Option<i64>,
}

/// Outcome of a migrate run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationReport {
    /// Versions applied by this run, in order.
    pub applied: Vec<i64>,
    /// Highest successfully applied version after the run.
    pub current_version: Option<i64>,
}

impl MigrationReport {
    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }
}

/// Outcome of a clean run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanReport {
    /// Names of dropped schema objects.
    pub dropped: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_names() {
        assert_eq!(MigrationState::Pending.to_string(), "PENDING");
        assert_eq!(MigrationState::Success.to_string(), "SUCCESS");
        assert_eq!(MigrationState::Outdated.to_string(), "OUTDATED");
    }

    #[test]
    fn test_invalid_states() {
        assert!(!MigrationState::Pending.is_invalid());
        assert!(!MigrationState::Success.is_invalid());
        assert!(MigrationState::Failed.is_invalid());
        assert!(MigrationState::Missing.is_invalid());
        assert!(MigrationState::Outdated.is_invalid());
    }
}
