//! Path utilities for the megasoft database location.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Environment overrides take precedence over the home directory default

use std::env;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "MEGASOFT_DATA_DIR";

/// Environment variable overriding the database file path.
pub const DATABASE_ENV: &str = "MEGASOFT_DATABASE";

/// Database file name inside the data root.
pub const DATABASE_FILE_NAME: &str = "megasoft.db";

/// Errors that can occur during path resolution and directory operations.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the user's home directory.
    #[error("Cannot determine home directory")]
    NoHomeDir,

    /// An empty path was provided.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// Failed to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),
}

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `MEGASOFT_DATA_DIR` environment variable
/// 2. The user's home directory
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(DATA_DIR_ENV) {
        return normalize_user_path(&path);
    }

    dirs::home_dir().ok_or(PathError::NoHomeDir)
}

/// Get the path to the megasoft database file.
///
/// Resolution order:
/// 1. `MEGASOFT_DATABASE` environment variable
/// 2. `megasoft.db` inside [`data_root`]
///
/// The parent directory is created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    let path = match env::var(DATABASE_ENV) {
        Ok(raw) => normalize_user_path(&raw)?,
        Err(_) => data_root()?.join(DATABASE_FILE_NAME),
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| PathError::CreateFailed {
            path: parent.to_path_buf(),
            reason: e.to_string(),
        })?;
    }

    Ok(path)
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed == "~" {
        dirs::home_dir().ok_or(PathError::NoHomeDir)?
    } else if let Some(rest) = trimmed.strip_prefix("~/") {
        dirs::home_dir().ok_or(PathError::NoHomeDir)?.join(rest)
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        let cwd = env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))?;
        Ok(cwd.join(expanded))
    }
}
