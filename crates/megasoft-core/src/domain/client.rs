//! Client domain type and name validation.

use serde::{Deserialize, Serialize};

use crate::ports::CoreError;

/// Shortest accepted client name, in characters.
pub const CLIENT_NAME_MIN_LEN: usize = 2;

/// Longest accepted client name, in characters.
pub const CLIENT_NAME_MAX_LEN: usize = 100;

/// A registered client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Database-generated identifier.
    pub id: i64,
    /// Display name, 2 to 100 characters.
    pub name: String,
}

impl Client {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Validate a client name.
///
/// Length is counted in characters, not bytes, so multi-byte names are
/// judged by what the user sees. The name is not trimmed.
pub fn validate_client_name(name: &str) -> Result<(), CoreError> {
    let len = name.chars().count();
    if (CLIENT_NAME_MIN_LEN..=CLIENT_NAME_MAX_LEN).contains(&len) {
        return Ok(());
    }

    tracing::error!(
        name = %name,
        len,
        "Invalid client name. Name must be between {CLIENT_NAME_MIN_LEN} and {CLIENT_NAME_MAX_LEN} characters."
    );
    Err(CoreError::Validation(format!(
        "Client name must be between {CLIENT_NAME_MIN_LEN} and {CLIENT_NAME_MAX_LEN} characters."
    )))
}
