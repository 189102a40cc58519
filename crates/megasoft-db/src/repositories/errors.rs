//! Mapping from sqlx errors to `RepositoryError`.

use sqlx::error::ErrorKind;

use megasoft_core::RepositoryError;

/// Classify a sqlx error, surfacing constraint violations separately.
pub(crate) fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e {
        let is_constraint = match db_err.kind() {
            ErrorKind::CheckViolation
            | ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation => true,
            // SQLite reports every constraint class as "... constraint failed"
            _ => db_err.message().contains("constraint failed"),
        };
        if is_constraint {
            return RepositoryError::Constraint(db_err.message().to_string());
        }
    }
    RepositoryError::Storage(e.to_string())
}
