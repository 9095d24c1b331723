//! Error types for taskman.

use thiserror::Error;

/// Errors produced by taskman.
///
/// Storage errors are carried through untouched in [`TaskmanError::Database`]
/// so callers can inspect the underlying `SQLite` failure.
#[derive(Debug, Error)]
pub enum TaskmanError {
    /// Error reported by the `SQLite` engine.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A status name that has no row in the `status` table.
    #[error("Unknown status '{0}'")]
    UnknownStatus(String),

    /// Users and tasks were seeded before the status vocabulary.
    #[error("No statuses found. Seed statuses before generating tasks.")]
    MissingStatuses,

    /// Configuration could not be loaded or saved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl TaskmanError {
    /// Whether this error is a unique or foreign-key constraint violation.
    #[must_use]
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Self::Database(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_message() {
        let err = TaskmanError::UnknownStatus("archived".to_string());
        assert_eq!(err.to_string(), "Unknown status 'archived'");
        assert!(!err.is_constraint_violation());
    }

    #[test]
    fn test_constraint_violation_detected() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (name TEXT UNIQUE); INSERT INTO t VALUES ('a');")
            .unwrap();

        let err: TaskmanError = conn
            .execute("INSERT INTO t VALUES ('a')", [])
            .unwrap_err()
            .into();

        assert!(err.is_constraint_violation());
    }
}
