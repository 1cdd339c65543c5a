//! Storage error types
//!
//! Error codes:
//! - STORAGE_UNAVAILABLE: the backend cannot be reached
//! - STORAGE_CONSTRAINT_VIOLATION: the row was rejected by a table constraint
//! - STORAGE_DATABASE_ERROR: any other backend failure
//! - STORAGE_MIGRATION_FAILED: schema migrations could not be applied
//!
//! None of these are recoverable by the endpoint. Details are for operators
//! and must not be sent to callers.

use sqlx::migrate::MigrateError;
use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("constraint violation: {0}")]
    Constraint(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("migration failed: {0}")]
    Migration(String),
}

impl StorageError {
    /// Returns the string code for logs
    pub fn code(&self) -> &'static str {
        match self {
            StorageError::Unavailable(_) => "STORAGE_UNAVAILABLE",
            StorageError::Constraint(_) => "STORAGE_CONSTRAINT_VIOLATION",
            StorageError::Database(_) => "STORAGE_DATABASE_ERROR",
            StorageError::Migration(_) => "STORAGE_MIGRATION_FAILED",
        }
    }
}

/// PostgreSQL `string_data_right_truncation`, raised when a value exceeds a
/// VARCHAR column width
const PG_STRING_TOO_LONG: &str = "22001";

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => StorageError::Unavailable(err.to_string()),
            sqlx::Error::Database(db)
                if db.constraint().is_some()
                    || db.code().as_deref() == Some(PG_STRING_TOO_LONG) =>
            {
                StorageError::Constraint(err.to_string())
            }
            _ => StorageError::Database(err.to_string()),
        }
    }
}

impl From<MigrateError> for StorageError {
    fn from(err: MigrateError) -> Self {
        StorageError::Migration(err.to_string())
    }
}
