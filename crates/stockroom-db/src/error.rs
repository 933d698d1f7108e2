//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Categorized: storage fault or constraint      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in the app) ← Generic message for the user                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Deleting a missing product is not an error, so there is no NotFound
//! variant.

use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// The data file cannot be opened, read or written.
    ///
    /// ## When This Occurs
    /// - Parent directory doesn't exist
    /// - File permissions issue / read-only file system
    /// - Disk full
    /// - File is locked by another process or is not a database
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - Inserting a duplicate username
    #[error("Duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// Any other constraint failure (NOT NULL, CHECK, FOREIGN KEY).
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Query execution failed for a reason other than the above.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// The password hasher rejected its input.
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a UniqueViolation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        DbError::UniqueViolation {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// SQLite primary result codes that mean the file itself is unusable.
///
/// PERM, BUSY, LOCKED, READONLY, IOERR, CORRUPT, FULL, CANTOPEN, NOTADB
const STORAGE_FAULT_CODES: &[i64] = &[3, 5, 6, 8, 10, 11, 13, 14, 26];

/// Whether an (extended) SQLite result code is a storage fault.
fn is_storage_fault(code: Option<&str>) -> bool {
    code.and_then(|c| c.parse::<i64>().ok())
        .map(|extended| STORAGE_FAULT_CODES.contains(&(extended & 0xff)))
        .unwrap_or(false)
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// Database + UniqueViolation kind   → DbError::UniqueViolation
/// Database + other constraint kind  → DbError::ConstraintViolation
/// Database + storage result code    → DbError::StorageUnavailable
/// Database (anything else)          → DbError::QueryFailed
/// Io / Configuration                → DbError::StorageUnavailable
/// Other                             → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message().to_string();

                match db_err.kind() {
                    // "UNIQUE constraint failed: <table>.<column>"
                    ErrorKind::UniqueViolation => {
                        let field = msg
                            .split("UNIQUE constraint failed: ")
                            .nth(1)
                            .unwrap_or("unknown")
                            .to_string();
                        DbError::UniqueViolation {
                            field,
                            value: "unknown".to_string(),
                        }
                    }
                    ErrorKind::ForeignKeyViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation => DbError::ConstraintViolation(msg),
                    _ if is_storage_fault(db_err.code().as_deref()) => {
                        DbError::StorageUnavailable(msg)
                    }
                    _ => DbError::QueryFailed(msg),
                }
            }

            sqlx::Error::Io(e) => DbError::StorageUnavailable(e.to_string()),

            sqlx::Error::Configuration(e) => DbError::StorageUnavailable(e.to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
