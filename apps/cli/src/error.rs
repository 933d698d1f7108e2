//! # API Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  Command Function                                                       │
//! │  Result<T, ApiError>                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Config Error?     ─── ConfigError::NoDataDir ──────────┐              │
//! │         │                                               │              │
//! │         ▼                                               ▼              │
//! │  Validation Error? ─── ValidationError::Required ──── ApiError ──► stderr
//! │         │                                               ▲              │
//! │         ▼                                               │              │
//! │  Database Error?   ─── DbError::StorageUnavailable ─────┘              │
//! │         │               (detail logged, generic message shown)         │
//! │         ▼                                                               │
//! │  Success ──────────────────────────────────────────────────────► stdout │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! With `--json` the error is printed as
//! `{"code": "INVALID_CREDENTIALS", "message": "Invalid username or password"}`.

use serde::Serialize;
use stockroom_core::ValidationError;
use stockroom_db::DbError;

use crate::config::ConfigError;

/// Message shown for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

/// Error returned from CLI commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown user or wrong password
    InvalidCredentials,

    /// Input validation failed
    ValidationError,

    /// The data file cannot be opened, read or written
    StorageUnavailable,

    /// A uniqueness or other constraint rejected the write
    ConstraintViolation,

    /// Any other database failure
    DatabaseError,

    /// Configuration could not be resolved
    ConfigError,

    /// Internal error (prompt I/O, serialization)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// The login failure. Unknown user and wrong password look the same.
    pub fn invalid_credentials() -> Self {
        ApiError::new(ErrorCode::InvalidCredentials, INVALID_CREDENTIALS_MESSAGE)
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::StorageUnavailable(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Storage unavailable: {}", e);
                ApiError::new(
                    ErrorCode::StorageUnavailable,
                    "Inventory database is unavailable; check the database path and permissions",
                )
            }
            DbError::UniqueViolation { field, value } => ApiError::new(
                ErrorCode::ConstraintViolation,
                format!("{} '{}' already exists", field, value),
            ),
            DbError::ConstraintViolation(e) => {
                tracing::error!("Constraint violation: {}", e);
                ApiError::new(ErrorCode::ConstraintViolation, "Invalid value rejected by the database")
            }
            DbError::QueryFailed(e) => {
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::Hashing(e) => {
                tracing::error!("Password hashing failed: {}", e);
                ApiError::internal("Password hashing failed")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts configuration errors to API errors.
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

/// Prompt failures (closed stdin, no terminal).
impl From<dialoguer::Error> for ApiError {
    fn from(err: dialoguer::Error) -> Self {
        ApiError::internal(format!("Prompt failed: {}", err))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::internal(format!("Failed to serialize output: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
