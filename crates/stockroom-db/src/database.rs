//! # Database Connections
//!
//! Configuration and per-call connections for the SQLite data file.
//!
//! ## Connection Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     One Connection Per Operation                        │
//! │                                                                         │
//! │  App Startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::new(path) ← explicit location, no globals                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config) ← builds connect options, no I/O yet            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  repo.list_all()                                                       │
//! │       ├── db.connect()     open the file                               │
//! │       ├── SELECT ...       may fail                                    │
//! │       └── db.release(conn) always runs, closes the file                │
//! │                                                                         │
//! │  Nothing is held between calls: no pool, no cache.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
use sqlx::{Connection, SqliteConnection};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{DbError, DbResult};
use crate::repository::product::ProductRepository;
use crate::repository::user::{CredentialStore, SeedAccount};

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("/path/to/inventory.db")
///     .busy_timeout(Duration::from_secs(2));
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// How long to wait on a lock held by another process.
    /// Default: 5 seconds
    pub busy_timeout: Duration,

    /// Whether to create the file on first connect.
    /// The parent directory must already exist.
    /// Default: true
    pub create_if_missing: bool,
}

impl DbConfig {
    /// Creates a new database configuration with the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            busy_timeout: Duration::from_secs(5),
            create_if_missing: true,
        }
    }

    /// Sets the busy timeout.
    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Sets whether a missing file is created on connect.
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }
}

// =============================================================================
// Database
// =============================================================================

/// Handle to the data file. Cheap to clone; holds no open connection.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl Database {
    /// Creates a database handle. Performs no I/O.
    pub fn new(config: DbConfig) -> Self {
        let options = SqliteConnectOptions::new()
            .filename(&config.database_path)
            .create_if_missing(config.create_if_missing)
            .busy_timeout(config.busy_timeout)
            // WAL mode: sidecar files are removed when the last connection closes
            .journal_mode(SqliteJournalMode::Wal)
            // NORMAL synchronous: Good balance of durability and speed
            .synchronous(SqliteSynchronous::Normal);

        debug!(path = %config.database_path.display(), "Database configured");

        Database {
            path: config.database_path,
            options,
        }
    }

    /// Path of the data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a fresh connection to the data file.
    ///
    /// Every failure here is a storage fault: the file can't be created,
    /// opened, or isn't a database.
    pub async fn connect(&self) -> DbResult<SqliteConnection> {
        debug!(path = %self.path.display(), "Opening connection");

        SqliteConnection::connect_with(&self.options)
            .await
            .map_err(|e| match DbError::from(e) {
                err @ DbError::StorageUnavailable(_) => err,
                other => DbError::StorageUnavailable(other.to_string()),
            })
    }

    /// Closes a connection obtained from [`Database::connect`].
    ///
    /// Call it whether or not the work on the connection succeeded. A
    /// failed close is logged, not returned: the operation's own result
    /// is what the caller needs.
    pub async fn release(&self, conn: SqliteConnection) {
        if let Err(e) = conn.close().await {
            warn!(error = %e, path = %self.path.display(), "Failed to close connection");
        }
    }

    /// Returns the credential store.
    pub fn credentials(&self, seed: SeedAccount) -> CredentialStore {
        CredentialStore::new(self.clone(), seed)
    }

    /// Returns the product repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.clone())
    }

    /// Checks that the file can be opened and queried.
    pub async fn health_check(&self) -> bool {
        let mut conn = match self.connect().await {
            Ok(conn) => conn,
            Err(_) => return false,
        };
        let ok = sqlx::query("SELECT 1").execute(&mut conn).await.is_ok();
        self.release(conn).await;
        ok
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
