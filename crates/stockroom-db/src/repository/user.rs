//! # Credential Store
//!
//! The `users` table: creation, the one-time seed account, login checks.
//!
//! ## Seeding
//! ```text
//! initialize()
//!     │
//!     ├── CREATE TABLE IF NOT EXISTS users
//!     ├── SELECT COUNT(*) FROM users
//!     │       │
//!     │       ├── > 0  → done (existing accounts are never touched)
//!     │       └── = 0  → hash seed password, INSERT seed account
//!     │
//!     └── release connection
//! ```
//!
//! The seed only lands in an empty table, so running `initialize()` on
//! every startup leaves exactly one account after the first run.

use sqlx::SqliteConnection;
use std::fmt;
use tracing::{debug, info, warn};

use crate::database::Database;
use crate::error::{DbError, DbResult};
use crate::password::{hash_password, verify_stored_password};
use crate::schema::CREATE_USERS_TABLE;
use stockroom_core::{CredentialVerifier, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};

// =============================================================================
// Seed Account
// =============================================================================

/// The account inserted into an empty `users` table.
#[derive(Clone, PartialEq, Eq)]
pub struct SeedAccount {
    pub username: String,
    pub password: String,
}

impl SeedAccount {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        SeedAccount {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Whether this is the well-known `admin` / `admin123` pair.
    pub fn is_builtin_default(&self) -> bool {
        self.username == DEFAULT_ADMIN_USERNAME && self.password == DEFAULT_ADMIN_PASSWORD
    }
}

impl Default for SeedAccount {
    fn default() -> Self {
        SeedAccount::new(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
    }
}

// Keeps the password out of logs.
impl fmt::Debug for SeedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedAccount")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// Credential Store
// =============================================================================

/// Repository for the `users` table.
///
/// ## Usage
/// ```rust,ignore
/// let store = db.credentials(SeedAccount::default());
/// store.initialize().await?;
///
/// assert!(store.authenticate("admin", "admin123").await?);
/// ```
#[derive(Debug, Clone)]
pub struct CredentialStore {
    db: Database,
    seed: SeedAccount,
}

impl CredentialStore {
    /// Creates a new CredentialStore.
    pub fn new(db: Database, seed: SeedAccount) -> Self {
        CredentialStore { db, seed }
    }

    /// Creates the table and seeds it if empty. Safe to call repeatedly.
    pub async fn initialize(&self) -> DbResult<()> {
        let mut conn = self.db.connect().await?;
        let result = Self::create_and_seed(&mut conn, &self.seed).await;
        self.db.release(conn).await;

        if result? {
            info!(username = %self.seed.username, "Seeded initial account");
            if self.seed.is_builtin_default() {
                warn!(
                    username = %self.seed.username,
                    "Initial account uses the built-in default password; \
                     set STOCKROOM_ADMIN_PASSWORD before first run to choose another"
                );
            }
        } else {
            debug!("Credential table already populated");
        }

        Ok(())
    }

    /// Returns whether the seed row was inserted.
    async fn create_and_seed(conn: &mut SqliteConnection, seed: &SeedAccount) -> DbResult<bool> {
        sqlx::query(CREATE_USERS_TABLE).execute(&mut *conn).await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&mut *conn)
            .await?;
        if count > 0 {
            return Ok(false);
        }

        let hash = hash_password(&seed.password)?;

        // Guarded again in SQL: another process may have seeded in between.
        let result = sqlx::query(
            "INSERT INTO users (username, password) \
             SELECT ?1, ?2 WHERE NOT EXISTS (SELECT 1 FROM users)",
        )
        .bind(&seed.username)
        .bind(&hash)
        .execute(&mut *conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Checks a username/password pair.
    ///
    /// ## Returns
    /// * `Ok(true)` - user exists and the password matches
    /// * `Ok(false)` - unknown user or wrong password
    /// * `Err(DbError::StorageUnavailable)` - the file can't be read
    pub async fn authenticate(&self, username: &str, password: &str) -> DbResult<bool> {
        debug!(username = %username, "Checking credentials");

        let mut conn = self.db.connect().await?;
        let stored: Result<Option<String>, sqlx::Error> =
            sqlx::query_scalar("SELECT password FROM users WHERE username = ?1")
                .bind(username)
                .fetch_optional(&mut conn)
                .await;
        self.db.release(conn).await;

        Ok(verify_stored_password(password, stored?.as_deref()))
    }

    /// Adds an account and returns its id.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - username already taken
    pub async fn create_user(&self, username: &str, password: &str) -> DbResult<i64> {
        let hash = hash_password(password)?;

        let mut conn = self.db.connect().await?;
        let result = sqlx::query("INSERT INTO users (username, password) VALUES (?1, ?2)")
            .bind(username)
            .bind(&hash)
            .execute(&mut conn)
            .await;
        self.db.release(conn).await;

        match result.map_err(DbError::from) {
            Ok(done) => {
                info!(username = %username, "Created account");
                Ok(done.last_insert_rowid())
            }
            Err(DbError::UniqueViolation { .. }) => Err(DbError::duplicate("username", username)),
            Err(e) => Err(e),
        }
    }

    /// Number of accounts.
    pub async fn user_count(&self) -> DbResult<i64> {
        let mut conn = self.db.connect().await?;
        let count: Result<i64, sqlx::Error> = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&mut conn)
            .await;
        self.db.release(conn).await;

        Ok(count?)
    }
}

impl CredentialVerifier for CredentialStore {
    type Error = DbError;

    fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<bool, Self::Error>> + Send {
        CredentialStore::authenticate(self, username, password)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
