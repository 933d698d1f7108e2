//! # stockroom-db: Database Layer for Stockroom
//!
//! This crate provides database access for Stockroom.
//! It uses one local SQLite file with sqlx for I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  Presentation (login, list, add, delete, low-stock)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   stockroom-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐  ┌────────────┐  │   │
//! │  │   │   Database    │    │    Repositories    │  │   Schema   │  │   │
//! │  │   │ (database.rs) │    │                    │  │ (schema.rs)│  │   │
//! │  │   │               │    │ CredentialStore    │  │            │  │   │
//! │  │   │ connect()     │◄───│ ProductRepository  │  │ users      │  │   │
//! │  │   │ release()     │    │                    │  │ products   │  │   │
//! │  │   └───────────────┘    └────────────────────┘  └────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 SQLite file (path from DbConfig)                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`database`] - Connection configuration and per-call connections
//! - [`schema`] - Table definitions
//! - [`error`] - Database error types
//! - [`password`] - Argon2 hashing helpers
//! - [`repository`] - CredentialStore and ProductRepository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_db::{Database, DbConfig, SeedAccount};
//!
//! let db = Database::new(DbConfig::new("path/to/inventory.db"));
//!
//! let credentials = db.credentials(SeedAccount::default());
//! credentials.initialize().await?;
//!
//! if credentials.authenticate("admin", "admin123").await? {
//!     let products = db.products();
//!     products.initialize().await?;
//!     let all = products.list_all().await?;
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod database;
pub mod error;
pub mod password;
pub mod repository;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use database::{Database, DbConfig};
pub use error::{DbError, DbResult};

// Repository re-exports for convenience
pub use repository::product::ProductRepository;
pub use repository::user::{CredentialStore, SeedAccount};
