//! # stockroom-core: Pure Business Logic for Stockroom
//!
//! Types, money handling and input rules for the inventory tracker,
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation (apps/cli)                        │   │
//! │  │      Login ──► Product table ──► Add / Delete ──► Low stock     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ports::{CredentialVerifier,            │
//! │                                │         ProductCatalog}                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   ports   │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │  traits   │  │ProductForm│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 stockroom-db (Database Layer)                   │   │
//! │  │          SQLite users + products, per-call connections          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, NewProduct, LowStockItem)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Add-product form validation
//! - [`ports`] - Contracts implemented by the storage layer
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::validation::ProductForm;
//!
//! let form = ProductForm::new("Widget", "5", "2.50");
//! let product = form.validate().unwrap();
//!
//! assert_eq!(product.quantity, 5);
//! assert_eq!(product.price.cents(), 250);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod ports;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use money::Money;
pub use ports::{CredentialVerifier, ProductCatalog};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity cutoff for the low-stock report.
///
/// Products with `quantity < DEFAULT_LOW_STOCK_THRESHOLD` are flagged.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

/// Username of the account seeded into an empty store.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Initial password of the seeded account.
///
/// Only ever stored hashed. Front ends should let operators override it
/// through configuration before the first start.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
