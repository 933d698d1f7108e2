//! # Store Contracts
//!
//! The two traits a front end programs against. `stockroom-db` implements
//! them over SQLite; tests implement them in memory.
//!
//! ```text
//! ┌──────────────────────┐         ┌──────────────────────────────────┐
//! │  Presentation layer  │ ──────► │ CredentialVerifier               │
//! │  (no SQL, no GUI)    │         │   └── CredentialStore  (SQLite)  │
//! │                      │ ──────► │ ProductCatalog                   │
//! │                      │         │   └── ProductRepository (SQLite) │
//! └──────────────────────┘         └──────────────────────────────────┘
//! ```
//!
//! Each method is one complete store call: implementations must not hold
//! connections or locks between calls.

use std::future::Future;

use crate::types::{LowStockItem, NewProduct, Product};

/// Verifies a username/password pair.
pub trait CredentialVerifier {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns `true` only when the user exists and the password matches.
    ///
    /// An unknown user and a wrong password both yield `Ok(false)`;
    /// callers cannot tell them apart. `Err` is reserved for store faults.
    fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;
}

/// Product storage: insert, delete, list, low-stock report.
pub trait ProductCatalog {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Inserts a product and returns its new id. Performs no validation.
    fn add(&self, product: &NewProduct)
        -> impl Future<Output = Result<i64, Self::Error>> + Send;

    /// Deletes by id. Returns whether a row was removed; a missing id is
    /// not an error.
    fn delete(&self, id: i64) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Every product, ordered by id ascending.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Product>, Self::Error>> + Send;

    /// Products with `quantity < threshold`, ordered by id ascending.
    fn list_low_stock(
        &self,
        threshold: i64,
    ) -> impl Future<Output = Result<Vec<LowStockItem>, Self::Error>> + Send;
}
