//! # Repositories
//!
//! One repository per table. Each method opens its own connection through
//! [`crate::Database::connect`] and releases it before returning.
//!
//! - [`user::CredentialStore`] - `users`: seeding and login checks
//! - [`product::ProductRepository`] - `products`: add, delete, list, low stock

pub mod product;
pub mod user;
