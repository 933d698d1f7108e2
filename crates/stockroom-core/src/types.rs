//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   NewProduct    │   │     Product     │   │  LowStockItem   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │──►│  id (rowid)     │──►│  id             │       │
//! │  │  quantity       │   │  name           │   │  name           │       │
//! │  │  price (Money)  │   │  quantity       │   │  quantity       │       │
//! │  └─────────────────┘   │  price (Money)  │   └─────────────────┘       │
//! │     add() input        └─────────────────┘     report row              │
//! │                           list_all() row                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are immutable once stored: there is no update operation.
//! Users never leave the storage layer, so they have no type here.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A stored product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Row id assigned by the store on insert.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Units on hand. Expected `>= 0`, not enforced by the store.
    pub quantity: i64,

    /// Unit price. Expected `>= 0`, not enforced by the store.
    pub price: Money,
}

impl Product {
    /// Whether this product falls under the low-stock cutoff.
    #[inline]
    pub fn is_low_stock(&self, threshold: i64) -> bool {
        self.quantity < threshold
    }
}

// =============================================================================
// New Product
// =============================================================================

/// Input for `ProductCatalog::add`.
///
/// The storage layer accepts whatever it is given; build one through
/// [`crate::validation::ProductForm::validate`] when the values come from a
/// user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i64,
    pub price: Money,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, quantity: i64, price: Money) -> Self {
        NewProduct {
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Attaches the id assigned by the store.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            quantity: self.quantity,
            price: self.price,
        }
    }
}

// =============================================================================
// Low Stock Item
// =============================================================================

/// A row of the low-stock report: `(id, name, quantity)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LowStockItem {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
}

impl From<&Product> for LowStockItem {
    fn from(p: &Product) -> Self {
        LowStockItem {
            id: p.id,
            name: p.name.clone(),
            quantity: p.quantity,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
