//! # Login Gate and Session
//!
//! Product operations are reachable only through a [`Session`], and the only
//! way to get a `Session` is a successful [`LoginGate::login`].
//!
//! ```text
//! ┌────────────┐  login(user, pw)  ┌──────────────┐
//! │ LoginGate  │ ────────────────► │ Session      │──► products()
//! │  verifier  │   true            │  catalog     │──► add_product(form)
//! │  catalog   │                   │              │──► delete_product(id)
//! └────────────┘                   └──────────────┘──► low_stock(threshold)
//!       │ false
//!       ▼
//!  ApiError::invalid_credentials()
//! ```
//!
//! Both types are generic over the `stockroom-core` ports, so this module
//! knows nothing about SQLite and is tested against in-memory fakes.

use serde::Serialize;
use tracing::{debug, info, warn};

use stockroom_core::validation::{validate_threshold, ProductForm};
use stockroom_core::{CredentialVerifier, LowStockItem, Product, ProductCatalog};

use crate::error::ApiError;

// =============================================================================
// Views
// =============================================================================

/// A product as shown to the user: price formatted with two decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductView {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub price: String,
}

impl From<Product> for ProductView {
    fn from(p: Product) -> Self {
        ProductView {
            id: p.id,
            name: p.name,
            quantity: p.quantity,
            price: p.price.to_string(),
        }
    }
}

/// A row of the low-stock report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LowStockView {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
}

impl From<LowStockItem> for LowStockView {
    fn from(item: LowStockItem) -> Self {
        LowStockView {
            id: item.id,
            name: item.name,
            quantity: item.quantity,
        }
    }
}

// =============================================================================
// Login Gate
// =============================================================================

/// Holds the stores until someone logs in.
#[derive(Debug, Clone)]
pub struct LoginGate<C, P> {
    verifier: C,
    catalog: P,
}

impl<C, P> LoginGate<C, P>
where
    C: CredentialVerifier,
    P: ProductCatalog + Clone,
    ApiError: From<C::Error>,
{
    pub fn new(verifier: C, catalog: P) -> Self {
        LoginGate { verifier, catalog }
    }

    /// Checks the credentials and opens a session.
    ///
    /// Every rejection carries the same message, whether the user is unknown
    /// or the password is wrong. Store faults come back as their own error.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session<P>, ApiError> {
        if self.verifier.authenticate(username, password).await? {
            debug!(username = %username, "Login succeeded");
            Ok(Session {
                username: username.to_string(),
                catalog: self.catalog.clone(),
            })
        } else {
            warn!(username = %username, "Login failed");
            Err(ApiError::invalid_credentials())
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// An authenticated user's access to the product catalog.
#[derive(Debug)]
pub struct Session<P> {
    username: String,
    catalog: P,
}

impl<P> Session<P>
where
    P: ProductCatalog,
    ApiError: From<P::Error>,
{
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Every product, ordered by id.
    pub async fn products(&self) -> Result<Vec<ProductView>, ApiError> {
        let products = self.catalog.list_all().await?;
        Ok(products.into_iter().map(ProductView::from).collect())
    }

    /// Validates the form, then stores the product. Returns the new id.
    ///
    /// Nothing is written when validation fails.
    pub async fn add_product(&self, form: &ProductForm) -> Result<i64, ApiError> {
        let product = form.validate()?;
        let id = self.catalog.add(&product).await?;
        info!(id, name = %product.name, "Product added");
        Ok(id)
    }

    /// Deletes by id. `Ok(false)` when nothing matched.
    pub async fn delete_product(&self, id: i64) -> Result<bool, ApiError> {
        let removed = self.catalog.delete(id).await?;
        if removed {
            info!(id, "Product deleted");
        } else {
            debug!(id, "Delete matched no product");
        }
        Ok(removed)
    }

    /// Products with quantity strictly below `threshold`.
    pub async fn low_stock(&self, threshold: i64) -> Result<Vec<LowStockView>, ApiError> {
        let threshold = validate_threshold(threshold)?;
        let items = self.catalog.list_low_stock(threshold).await?;
        Ok(items.into_iter().map(LowStockView::from).collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
