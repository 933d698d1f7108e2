//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - Insert (returns the new row id)
//! - Delete by id (a missing id is not an error)
//! - List all, ordered by id
//! - Low-stock report: `quantity < threshold`
//!
//! ## Price Storage
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Money at the Column Boundary                         │
//! │                                                                         │
//! │  Money(250) ──to_decimal()──► 2.5 ──INSERT──► price REAL               │
//! │                                                                         │
//! │  price REAL ──SELECT──► 2.5 ──from_decimal()──► Money(250)             │
//! │                                                                         │
//! │  The column stays REAL so existing data files keep working; the        │
//! │  cent rounding on read brings back the exact value that was stored.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::{FromRow, SqliteConnection};
use tracing::debug;

use crate::database::Database;
use crate::error::{DbError, DbResult};
use crate::schema::CREATE_PRODUCTS_TABLE;
use stockroom_core::{LowStockItem, Money, NewProduct, Product, ProductCatalog};

/// Raw `products` row. Every column but `id` is nullable.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: Option<String>,
    quantity: Option<i64>,
    price: Option<f64>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name.unwrap_or_default(),
            quantity: row.quantity.unwrap_or(0),
            price: row.price.map(Money::from_decimal).unwrap_or_default(),
        }
    }
}

/// Raw low-stock report row.
#[derive(Debug, FromRow)]
struct LowStockRow {
    id: i64,
    name: Option<String>,
    quantity: i64,
}

impl From<LowStockRow> for LowStockItem {
    fn from(row: LowStockRow) -> Self {
        LowStockItem {
            id: row.id,
            name: row.name.unwrap_or_default(),
            quantity: row.quantity,
        }
    }
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
/// repo.initialize().await?;
///
/// let id = repo.add(&NewProduct::new("Widget", 5, Money::from_cents(250))).await?;
/// let low = repo.list_low_stock(10).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    db: Database,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(db: Database) -> Self {
        ProductRepository { db }
    }

    /// Creates the `products` table if absent.
    pub async fn initialize(&self) -> DbResult<()> {
        let mut conn = self.db.connect().await?;
        let result = sqlx::query(CREATE_PRODUCTS_TABLE).execute(&mut conn).await;
        self.db.release(conn).await;

        result?;
        debug!("Product table ready");
        Ok(())
    }

    /// Inserts a product and returns its id.
    ///
    /// No validation happens here: callers that take user input go through
    /// `ProductForm::validate` first.
    pub async fn add(&self, product: &NewProduct) -> DbResult<i64> {
        debug!(name = %product.name, quantity = product.quantity, "Inserting product");

        let mut conn = self.db.connect().await?;
        let result = sqlx::query("INSERT INTO products (name, quantity, price) VALUES (?1, ?2, ?3)")
            .bind(&product.name)
            .bind(product.quantity)
            .bind(product.price.to_decimal())
            .execute(&mut conn)
            .await;
        self.db.release(conn).await;

        let id = result?.last_insert_rowid();
        debug!(id, "Product inserted");
        Ok(id)
    }

    /// Deletes a product by id.
    ///
    /// ## Returns
    /// * `Ok(true)` - a row was removed
    /// * `Ok(false)` - no product had this id
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        debug!(id, "Deleting product");

        let mut conn = self.db.connect().await?;
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&mut conn)
            .await;
        self.db.release(conn).await;

        Ok(result?.rows_affected() > 0)
    }

    /// Every product, ordered by id ascending.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let mut conn = self.db.connect().await?;
        let rows = Self::fetch_all(&mut conn).await;
        self.db.release(conn).await;

        let products: Vec<Product> = rows?.into_iter().map(Product::from).collect();
        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    async fn fetch_all(conn: &mut SqliteConnection) -> Result<Vec<ProductRow>, sqlx::Error> {
        sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, quantity, price FROM products ORDER BY id ASC",
        )
        .fetch_all(conn)
        .await
    }

    /// Products whose quantity is strictly below `threshold`, ordered by id.
    ///
    /// A NULL quantity counts as 0, matching what [`Self::list_all`] shows.
    pub async fn list_low_stock(&self, threshold: i64) -> DbResult<Vec<LowStockItem>> {
        let mut conn = self.db.connect().await?;
        let rows = sqlx::query_as::<_, LowStockRow>(
            "SELECT id, name, COALESCE(quantity, 0) AS quantity \
             FROM products \
             WHERE COALESCE(quantity, 0) < ?1 \
             ORDER BY id ASC",
        )
        .bind(threshold)
        .fetch_all(&mut conn)
        .await;
        self.db.release(conn).await;

        let items: Vec<LowStockItem> = rows?.into_iter().map(LowStockItem::from).collect();
        debug!(threshold, count = items.len(), "Low-stock report");
        Ok(items)
    }

    /// Number of products.
    pub async fn count(&self) -> DbResult<i64> {
        let mut conn = self.db.connect().await?;
        let count: Result<i64, sqlx::Error> = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&mut conn)
            .await;
        self.db.release(conn).await;

        Ok(count?)
    }
}

impl ProductCatalog for ProductRepository {
    type Error = DbError;

    fn add(
        &self,
        product: &NewProduct,
    ) -> impl std::future::Future<Output = Result<i64, Self::Error>> + Send {
        ProductRepository::add(self, product)
    }

    fn delete(&self, id: i64) -> impl std::future::Future<Output = Result<bool, Self::Error>> + Send {
        ProductRepository::delete(self, id)
    }

    fn list_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Product>, Self::Error>> + Send {
        ProductRepository::list_all(self)
    }

    fn list_low_stock(
        &self,
        threshold: i64,
    ) -> impl std::future::Future<Output = Result<Vec<LowStockItem>, Self::Error>> + Send {
        ProductRepository::list_low_stock(self, threshold)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::DbConfig;

    async fn repo_in(dir: &tempfile::TempDir) -> ProductRepository {
        let repo = Database::new(DbConfig::new(dir.path().join("inventory.db"))).products();
        repo.initialize().await.unwrap();
        repo
    }

    fn widget(name: &str, quantity: i64, cents: i64) -> NewProduct {
        NewProduct::new(name, quantity, Money::from_cents(cents))
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir).await;

        let id = repo.add(&widget("Widget", 5, 250)).await.unwrap();
        let all = repo.list_all().await.unwrap();

        assert_eq!(all, vec![widget("Widget", 5, 250).into_product(id)]);
        assert_eq!(all[0].price.to_string(), "2.50");
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_ordered() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir).await;

        let a = repo.add(&widget("A", 1, 100)).await.unwrap();
        let b = repo.add(&widget("A", 1, 100)).await.unwrap();
        let c = repo.add(&widget("C", 3, 300)).await.unwrap();

        assert!(a < b && b < c);
        let ids: Vec<i64> = repo.list_all().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a, b, c]);
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir).await;

        let keep = repo.add(&widget("Keep", 20, 100)).await.unwrap();
        let gone = repo.add(&widget("Gone", 1, 100)).await.unwrap();

        assert!(repo.delete(gone).await.unwrap());
        assert!(!repo.delete(gone).await.unwrap());
        assert!(!repo.delete(9999).await.unwrap());

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, keep);
    }

    #[tokio::test]
    async fn test_low_stock_is_strict_subset() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir).await;

        let a = repo.add(&widget("Low", 3, 100)).await.unwrap();
        repo.add(&widget("AtThreshold", 10, 100)).await.unwrap();
        let c = repo.add(&widget("Zero", 0, 100)).await.unwrap();
        repo.add(&widget("Plenty", 50, 100)).await.unwrap();

        let low = repo.list_low_stock(10).await.unwrap();
        let ids: Vec<i64> = low.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![a, c]);
        assert_eq!(low[0].name, "Low");
        assert_eq!(low[0].quantity, 3);

        // Agrees with filtering the full list.
        let expected: Vec<LowStockItem> = repo
            .list_all()
            .await
            .unwrap()
            .iter()
            .filter(|p| p.is_low_stock(10))
            .map(LowStockItem::from)
            .collect();
        assert_eq!(low, expected);

        assert!(repo.list_low_stock(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bolt_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir).await;

        let id = repo.add(&widget("Bolt", 3, 10)).await.unwrap();
        let low = repo.list_low_stock(10).await.unwrap();
        assert_eq!(
            low,
            vec![LowStockItem {
                id,
                name: "Bolt".to_string(),
                quantity: 3
            }]
        );

        assert!(repo.delete(id).await.unwrap());
        assert!(repo.list_low_stock(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_null_columns_read_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.db");
        let db = Database::new(DbConfig::new(&path));
        let repo = db.products();
        repo.initialize().await.unwrap();

        let mut conn = db.connect().await.unwrap();
        sqlx::query("INSERT INTO products (name, quantity, price) VALUES (NULL, NULL, NULL)")
            .execute(&mut conn)
            .await
            .unwrap();
        db.release(conn).await;

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "");
        assert_eq!(all[0].quantity, 0);
        assert_eq!(all[0].price, Money::zero());

        let low = repo.list_low_stock(1).await.unwrap();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].quantity, 0);
    }

    #[tokio::test]
    async fn test_initialize_keeps_existing_rows() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir).await;
        repo.add(&widget("Widget", 5, 250)).await.unwrap();

        repo.initialize().await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_missing_table_is_query_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Database::new(DbConfig::new(dir.path().join("inventory.db"))).products();

        assert!(matches!(
            repo.list_all().await,
            Err(DbError::QueryFailed(_))
        ));
    }
}
