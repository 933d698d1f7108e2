//! # Schema
//!
//! Table definitions, applied with `IF NOT EXISTS` on every initialize.
//! There are no migrations: both tables keep this exact shape.
//!
//! ```text
//! users                              products
//! ┌──────────┬─────────────────────┐ ┌──────────┬──────────────────────┐
//! │ id       │ INTEGER PK AUTOINC  │ │ id       │ INTEGER PK AUTOINC   │
//! │ username │ TEXT NOT NULL UNIQUE│ │ name     │ TEXT                 │
//! │ password │ TEXT NOT NULL       │ │ quantity │ INTEGER              │
//! └──────────┴─────────────────────┘ │ price    │ REAL                 │
//!                                    └──────────┴──────────────────────┘
//! ```
//!
//! `users.password` holds an Argon2id PHC string, never plaintext.

/// Credential table.
pub const CREATE_USERS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
)";

/// Product table. Product columns are nullable; readers treat NULL as
/// empty name, zero quantity and zero price.
pub const CREATE_PRODUCTS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    quantity INTEGER,
    price REAL
)";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{Database, DbConfig};
    use crate::error::DbError;

    #[tokio::test]
    async fn test_users_reject_null_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(DbConfig::new(dir.path().join("inventory.db")));
        let mut conn = db.connect().await.unwrap();
        sqlx::query(CREATE_USERS_TABLE).execute(&mut conn).await.unwrap();

        let no_username = sqlx::query("INSERT INTO users (username, password) VALUES (NULL, 'x')")
            .execute(&mut conn)
            .await
            .map_err(DbError::from);
        let no_password = sqlx::query("INSERT INTO users (username, password) VALUES ('x', NULL)")
            .execute(&mut conn)
            .await
            .map_err(DbError::from);
        db.release(conn).await;

        assert!(matches!(no_username, Err(DbError::ConstraintViolation(_))));
        assert!(matches!(no_password, Err(DbError::ConstraintViolation(_))));
    }

    #[tokio::test]
    async fn test_deleted_product_id_is_not_reused() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(DbConfig::new(dir.path().join("inventory.db")));
        let mut conn = db.connect().await.unwrap();
        sqlx::query(CREATE_PRODUCTS_TABLE).execute(&mut conn).await.unwrap();

        let insert = "INSERT INTO products (name, quantity, price) VALUES ('Bolt', 3, 0.1)";
        let first = sqlx::query(insert).execute(&mut conn).await.unwrap().last_insert_rowid();
        sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(first)
            .execute(&mut conn)
            .await
            .unwrap();
        let second = sqlx::query(insert).execute(&mut conn).await.unwrap().last_insert_rowid();
        db.release(conn).await;

        assert!(second > first);
    }
}
