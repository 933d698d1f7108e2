//! Product commands: list, add, delete, low-stock.
//!
//! Each returns the text to print so the shell and the one-shot commands
//! share the same output.

use serde_json::json;
use stockroom_core::validation::ProductForm;
use stockroom_core::ProductCatalog;

use crate::error::ApiError;
use crate::render;
use crate::session::Session;

/// Lists all products.
pub async fn list<P>(session: &Session<P>, json: bool) -> Result<String, ApiError>
where
    P: ProductCatalog,
    ApiError: From<P::Error>,
{
    let products = session.products().await?;
    if json {
        return render::json(&products);
    }
    Ok(render::products(&products))
}

/// Validates and adds a product.
pub async fn add<P>(
    session: &Session<P>,
    name: &str,
    quantity: &str,
    price: &str,
    json: bool,
) -> Result<String, ApiError>
where
    P: ProductCatalog,
    ApiError: From<P::Error>,
{
    let id = session
        .add_product(&ProductForm::new(name, quantity, price))
        .await?;
    if json {
        return render::json(&json!({ "id": id }));
    }
    Ok(format!("Added product {id}"))
}

/// Deletes a product. A missing id is reported, not treated as a failure.
pub async fn delete<P>(session: &Session<P>, id: i64, json: bool) -> Result<String, ApiError>
where
    P: ProductCatalog,
    ApiError: From<P::Error>,
{
    let deleted = session.delete_product(id).await?;
    if json {
        return render::json(&json!({ "id": id, "deleted": deleted }));
    }
    Ok(if deleted {
        format!("Deleted product {id}")
    } else {
        format!("No product with id {id}")
    })
}

/// Low-stock report.
pub async fn low_stock<P>(
    session: &Session<P>,
    threshold: i64,
    json: bool,
) -> Result<String, ApiError>
where
    P: ProductCatalog,
    ApiError: From<P::Error>,
{
    let items = session.low_stock(threshold).await?;
    if json {
        return render::json(&items);
    }
    Ok(render::low_stock(&items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::App;
    use crate::config::{AppConfig, ConfigOverrides, ENV_PASSWORD};
    use crate::error::ErrorCode;
    use std::path::PathBuf;

    async fn app_in(dir: &tempfile::TempDir, password: &str) -> App {
        let password = password.to_string();
        let config = AppConfig::resolve(
            ConfigOverrides {
                db_path: Some(dir.path().join("inventory.db")),
                username: Some("admin".into()),
                low_stock_threshold: None,
            },
            move |key: &str| (key == ENV_PASSWORD).then(|| password.clone()),
            || Ok(PathBuf::from("unused")),
        )
        .unwrap();
        App::start(config).await.unwrap()
    }

    #[tokio::test]
    async fn test_bolt_scenario_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_in(&dir, "admin123").await;
        let session = app.login().await.unwrap();

        let out = add(&session, "Bolt", "3", "0.10", true).await.unwrap();
        let id = serde_json::from_str::<serde_json::Value>(&out).unwrap()["id"]
            .as_i64()
            .unwrap();

        let report = low_stock(&session, 10, false).await.unwrap();
        assert!(report.contains("Bolt"));

        assert_eq!(delete(&session, id, false).await.unwrap(), format!("Deleted product {id}"));
        assert_eq!(
            delete(&session, id, false).await.unwrap(),
            format!("No product with id {id}")
        );
        assert_eq!(low_stock(&session, 10, false).await.unwrap(), "No low-stock items found!");
        assert_eq!(list(&session, true).await.unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_list_formats_price() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_in(&dir, "admin123").await;
        let session = app.login().await.unwrap();

        add(&session, "Widget", "5", "2.5", false).await.unwrap();
        let out = list(&session, true).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value[0]["name"], "Widget");
        assert_eq!(value[0]["quantity"], 5);
        assert_eq!(value[0]["price"], "2.50");
    }

    #[tokio::test]
    async fn test_wrong_password_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_in(&dir, "not-the-password").await;

        let err = app.login().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_restart_keeps_data_and_single_account() {
        let dir = tempfile::tempdir().unwrap();
        {
            let app = app_in(&dir, "admin123").await;
            let session = app.login().await.unwrap();
            add(&session, "Widget", "5", "2.50", false).await.unwrap();
        }

        let app = app_in(&dir, "admin123").await;
        let session = app.login().await.unwrap();
        assert_eq!(session.products().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_directory_is_storage_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::resolve(
            ConfigOverrides {
                db_path: Some(dir.path().join("nope").join("inventory.db")),
                ..Default::default()
            },
            |_: &str| None,
            || Ok(PathBuf::from("unused")),
        )
        .unwrap();

        let err = App::start(config).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageUnavailable);
    }
}
