//! # Commands
//!
//! Startup, login and dispatch for every subcommand.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Command Startup                                   │
//! │                                                                         │
//! │  1. Resolve Configuration ────────────────────────────────────────────► │
//! │     • flags > STOCKROOM_* env > defaults                                │
//! │     • create the platform data directory if the default path is used    │
//! │                                                                         │
//! │  2. Initialize Store ─────────────────────────────────────────────────► │
//! │     • users: CREATE IF NOT EXISTS, seed one account if empty            │
//! │     • products: CREATE IF NOT EXISTS                                    │
//! │                                                                         │
//! │  3. Login (every command but `init`) ─────────────────────────────────► │
//! │     • username: --user / STOCKROOM_USER / prompt                        │
//! │     • password: STOCKROOM_PASSWORD / masked prompt                      │
//! │                                                                         │
//! │  4. Run the command against the Session ──────────────────────────────► │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;
pub mod shell;

use dialoguer::{Input, Password};
use serde::Serialize;
use tracing::{debug, warn};

use stockroom_db::{CredentialStore, Database, ProductRepository};

use crate::cli::{Cli, Commands};
use crate::config::AppConfig;
use crate::error::{ApiError, ErrorCode};
use crate::render;
use crate::session::{LoginGate, Session};

/// Initialized stores plus the configuration they came from.
#[derive(Debug, Clone)]
pub struct App {
    pub config: AppConfig,
    db: Database,
    credentials: CredentialStore,
    products: ProductRepository,
}

impl App {
    /// Prepares the data file: both tables exist and an account is seeded.
    pub async fn start(config: AppConfig) -> Result<Self, ApiError> {
        config.ensure_data_dir()?;

        let db = Database::new(config.db_config());
        let credentials = db.credentials(config.seed.clone());
        credentials.initialize().await?;
        let products = db.products();
        products.initialize().await?;

        debug!(path = %db.path().display(), "Inventory store ready");
        Ok(App {
            config,
            db,
            credentials,
            products,
        })
    }

    pub fn gate(&self) -> LoginGate<CredentialStore, ProductRepository> {
        LoginGate::new(self.credentials.clone(), self.products.clone())
    }

    /// Logs in with configured credentials, prompting for what's missing.
    pub async fn login(&self) -> Result<Session<ProductRepository>, ApiError> {
        let username = match &self.config.username {
            Some(username) => username.clone(),
            None => prompt_username()?,
        };
        let password = match &self.config.password {
            Some(password) => password.clone(),
            None => prompt_password()?,
        };
        self.gate().login(&username, &password).await
    }
}

pub(crate) fn prompt_username() -> Result<String, ApiError> {
    Ok(Input::<String>::new()
        .with_prompt("Username")
        .allow_empty(true)
        .interact_text()?)
}

pub(crate) fn prompt_password() -> Result<String, ApiError> {
    Ok(Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InitReport<'a> {
    path: String,
    seed_username: &'a str,
    healthy: bool,
}

/// `init`: the startup sequence already did the work. Confirms the file
/// answers a query and reports where it is.
pub async fn init(app: &App, json: bool) -> Result<String, ApiError> {
    let path = app.db.path().display().to_string();
    if !app.db.health_check().await {
        warn!(path = %path, "Health check failed");
        return Err(ApiError::new(
            ErrorCode::StorageUnavailable,
            format!("Inventory database at {path} is not readable"),
        ));
    }

    if json {
        return render::json(&InitReport {
            path,
            seed_username: &app.config.seed.username,
            healthy: true,
        });
    }
    Ok(format!("Inventory database ready at {path}"))
}

/// Runs one parsed command line. Output goes to stdout.
pub async fn run(cli: Cli) -> Result<(), ApiError> {
    let config = AppConfig::load(cli.overrides())?;
    let app = App::start(config).await?;
    let json = cli.json;

    let output = match cli.command {
        Commands::Init => init(&app, json).await?,
        Commands::Shell => return shell::run(&app).await,
        Commands::List => product::list(&app.login().await?, json).await?,
        Commands::Add {
            name,
            quantity,
            price,
        } => product::add(&app.login().await?, &name, &quantity, &price, json).await?,
        Commands::Delete { id } => product::delete(&app.login().await?, id, json).await?,
        Commands::LowStock { .. } => {
            let threshold = app.config.low_stock_threshold;
            product::low_stock(&app.login().await?, threshold, json).await?
        }
    };

    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigOverrides;
    use std::path::PathBuf;

    async fn app_at(path: PathBuf) -> App {
        let config = AppConfig::resolve(
            ConfigOverrides {
                db_path: Some(path),
                ..Default::default()
            },
            |_: &str| None,
            || Ok(PathBuf::from("unused")),
        )
        .unwrap();
        App::start(config).await.unwrap()
    }

    #[tokio::test]
    async fn test_init_reports_healthy_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.db");
        let app = app_at(path.clone()).await;

        assert_eq!(
            init(&app, false).await.unwrap(),
            format!("Inventory database ready at {}", path.display())
        );

        let report: serde_json::Value =
            serde_json::from_str(&init(&app, true).await.unwrap()).unwrap();
        assert_eq!(report["healthy"], true);
        assert_eq!(report["seedUsername"], "admin");
    }

    #[tokio::test]
    async fn test_init_fails_when_store_is_gone() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data");
        std::fs::create_dir(&data).unwrap();
        let app = app_at(data.join("inventory.db")).await;

        std::fs::remove_dir_all(&data).unwrap();

        let err = init(&app, false).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageUnavailable);
    }
}
