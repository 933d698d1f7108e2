//! # Configuration
//!
//! Resolves where the data file lives, the low-stock cutoff, the seed
//! account and the login credentials for non-interactive commands.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--db`, `--user`, `--threshold`)
//! 2. Environment variables (`STOCKROOM_*`)
//! 3. Defaults (this file)
//!
//! ## Default Database Location
//! - **macOS**: `~/Library/Application Support/com.stockroom.stockroom/inventory.db`
//! - **Windows**: `%APPDATA%\stockroom\stockroom\data\inventory.db`
//! - **Linux**: `~/.local/share/stockroom/inventory.db`
//!
//! Configuration is read-only after startup.

use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

use stockroom_core::DEFAULT_LOW_STOCK_THRESHOLD;
use stockroom_db::{DbConfig, SeedAccount};

/// Database file override.
pub const ENV_DB_PATH: &str = "STOCKROOM_DB_PATH";
/// Low-stock cutoff.
pub const ENV_LOW_STOCK_THRESHOLD: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";
/// Seed account for an empty store.
pub const ENV_ADMIN_USERNAME: &str = "STOCKROOM_ADMIN_USERNAME";
pub const ENV_ADMIN_PASSWORD: &str = "STOCKROOM_ADMIN_PASSWORD";
/// Login for non-interactive commands.
pub const ENV_USER: &str = "STOCKROOM_USER";
pub const ENV_PASSWORD: &str = "STOCKROOM_PASSWORD";

/// File name inside the platform data directory.
pub const DEFAULT_DB_FILE: &str = "inventory.db";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine app data directory; set STOCKROOM_DB_PATH or pass --db")]
    NoDataDir,

    #[error("Failed to create data directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{var} is invalid ('{value}'): {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Values given on the command line. `None` falls through to the
/// environment, then to defaults.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub db_path: Option<PathBuf>,
    pub username: Option<String>,
    pub low_stock_threshold: Option<i64>,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite data file.
    pub db_path: PathBuf,

    /// Whether `db_path` is the platform default (and so ours to create).
    pub db_path_is_default: bool,

    /// Cutoff for the low-stock report.
    /// Default: 10
    pub low_stock_threshold: i64,

    /// Account inserted into an empty store.
    /// Default: admin / admin123
    pub seed: SeedAccount,

    /// Login username; prompted when absent.
    pub username: Option<String>,

    /// Login password; prompted (masked) when absent.
    pub password: Option<String>,
}

impl AppConfig {
    /// Loads configuration from flags and the process environment.
    pub fn load(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        Self::resolve(overrides, |key| std::env::var(key).ok(), default_db_path)
    }

    /// Resolves configuration from explicit sources.
    ///
    /// Empty environment values count as unset. `default_path` is only
    /// called when neither a flag nor the environment names a file.
    pub fn resolve(
        overrides: ConfigOverrides,
        env: impl Fn(&str) -> Option<String>,
        default_path: impl FnOnce() -> Result<PathBuf, ConfigError>,
    ) -> Result<Self, ConfigError> {
        let env = |key: &str| env(key).filter(|v| !v.is_empty());

        let (db_path, db_path_is_default) = match overrides
            .db_path
            .or_else(|| env(ENV_DB_PATH).map(PathBuf::from))
        {
            Some(path) => (path, false),
            None => (default_path()?, true),
        };

        let low_stock_threshold = match overrides.low_stock_threshold {
            Some(threshold) => threshold,
            None => match env(ENV_LOW_STOCK_THRESHOLD) {
                Some(raw) => parse_threshold(&raw)?,
                None => DEFAULT_LOW_STOCK_THRESHOLD,
            },
        };

        let mut seed = SeedAccount::default();
        if let Some(username) = env(ENV_ADMIN_USERNAME) {
            seed.username = username;
        }
        if let Some(password) = env(ENV_ADMIN_PASSWORD) {
            seed.password = password;
        }

        let config = AppConfig {
            db_path,
            db_path_is_default,
            low_stock_threshold,
            seed,
            username: overrides.username.or_else(|| env(ENV_USER)),
            password: env(ENV_PASSWORD),
        };

        debug!(
            db_path = %config.db_path.display(),
            threshold = config.low_stock_threshold,
            "Configuration resolved"
        );
        Ok(config)
    }

    /// Creates the platform data directory when the default path is used.
    ///
    /// An explicit path is taken as-is: a missing directory there surfaces
    /// as a storage error on first connect.
    pub fn ensure_data_dir(&self) -> Result<(), ConfigError> {
        if !self.db_path_is_default {
            return Ok(());
        }
        match self.db_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                std::fs::create_dir_all(dir).map_err(|source| ConfigError::CreateDir {
                    path: dir.to_path_buf(),
                    source,
                })
            }
            _ => Ok(()),
        }
    }

    /// Storage configuration for `stockroom-db`.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.db_path)
    }
}

/// `<platform data dir>/inventory.db`.
pub fn default_db_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("com", "stockroom", "stockroom").ok_or(ConfigError::NoDataDir)?;
    Ok(proj_dirs.data_dir().join(DEFAULT_DB_FILE))
}

fn parse_threshold(raw: &str) -> Result<i64, ConfigError> {
    let invalid = |reason: &str| ConfigError::Invalid {
        var: ENV_LOW_STOCK_THRESHOLD,
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| invalid("expected a whole number"))?;
    if value < 0 {
        return Err(invalid("must not be negative"));
    }
    Ok(value)
}
