//! Command-line definitions for the `stockroom` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// Track products, stock levels and low-stock items.
#[derive(Debug, Parser)]
#[command(name = "stockroom", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Database file (default: platform data directory).
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Username to log in as (password from STOCKROOM_PASSWORD or prompt).
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Output machine-readable JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,

    /// More log output on stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the tables and the initial account, then exit.
    Init,

    /// List every product.
    #[command(alias = "ls")]
    List,

    /// Add a product.
    Add {
        /// Product name.
        #[arg(long)]
        name: String,

        /// Units on hand (whole number).
        #[arg(long)]
        quantity: String,

        /// Unit price, e.g. 2.50.
        #[arg(long)]
        price: String,
    },

    /// Delete a product by id.
    #[command(alias = "rm")]
    Delete {
        /// Product id.
        id: i64,
    },

    /// Show products whose quantity is below the threshold.
    #[command(name = "low-stock")]
    LowStock {
        /// Cutoff (default: STOCKROOM_LOW_STOCK_THRESHOLD or 10).
        #[arg(long, short, allow_negative_numbers = true)]
        threshold: Option<i64>,
    },

    /// Log in once and work from an interactive menu.
    Shell,
}

impl Cli {
    /// Flag values that take priority over the environment.
    pub fn overrides(&self) -> ConfigOverrides {
        let low_stock_threshold = match self.command {
            Commands::LowStock { threshold } => threshold,
            _ => None,
        };
        ConfigOverrides {
            db_path: self.db.clone(),
            username: self.user.clone(),
            low_stock_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_add_keeps_raw_strings() {
        let cli = Cli::parse_from([
            "stockroom", "add", "--name", "Widget", "--quantity", "5", "--price", "2.50",
        ]);
        match cli.command {
            Commands::Add {
                name,
                quantity,
                price,
            } => {
                assert_eq!(name, "Widget");
                assert_eq!(quantity, "5");
                assert_eq!(price, "2.50");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_and_threshold() {
        let cli = Cli::parse_from([
            "stockroom", "low-stock", "--threshold", "3", "--db", "/tmp/x.db", "--json", "-vv",
        ]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);

        let overrides = cli.overrides();
        assert_eq!(overrides.db_path, Some(PathBuf::from("/tmp/x.db")));
        assert_eq!(overrides.low_stock_threshold, Some(3));
    }

    #[test]
    fn test_threshold_only_from_low_stock() {
        let cli = Cli::parse_from(["stockroom", "list", "--user", "admin"]);
        let overrides = cli.overrides();
        assert_eq!(overrides.low_stock_threshold, None);
        assert_eq!(overrides.username.as_deref(), Some("admin"));
    }
}
