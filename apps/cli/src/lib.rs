//! # Stockroom CLI Library
//!
//! Terminal front end for the Stockroom inventory tracker.
//!
//! ## Module Organization
//! ```text
//! stockroom_cli/
//! ├── lib.rs          ◄─── You are here (logging setup, module exports)
//! ├── cli.rs          ◄─── clap definitions
//! ├── config.rs       ◄─── flags > env > defaults
//! ├── session.rs      ◄─── LoginGate / Session over the core ports
//! ├── render.rs       ◄─── comfy-table and JSON output
//! ├── commands/
//! │   ├── mod.rs      ◄─── startup, login, dispatch
//! │   ├── product.rs  ◄─── list / add / delete / low-stock
//! │   └── shell.rs    ◄─── interactive menu
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod session;

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset and no `-v` is given.
///
/// Warnings only, so a plain command prints nothing but its output.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Filter for a `-v` count, or `None` to fall back to `RUST_LOG`/default.
pub fn verbosity_filter(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info,sqlx=warn"),
        _ => Some("debug,sqlx=info"),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `-v` - info for everything
/// - `-vv` - debug, including each store call
/// - `RUST_LOG=stockroom_db=debug` - per-crate control
/// - Default: warnings only
///
/// Logs go to stderr so stdout carries only command output.
pub fn init_tracing(verbose: u8) {
    let filter = match verbosity_filter(verbose) {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_filter() {
        assert_eq!(verbosity_filter(0), None);
        assert_eq!(verbosity_filter(1), Some("info,sqlx=warn"));
        assert_eq!(verbosity_filter(5), Some("debug,sqlx=info"));
    }

    #[test]
    fn test_default_filter_is_quiet() {
        use tracing_subscriber::filter::LevelFilter;

        let filter = EnvFilter::try_new(DEFAULT_LOG_FILTER).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }
}
