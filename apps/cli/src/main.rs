//! Stockroom entry point.
//!
//! Binary name: `stockroom`

use clap::Parser;
use std::process::ExitCode;
use tracing::debug;

use stockroom_cli::cli::Cli;
use stockroom_cli::{commands, init_tracing, render};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    debug!("Starting Stockroom");

    let json = cli.json;
    match commands::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if json {
                match render::json(&err) {
                    Ok(out) => println!("{out}"),
                    Err(_) => eprintln!("Error: {}", err.message),
                }
            } else {
                eprintln!("Error: {}", err.message);
            }
            ExitCode::FAILURE
        }
    }
}
