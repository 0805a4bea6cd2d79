//! Development tasks for the combat engine
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{CheckConfig, Skirmish};

/// Development tasks for the combat engine
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the tactical combat engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Validate a combat config file and print the resolved values
    CheckConfig(CheckConfig),

    /// Run a scenario headless with both sides on autopilot
    Skirmish(Skirmish),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for COMBAT_* overrides and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::CheckConfig(cmd) => cmd.execute(),
        Command::Skirmish(cmd) => cmd.execute(),
    }
}
