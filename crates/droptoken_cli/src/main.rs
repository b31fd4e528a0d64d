//! Drop Token - terminal driver
//!
//! Interactive play and replay of Drop Token games.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use droptoken_cli::{Cli, Command, PlayConfig, run, run_replay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PlayConfig::load(cli.config.as_deref())?;
    initialize_tracing(config.log_filter());

    match cli.command {
        Command::Play {
            first,
            computer,
            human_only,
            seed,
            json,
        } => {
            let config = config.with_overrides(first, computer, human_only, seed);
            run_play(&config, json)
        }
        Command::Replay { moves, first, json } => {
            let first = first.unwrap_or(*config.first_mover());
            run_replay(first, &moves, json, std::io::stdout().lock())?;
            Ok(())
        }
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &PlayConfig, json: bool) -> Result<()> {
    info!("Starting interactive game");
    let session = run(config, json, std::io::stdin().lock(), std::io::stdout().lock())?;
    info!(status = ?session.current_status(), "Session closed");
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}
