//! noughts - terminal host for the tic-tac-toe core.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod terminal;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::HostConfig;
use noughts_core::{GameHost, GameSession, MoveSelector};
use terminal::TerminalListener;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let config = HostConfig::load_or_default(&cli.config)?.with_overrides(cli.mode, cli.seed);

    run_game(&config)
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,noughts=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip(config), fields(mode = %config.mode()))]
fn run_game(config: &HostConfig) -> Result<()> {
    let selector = match config.seed() {
        Some(seed) => {
            info!(seed, "Using seeded bot");
            MoveSelector::seeded(*seed)
        }
        None => MoveSelector::from_entropy(),
    };

    let session = GameSession::with_selector(*config.mode(), selector);
    let mut host = GameHost::new(session, TerminalListener::new(std::io::stdout()));

    info!("Starting game");
    terminal::run(&mut host, std::io::stdin().lock(), *config.show_help())?;
    info!("Goodbye");
    Ok(())
}
