//! Command-line interface for noughts.

use clap::Parser;
use noughts_core::GameMode;
use std::path::PathBuf;

/// noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against a friend or a bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game mode: local, bot-easy or bot-medium (overrides the config file)
    #[arg(short, long)]
    pub mode: Option<GameMode>,

    /// Seed for the bot, for reproducible games (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to the TOML config file
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,
}
