//! tictactoe_history - Unified CLI
//!
//! Runs the terminal game or replays a scripted one.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe_history::{DEFAULT_CONFIG_PATH, GameView, TuiConfig, replay, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        None => run_tui(None, false),
        Some(Command::Tui { config, descending }) => run_tui(config, descending),
        Some(Command::Replay {
            cells,
            jump,
            descending,
            json,
        }) => run_replay(&cells, jump, descending, json),
    }
}

/// Run the terminal game
fn run_tui(config_path: Option<PathBuf>, descending: bool) -> Result<()> {
    let config = match config_path {
        Some(path) => TuiConfig::from_file(&path),
        None => TuiConfig::load_or_default(DEFAULT_CONFIG_PATH),
    }
    .context("Failed to load configuration")?;

    let config = if descending {
        config.with_sort_ascending(false)
    } else {
        config
    };

    tui::run(config)
}

/// Replay cells on a fresh board and print the resulting view
#[instrument]
fn run_replay(cells: &[u8], jump: Option<usize>, descending: bool, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(moves = cells.len(), "Replaying game");
    let game = replay(cells, jump, !descending)?;

    let view = GameView::new(&game);
    if json {
        let out = serde_json::to_string_pretty(&view).context("Failed to serialize view")?;
        println!("{out}");
    } else {
        print!("{}", view.render_text());
    }

    Ok(())
}
