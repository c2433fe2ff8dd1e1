//! Command-line interface for tictactoe_history.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_history")]
#[command(about = "Terminal tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run; defaults to the terminal UI
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Tui {
        /// Path to the TOML config file [default: tictactoe.toml, if present]
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// List history newest first
        #[arg(long)]
        descending: bool,
    },

    /// Play the given cells on a fresh board and print the result
    Replay {
        /// Cell indices 0-8, row-major, played in order
        #[arg(value_parser = clap::value_parser!(u8).range(0..9))]
        cells: Vec<u8>,

        /// Jump to this step before printing
        #[arg(long)]
        jump: Option<usize>,

        /// List history newest first
        #[arg(long)]
        descending: bool,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
