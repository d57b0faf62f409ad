//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictac_core::Position;

/// Console tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictac.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play,

    /// Replay a list of positions (1-9) and print the result
    Replay {
        /// Positions in play order, X first
        #[arg(required = true)]
        moves: Vec<Position>,

        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Returns the subcommand, falling back to `play`.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Play)
    }
}
