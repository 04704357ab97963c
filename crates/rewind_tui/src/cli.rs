//! Command-line interface for rewind.

use clap::{Parser, Subcommand};

/// Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (optional; defaults apply if missing)
    #[arg(short, long, global = true, default_value = "rewind.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply moves and print the resulting board, status and move list
    Replay {
        /// Cells to play in order, as indices (0-8) or labels ("center")
        cells: Vec<String>,

        /// Step to view after applying the moves
        #[arg(short, long)]
        jump: Option<usize>,
    },
}
