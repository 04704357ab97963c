//! Rewind - tic-tac-toe with time travel in the terminal.

use anyhow::Result;
use clap::Parser;
use rewind_tui::{Cli, Command, TuiConfig};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load_or_default(&cli.config)?;
    rewind_tui::init_tracing(&config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => rewind_tui::run_tui(&config),
        Command::Replay { cells, jump } => run_replay(&cells, jump),
    }
}

/// Prints the game reached by `cells`.
fn run_replay(cells: &[String], jump: Option<usize>) -> Result<()> {
    info!(moves = cells.len(), ?jump, "Replaying moves");

    let cells = rewind_tui::parse_cells(cells)?;
    let engine = rewind_tui::replay_cells(&cells, jump)?;
    print!("{}", rewind_tui::render_replay(&engine));

    Ok(())
}
