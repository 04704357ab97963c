//! Terminal frontend for rewind tic-tac-toe.
//!
//! # Architecture
//!
//! - **App**: owns the [`GameEngine`](rewind_tictactoe::GameEngine) plus the
//!   selection state of the board and the move list
//! - **UI**: stateless rendering of an [`App`] with ratatui
//! - **Config**: optional `rewind.toml` with logging and display settings
//! - **Replay**: non-interactive text output for a list of moves

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod replay;
mod terminal;
pub mod ui;

pub use app::{App, AppAction, Focus};
pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};
pub use input::move_cursor;
pub use replay::{ReplayError, parse_cells, render_replay, replay_cells};
pub use terminal::{init_tracing, run_tui};
