//! Rewind tic-tac-toe - game rules with move history and time travel
//!
//! The engine keeps every board snapshot of the game so a caller can jump
//! back to any recorded step. Making a move from a past step discards the
//! steps that followed it (branch-on-write).
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameEngine, Player};
//!
//! let mut engine = GameEngine::new();
//! engine.apply_move(0);
//! engine.apply_move(4);
//! assert_eq!(engine.current_player(), Player::X);
//!
//! engine.jump_to(1);
//! assert_eq!(engine.current_player(), Player::O);
//! assert_eq!(engine.status().to_string(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{IgnoreReason, Move, MoveOutcome};
pub use engine::{GameEngine, GameStatus};
pub use history::{GameState, HistoryEntry, InvalidGameState, MoveDescriptor};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, RewindInvariants};
pub use position::Position;
pub use types::{Board, Player, Square};
