//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board). The engine calls
//! these on whichever snapshot the cursor points at.

pub mod win;

pub use win::{WINNING_LINES, check_winner};
