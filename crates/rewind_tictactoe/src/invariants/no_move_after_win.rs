//! Win invariant: nothing is recorded on top of a won board.

use super::Invariant;
use crate::GameState;
use crate::rules::check_winner;

/// Invariant: only the last history entry may show a winner.
pub struct NoMoveAfterWinInvariant;

impl Invariant<GameState> for NoMoveAfterWinInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        let Some((_, earlier)) = history.split_last() else {
            return true;
        };
        earlier
            .iter()
            .all(|entry| check_winner(entry.board()).is_none())
    }

    fn description() -> &'static str {
        "No move is recorded after a winning board"
    }
}
