//! Cursor invariant: history is non-empty and the cursor points into it.

use super::Invariant;
use crate::GameState;

/// Invariant: the cursor indexes an existing history entry.
///
/// Implies the history is never empty.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.cursor < state.history.len()
    }

    fn description() -> &'static str {
        "Cursor indexes an existing history entry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameEngine;

    #[test]
    fn test_new_game_holds() {
        assert!(CursorInBoundsInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_after_jump() {
        let mut engine = GameEngine::replay(&[0, 1]);
        engine.jump_to(0);
        assert!(CursorInBoundsInvariant::holds(engine.state()));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let mut state = GameState::new();
        state.cursor = 1;
        assert!(!CursorInBoundsInvariant::holds(&state));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut state = GameState::new();
        state.history.clear();
        assert!(!CursorInBoundsInvariant::holds(&state));
    }
}
