//! Step invariant: each history entry adds exactly one mark.

use super::Invariant;
use crate::{GameState, HistoryEntry, Player, Square};

/// Invariant: every entry after the first differs from its predecessor in
/// exactly one square, which went from empty to the mark of the player whose
/// turn it was.
///
/// The first entry is the empty board. Since marks are only ever added,
/// no filled square is overwritten.
pub struct SingleMarkPerStepInvariant;

impl SingleMarkPerStepInvariant {
    fn step_holds(step: usize, before: &HistoryEntry, after: &HistoryEntry) -> bool {
        let expected = Square::Occupied(Player::for_step(step));
        let changed: Vec<usize> = (0..9)
            .filter(|&i| before.board().squares()[i] != after.board().squares()[i])
            .collect();

        let [index] = changed.as_slice() else {
            return false;
        };
        let marked = before.board().squares()[*index].is_empty()
            && after.board().squares()[*index] == expected;

        let recorded = after.last_move().is_some_and(|mov| {
            mov.position.to_index() == *index && mov.player == Player::for_step(step)
        });

        marked && recorded
    }
}

impl Invariant<GameState> for SingleMarkPerStepInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if let Some(first) = history.first()
            && *first != HistoryEntry::initial()
        {
            return false;
        }

        history
            .windows(2)
            .enumerate()
            .all(|(step, pair)| Self::step_holds(step, &pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each step adds exactly one mark for the player whose turn it was"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameEngine, Move, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(SingleMarkPerStepInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_played_game_holds() {
        let engine = GameEngine::replay(&[4, 0, 8, 2, 1, 7]);
        assert!(SingleMarkPerStepInvariant::holds(engine.state()));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut state = GameState::new();
        let first = HistoryEntry::after(&Board::new(), Move::new(Player::X, Position::TopLeft));
        let second = HistoryEntry::after(first.board(), Move::new(Player::X, Position::Center));
        state.history.push(first);
        state.history.push(second);

        assert!(!SingleMarkPerStepInvariant::holds(&state));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut state = GameState::new();
        let first = HistoryEntry::after(&Board::new(), Move::new(Player::X, Position::Center));
        let second = HistoryEntry::after(first.board(), Move::new(Player::O, Position::Center));
        state.history.push(first);
        state.history.push(second);

        assert!(!SingleMarkPerStepInvariant::holds(&state));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let mut state = GameState::new();
        state.history[0] =
            HistoryEntry::after(&Board::new(), Move::new(Player::X, Position::Center));

        assert!(!SingleMarkPerStepInvariant::holds(&state));
    }
}
