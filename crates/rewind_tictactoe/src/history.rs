//! Board history and the cursor that selects the viewed step.

use super::invariants::{InvariantSet, InvariantViolation, RewindInvariants};
use super::{Board, Move, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One recorded board snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    last_move: Option<Move>,
}

impl HistoryEntry {
    /// The entry every game starts from: an empty board, no move.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Records the board produced by `mov` on top of `previous`.
    pub fn after(previous: &Board, mov: Move) -> Self {
        Self {
            board: previous.with_mark(mov.position, mov.player),
            last_move: Some(mov),
        }
    }

    /// Returns the board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move that produced this entry (`None` for game start).
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }
}

/// A row of the move list: a history step and the text to show for it.
///
/// `step` doubles as a stable key because history is only ever appended to
/// or truncated from the end.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct MoveDescriptor {
    /// History index this row jumps to.
    pub step: usize,
    /// Display label.
    pub label: String,
}

impl MoveDescriptor {
    /// Builds the descriptor for a history step.
    pub fn for_step(step: usize) -> Self {
        let label = if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        };
        Self::new(step, label)
    }
}

/// Complete game state: every recorded board plus the viewed step.
///
/// `history` is never empty and `cursor` always indexes into it. Whose turn
/// it is follows from the parity of `cursor` and is not stored.
///
/// Deserialization checks [`RewindInvariants`] and rejects any state that
/// could not have come from play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) cursor: usize,
}

impl GameState {
    /// Creates the state of a fresh game.
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            cursor: 0,
        }
    }

    /// Returns all recorded entries, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the viewed step.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the entry at the cursor.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.cursor]
    }

    /// Returns the player to move at the cursor.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.cursor)
    }

    /// Drops every entry after the cursor, appends `entry` and moves the
    /// cursor onto it.
    #[instrument(skip(self, entry), fields(cursor = self.cursor, len = self.history.len()))]
    pub(crate) fn branch(&mut self, entry: HistoryEntry) {
        let discarded = self.history.len() - (self.cursor + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future history");
        }
        self.history.truncate(self.cursor + 1);
        self.history.push(entry);
        self.cursor = self.history.len() - 1;
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<HistoryEntry>,
    cursor: usize,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvalidGameState;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            history: raw.history,
            cursor: raw.cursor,
        };
        RewindInvariants::check_all(&state).map_err(InvalidGameState::new)?;
        Ok(state)
    }
}

/// A deserialized game state broke one or more invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error)]
pub struct InvalidGameState {
    /// Every violated invariant.
    #[error(not(source))]
    pub violations: Vec<InvariantViolation>,
}

impl InvalidGameState {
    fn new(violations: Vec<InvariantViolation>) -> Self {
        Self { violations }
    }
}

impl std::fmt::Display for InvalidGameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid game state")?;
        for (i, violation) in self.violations.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{}", sep, violation.description)?;
        }
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
