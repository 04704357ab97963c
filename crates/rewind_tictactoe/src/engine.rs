//! Game engine for tic-tac-toe with time travel.

use super::action::{IgnoreReason, Move, MoveOutcome};
use super::history::{GameState, HistoryEntry, MoveDescriptor};
use super::rules::check_winner;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Human-facing summary of the viewed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// The viewed board has a completed line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Nobody has won on the viewed board.
    ///
    /// Also reported for a full board: draws are not detected.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// Tic-tac-toe game engine.
///
/// Owns the game history and a cursor into it. Every query answers for the
/// step under the cursor, which is not necessarily the latest one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Builds a game by applying cell indices in order.
    ///
    /// Moves the rules reject are skipped, exactly as [`apply_move`](Self::apply_move)
    /// would skip them.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Self {
        let mut engine = Self::new();
        for &cell in cells {
            engine.apply_move(cell);
        }
        engine
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Makes a move at the given cell index (0-8).
    ///
    /// # Panics
    ///
    /// Panics if `cell_index` is greater than 8.
    #[instrument(skip(self), fields(cursor = self.state.cursor))]
    pub fn apply_move(&mut self, cell_index: usize) -> MoveOutcome {
        let Some(pos) = Position::from_index(cell_index) else {
            panic!("cell index {} out of range (must be 0-8)", cell_index);
        };
        self.place(pos)
    }

    /// Makes a move at the given position.
    ///
    /// The move is made by whoever's turn it is at the cursor. If the viewed
    /// board already has a winner, or the square is taken, nothing changes.
    /// Otherwise any history after the cursor is discarded and the new board
    /// becomes the latest step.
    #[instrument(skip(self), fields(cursor = self.state.cursor))]
    pub fn place(&mut self, pos: Position) -> MoveOutcome {
        let board = *self.current_board();

        if check_winner(&board).is_some() {
            debug!("Ignoring move, game is already over");
            return MoveOutcome::Ignored(IgnoreReason::GameOver);
        }
        if !board.is_empty(pos) {
            debug!("Ignoring move, square is occupied");
            return MoveOutcome::Ignored(IgnoreReason::SquareOccupied(pos));
        }

        let mov = Move::new(self.current_player(), pos);
        self.state.branch(HistoryEntry::after(&board, mov));
        info!(%mov, step = self.state.cursor, "Move applied");

        #[cfg(debug_assertions)]
        {
            use super::invariants::{InvariantSet, RewindInvariants};
            if let Err(violations) = RewindInvariants::check_all(&self.state) {
                panic!("invariants violated after {}: {:?}", mov, violations);
            }
        }

        MoveOutcome::Applied(mov)
    }

    /// Moves the cursor to a recorded step without touching history.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not a recorded step.
    #[instrument(skip(self), fields(len = self.state.history.len()))]
    pub fn jump_to(&mut self, step: usize) {
        assert!(
            step < self.state.history.len(),
            "step {} out of range (history has {} entries)",
            step,
            self.state.history.len()
        );
        self.state.cursor = step;
        debug!("Cursor moved");
    }

    /// Returns the board at the cursor.
    pub fn current_board(&self) -> &Board {
        self.state.current().board()
    }

    /// Returns the player to move at the cursor.
    pub fn current_player(&self) -> Player {
        self.state.to_move()
    }

    /// Returns the winner on the board at the cursor.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.current_board())
    }

    /// Returns the status line for the cursor.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Winner(player),
            None => GameStatus::NextPlayer(self.current_player()),
        }
    }

    /// Returns one descriptor per recorded step, in step order.
    pub fn move_list(&self) -> Vec<MoveDescriptor> {
        (0..self.state.history.len())
            .map(MoveDescriptor::for_step)
            .collect()
    }

    /// Returns all recorded entries.
    pub fn history(&self) -> &[HistoryEntry] {
        self.state.history()
    }

    /// Returns the number of recorded entries.
    pub fn history_len(&self) -> usize {
        self.state.history.len()
    }

    /// Returns the viewed step.
    pub fn cursor(&self) -> usize {
        self.state.cursor
    }

    /// Returns true if the cursor is at the latest step.
    pub fn is_latest(&self) -> bool {
        self.state.cursor + 1 == self.state.history.len()
    }

    /// Returns positions a move could be made on at the cursor.
    ///
    /// Empty once the viewed board has a winner.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.winner().is_some() {
            return Vec::new();
        }
        Position::valid_moves(self.current_board())
    }
}
