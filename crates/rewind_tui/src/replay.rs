//! Non-interactive replay of a move list.

use derive_more::{Display, Error};
use rewind_tictactoe::{GameEngine, MoveOutcome, Position};
use tracing::{info, instrument, warn};

/// Replay input error.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// A cell was neither an index 0-8 nor a position label.
    #[display("Unknown cell {:?} (use 0-8 or a label like \"center\")", _0)]
    UnknownCell(#[error(not(source))] String),

    /// The requested step was never recorded.
    #[display("Step {} out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of recorded entries.
        len: usize,
    },
}

/// Parses cell arguments into board indices.
#[instrument]
pub fn parse_cells(cells: &[String]) -> Result<Vec<usize>, ReplayError> {
    cells
        .iter()
        .map(|cell| {
            Position::from_label_or_number(cell)
                .map(Position::to_index)
                .ok_or_else(|| ReplayError::UnknownCell(cell.clone()))
        })
        .collect()
}

/// Applies `cells` to a new game, then jumps to `jump` if given.
#[instrument]
pub fn replay_cells(cells: &[usize], jump: Option<usize>) -> Result<GameEngine, ReplayError> {
    let mut engine = GameEngine::new();
    for &cell in cells {
        if let MoveOutcome::Ignored(reason) = engine.apply_move(cell) {
            warn!(cell, %reason, "Move ignored during replay");
        }
    }

    if let Some(step) = jump {
        if step >= engine.history_len() {
            return Err(ReplayError::StepOutOfRange {
                step,
                len: engine.history_len(),
            });
        }
        engine.jump_to(step);
    }

    info!(len = engine.history_len(), cursor = engine.cursor(), "Replay finished");
    Ok(engine)
}

/// Formats the viewed board, its status and the move list.
///
/// The viewed step is marked with `>` in the move list.
pub fn render_replay(engine: &GameEngine) -> String {
    let mut out = format!("{}\n\n{}\n\n", engine.current_board(), engine.status());
    for descriptor in engine.move_list() {
        let marker = if descriptor.step == engine.cursor() { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, descriptor.label));
    }
    out
}
