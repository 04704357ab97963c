//! Application state and logic.

use crossterm::event::KeyCode;
use rewind_tictactoe::{GameEngine, MoveOutcome, Position};
use tracing::{debug, instrument};

use crate::input::{digit_cell, move_cursor};

const START_MESSAGE: &str = "Player X's turn. Press 1-9 or Enter to move.";

/// Which panel receives the navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the application.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    engine: GameEngine,
    board_cursor: Position,
    selected_step: usize,
    focus: Focus,
    status_message: String,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
            board_cursor: Position::Center,
            selected_step: 0,
            focus: Focus::Board,
            status_message: START_MESSAGE.to_string(),
        }
    }

    /// Gets the game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the highlighted board square.
    pub fn board_cursor(&self) -> Position {
        self.board_cursor
    }

    /// Gets the highlighted move-list row.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Gets the focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the current feedback message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char(c) => match digit_cell(c) {
                Some(cell) => self.make_move(cell),
                None => self.handle_focused_key(key),
            },
            code => self.handle_focused_key(code),
        }
        AppAction::Continue
    }

    fn handle_focused_key(&mut self, key: KeyCode) {
        match self.focus {
            Focus::Board => self.handle_board_key(key),
            Focus::History => self.handle_history_key(key),
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.make_move(self.board_cursor.to_index()),
            code => self.board_cursor = move_cursor(self.board_cursor, code),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let last = self.engine.history_len() - 1;
        match key {
            KeyCode::Up => self.selected_step = self.selected_step.saturating_sub(1),
            KeyCode::Down => self.selected_step = (self.selected_step + 1).min(last),
            KeyCode::Home => self.selected_step = 0,
            KeyCode::End => self.selected_step = last,
            KeyCode::Enter | KeyCode::Char(' ') => self.jump_to(self.selected_step),
            _ => {}
        }
    }

    /// Makes a move at the given cell (0-8).
    #[instrument(skip(self))]
    pub fn make_move(&mut self, cell: usize) {
        debug!(cell, "Making move");

        match self.engine.apply_move(cell) {
            MoveOutcome::Applied(mov) => {
                self.status_message = format!("{} played {}", mov.player, mov.position.label());
                self.board_cursor = mov.position;
            }
            MoveOutcome::Ignored(reason) => {
                self.status_message = format!("{}. Try again.", reason);
            }
        }
        self.selected_step = self.engine.cursor();
    }

    /// Jumps to a recorded step.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        debug!(step, "Jumping to step");
        self.engine.jump_to(step);
        self.selected_step = step;
        self.status_message = if step == 0 {
            "Back at game start".to_string()
        } else {
            format!("Viewing move #{}", step)
        };
    }

    /// Switches focus between the board and the move list.
    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
        if self.focus == Focus::History {
            self.selected_step = self.engine.cursor();
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        *self = Self {
            focus: self.focus,
            ..Self::new()
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
