//! Stateless UI rendering for the game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{Board, Player, Position, Square};

use crate::{App, Focus, TuiConfig};

const HINTS: &str = "1-9/Enter: move  Tab: switch panel  ↑↓: select  r: restart  q: quit";

/// Draws the whole application.
pub fn draw(frame: &mut Frame, app: &App, config: &TuiConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board and move list
            Constraint::Length(4), // Status
            Constraint::Length(1), // Hints
        ])
        .split(frame.area());

    draw_title(frame, chunks[0], app);

    if *config.show_move_list() {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(28)])
            .split(chunks[1]);
        draw_board(frame, body[0], app);
        draw_move_list(frame, body[1], app);
    } else {
        draw_board(frame, chunks[1], app);
    }

    draw_status(frame, chunks[2], app);

    if *config.show_hints() {
        let hints = Paragraph::new(HINTS)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hints, chunks[3]);
    }
}

fn draw_title(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    let mut text = String::from("Rewind - Tic Tac Toe");
    if !engine.is_latest() {
        text.push_str(&format!(
            " (viewing step {} of {})",
            engine.cursor(),
            engine.history_len() - 1
        ));
    }

    let title = Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board = app.engine().current_board();
    let cursor = (app.focus() == Focus::Board).then_some(app.board_cursor());
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, area, board, cursor, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Position>, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_index(row * 3 + col) {
            let square = render_square(board.get(pos), pos, cursor == Some(pos));
            frame.render_widget(square, area);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

/// Renders one square from its value.
///
/// Empty squares show their key (1-9) dimmed; the highlighted square is
/// drawn inverted.
pub fn render_square(square: Square, pos: Position, highlighted: bool) -> Paragraph<'static> {
    let (symbol, base_style) = match square {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlighted {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    Paragraph::new(Line::from(Span::styled(format!(" {} ", symbol), style)))
        .alignment(Alignment::Center)
}

fn draw_move_list(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    let items: Vec<ListItem> = engine
        .move_list()
        .into_iter()
        .map(|descriptor| {
            let style = if descriptor.step == engine.cursor() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(descriptor.label, style)))
        })
        .collect();

    let border_style = if app.focus() == Focus::History {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title("Moves")
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected_step()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let text = vec![
        Line::from(app.engine().status().to_string()),
        Line::from(Span::styled(
            app.status_message().to_string(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let status = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
