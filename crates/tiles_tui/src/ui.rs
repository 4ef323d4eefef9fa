//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tiles_engine::{Player, Position, Square};

use crate::app::App;

const BOARD_WIDTH: u16 = 40;
const BOARD_HEIGHT: u16 = 11;

/// Renders the whole screen from application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Turn indicator
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3), // Outcome banner
            Constraint::Length(1), // Hints
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let turn = Paragraph::new(app.turn_text())
        .style(Style::default().fg(turn_color(app)))
        .alignment(Alignment::Center);
    frame.render_widget(turn, chunks[1]);

    draw_board(frame, chunks[2], app);
    draw_banner(frame, chunks[3], app);

    if app.show_hints() {
        let hints = Paragraph::new(app.hint_text())
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hints, chunks[4]);
    }
}

fn turn_color(app: &App) -> Color {
    if app.state().outcome().is_over() {
        Color::DarkGray
    } else {
        player_color(app.state().current_player())
    }
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    }
}

fn draw_banner(frame: &mut Frame, area: Rect, app: &App) {
    let Some(banner) = app.banner() else {
        return;
    };

    let mut text = vec![Span::styled(
        banner,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(line) = app.state().winning_line() {
        text.push(Span::styled(
            format!("  ({})", line),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(text))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

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
        draw_row(frame, area, app, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
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
            draw_cell(frame, area, app, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (symbol, base_style) = match app.state().board().get(pos) {
        Square::Occupied(player) => (
            format!(" {} ", player),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
        Square::Empty => match app.preview_at(pos) {
            Some(player) => (
                format!(" {} ", player),
                Style::default().fg(Color::DarkGray),
            ),
            None => ("   ".to_string(), Style::default()),
        },
    };

    let style = if app.is_winning_cell(pos) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == app.cursor() {
        base_style.bg(Color::White)
    } else {
        base_style
    };

    // Vertically center the symbol in the 3-line cell.
    let text = vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
        Line::default(),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(BOARD_WIDTH as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); 3]).style(Style::default().fg(Color::DarkGray));
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
