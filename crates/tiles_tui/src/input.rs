//! Keyboard input mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tiles_engine::Position;

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor one cell.
    MoveCursor(KeyCode),
    /// Place the current player's mark under the cursor.
    PlaceAtCursor,
    /// Place the current player's mark at a specific cell.
    PlaceAt(Position),
    /// Start a new game.
    Reset,
    /// Leave the application.
    Quit,
}

/// Maps a key event to an action, ignoring key releases and unbound keys.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::PlaceAt),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(key.code))
        }
        KeyCode::Char('k') => Some(Action::MoveCursor(KeyCode::Up)),
        KeyCode::Char('j') => Some(Action::MoveCursor(KeyCode::Down)),
        KeyCode::Char('h') => Some(Action::MoveCursor(KeyCode::Left)),
        KeyCode::Char('l') => Some(Action::MoveCursor(KeyCode::Right)),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.column());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
