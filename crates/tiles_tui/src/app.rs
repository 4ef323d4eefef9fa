//! Application state and logic.

use crate::input::{self, Action};
use tiles_engine::{GameEngine, Outcome, Player, Position, SessionState};
use tracing::{debug, instrument};

/// Main application state.
///
/// Holds the engine plus the purely presentational bits (cursor, quit flag)
/// so that input handling can be tested without a terminal.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    show_hints: bool,
    should_quit: bool,
}

impl App {
    /// Creates an application around `engine`.
    pub fn new(engine: GameEngine, show_hints: bool) -> Self {
        Self {
            engine,
            cursor: Position::Center,
            show_hints,
            should_quit: false,
        }
    }

    /// Current session snapshot.
    pub fn state(&self) -> &SessionState {
        self.engine.state()
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the key legend is shown.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// Whether the main loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a user action.
    #[instrument(skip(self), fields(cursor = %self.cursor))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::MoveCursor(key) => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            Action::PlaceAtCursor => {
                self.engine.apply_position(self.cursor);
            }
            Action::PlaceAt(pos) => {
                self.cursor = pos;
                self.engine.apply_position(pos);
            }
            Action::Reset => {
                self.engine.reset();
            }
            Action::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Turn indicator text.
    pub fn turn_text(&self) -> String {
        match self.state().outcome() {
            Outcome::InProgress => format!("Player {}'s turn", self.state().current_player()),
            _ => "Game over".to_string(),
        }
    }

    /// Outcome banner text, present once the game is decided.
    pub fn banner(&self) -> Option<String> {
        match self.state().outcome() {
            Outcome::InProgress => None,
            Outcome::XWins => Some(format!("{} Wins!", Player::X)),
            Outcome::OWins => Some(format!("{} Wins!", Player::O)),
            Outcome::Draw => Some("Draw".to_string()),
        }
    }

    /// Key legend for the current phase.
    pub fn hint_text(&self) -> &'static str {
        if self.state().outcome().is_over() {
            "r: play again   q: quit"
        } else {
            "arrows/hjkl: move   enter/space: place   1-9: place   r: reset   q: quit"
        }
    }

    /// Mark to preview at `pos`: the current player's mark on the empty cell
    /// under the cursor while the game is running.
    pub fn preview_at(&self, pos: Position) -> Option<Player> {
        let state = self.state();
        (pos == self.cursor && !state.outcome().is_over() && state.board().is_empty(pos))
            .then(|| state.current_player())
    }

    /// Whether `pos` belongs to the line that decided the game.
    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.state()
            .winning_line()
            .is_some_and(|line| line.contains(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SoundBoard;
    use crate::audio::tests::{Call, RecordingSpeaker};
    use crate::config::AudioSettings;
    use crossterm::event::KeyCode;

    fn app() -> App {
        App::new(GameEngine::new(), true)
    }

    #[test]
    fn test_starts_with_cursor_in_center() {
        let app = app();
        assert_eq!(app.cursor(), Position::Center);
        assert_eq!(app.turn_text(), "Player X's turn");
        assert_eq!(app.banner(), None);
    }

    #[test]
    fn test_place_at_cursor_after_moving() {
        let mut app = app();
        app.handle(Action::MoveCursor(KeyCode::Up));
        app.handle(Action::MoveCursor(KeyCode::Left));
        app.handle(Action::PlaceAtCursor);

        assert_eq!(app.state().board().get(Position::TopLeft).player(), Some(Player::X));
        assert_eq!(app.turn_text(), "Player O's turn");
    }

    #[test]
    fn test_digit_moves_cursor_and_places() {
        let mut app = app();
        app.handle(Action::PlaceAt(Position::BottomRight));
        assert_eq!(app.cursor(), Position::BottomRight);
        assert_eq!(app.state().board().filled(), 1);
    }

    #[test]
    fn test_win_banner_and_cells() {
        let mut app = app();
        for i in [0, 3, 1, 4, 2] {
            app.handle(Action::PlaceAt(Position::from_index(i).unwrap()));
        }
        assert_eq!(app.banner().as_deref(), Some("X Wins!"));
        assert_eq!(app.turn_text(), "Game over");
        assert!(app.is_winning_cell(Position::TopCenter));
        assert!(!app.is_winning_cell(Position::Center));
        assert_eq!(app.hint_text(), "r: play again   q: quit");
    }

    #[test]
    fn test_draw_banner() {
        let mut app = app();
        for i in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            app.handle(Action::PlaceAt(Position::from_index(i).unwrap()));
        }
        assert_eq!(app.banner().as_deref(), Some("Draw"));
    }

    #[test]
    fn test_preview_only_on_empty_cursor_cell() {
        let mut app = app();
        assert_eq!(app.preview_at(Position::Center), Some(Player::X));
        assert_eq!(app.preview_at(Position::TopLeft), None);

        app.handle(Action::PlaceAtCursor);
        assert_eq!(app.preview_at(Position::Center), None);
    }

    #[test]
    fn test_reset_and_quit() {
        let speaker = RecordingSpeaker::default();
        let calls = speaker.calls.clone();
        let mut engine = GameEngine::new();
        engine.subscribe(SoundBoard::new(speaker, AudioSettings::default()));
        let mut app = App::new(engine, false);

        app.handle(Action::PlaceAtCursor);
        app.handle(Action::Reset);
        assert_eq!(app.state(), &SessionState::new());
        assert_eq!(calls.borrow().first(), Some(&Call::Play(crate::SoundCue::Click, 0.5)));

        assert!(!app.should_quit());
        app.handle(Action::Quit);
        assert!(app.should_quit());
    }
}
