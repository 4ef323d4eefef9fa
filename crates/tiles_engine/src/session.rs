//! Session state and the pure move transition.

use super::lines::WinLine;
use super::outcome::Outcome;
use super::position::Position;
use super::rules;
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Reason a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game already has an outcome.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The cell index is not on the board.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),
}

impl std::error::Error for MoveError {}

/// Everything collaborators need to render one game session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SessionState {
    board: Board,
    current_player: Player,
    outcome: Outcome,
    winning_line: Option<WinLine>,
}

impl SessionState {
    /// The canonical initial state: empty board, X to move, in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next accepted move writes.
    ///
    /// Once the game is over this stays on the player who made the final
    /// move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the line that decided the game, if any.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    /// Checks the preconditions of a move at `index`.
    #[instrument(skip(self), fields(outcome = ?self.outcome))]
    pub fn check_move(&self, index: usize) -> Result<Position, MoveError> {
        if self.outcome.is_over() {
            return Err(MoveError::GameOver(self.outcome));
        }
        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        Ok(pos)
    }

    /// Returns the state after the current player marks `index`.
    ///
    /// `self` is left untouched. The mark is written, the board is scanned
    /// for a completed line and then for a full board, and the turn passes
    /// only if the game is still in progress. A line completed by the
    /// board-filling move is a win, not a draw.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&self, index: usize) -> Result<SessionState, MoveError> {
        let pos = self.check_move(index)?;

        let mut next = self.clone();
        next.board.set(pos, Square::Occupied(self.current_player));

        if let Some((winner, line)) = rules::check_winner(&next.board) {
            next.outcome = Outcome::win_for(winner);
            next.winning_line = Some(line);
        } else if rules::is_full(&next.board) {
            next.outcome = Outcome::Draw;
        }

        if !next.outcome.is_over() {
            next.current_player = self.current_player.opponent();
        }

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(moves: &[usize]) -> SessionState {
        moves
            .iter()
            .fold(SessionState::new(), |state, &i| state.play(i).expect("legal move"))
    }

    #[test]
    fn test_initial_state() {
        let state = SessionState::new();
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_play_leaves_receiver_untouched() {
        let state = SessionState::new();
        let next = state.play(4).unwrap();
        assert_eq!(state, SessionState::new());
        assert_eq!(next.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(next.current_player(), Player::O);
    }

    #[test]
    fn test_rejections() {
        let state = play_all(&[4]);
        assert_eq!(state.play(4), Err(MoveError::SquareOccupied(Position::Center)));
        assert_eq!(state.play(9), Err(MoveError::OutOfRange(9)));

        let won = play_all(&[0, 3, 1, 4, 2]);
        assert_eq!(won.play(8), Err(MoveError::GameOver(Outcome::XWins)));
    }

    #[test]
    fn test_winner_keeps_turn() {
        let won = play_all(&[0, 3, 1, 4, 2]);
        assert_eq!(won.outcome(), Outcome::XWins);
        assert_eq!(won.current_player(), Player::X);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(
            MoveError::GameOver(Outcome::Draw).to_string(),
            "Game is already over (Draw)"
        );
    }
}
