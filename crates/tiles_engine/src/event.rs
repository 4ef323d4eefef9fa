//! Notifications emitted by the engine.
//!
//! Collaborators such as sound playback subscribe to these instead of
//! watching the session for changes.

use super::lines::WinLine;
use super::outcome::Outcome;
use super::position::Position;
use super::session::SessionState;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// Something observable happened to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was written to the board.
    MoveApplied {
        /// The player whose mark was written.
        player: Player,
        /// Where it was written.
        position: Position,
    },
    /// The outcome left in-progress. Emitted after the `MoveApplied` of the
    /// deciding move.
    OutcomeChanged {
        /// The new outcome.
        outcome: Outcome,
        /// The deciding line, absent for a draw.
        winning_line: Option<WinLine>,
    },
    /// The session was restored to its initial state.
    Reset,
}

/// Receives engine events together with the state they produced.
pub trait GameObserver {
    /// Called once per event, in emission order.
    fn on_event(&mut self, event: &GameEvent, state: &SessionState);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent, &SessionState),
{
    fn on_event(&mut self, event: &GameEvent, state: &SessionState) {
        self(event, state)
    }
}
