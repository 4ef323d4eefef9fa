//! The game-state engine.

use super::contracts;
use super::event::{GameEvent, GameObserver};
use super::position::Position;
use super::session::SessionState;
use tracing::{debug, info, instrument};

/// Owns the authoritative session and advances it on moves and resets.
///
/// Rejected moves (occupied square, out-of-range index, game already over)
/// are no-ops: the returned state equals the state before the call and no
/// event is emitted.
pub struct GameEngine {
    state: SessionState,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameEngine {
    /// Creates an engine holding the initial session.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: SessionState::new(),
            observers: Vec::new(),
        }
    }

    /// Registers an observer for all subsequent events.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Returns the current session.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Applies the current player's move at cell `index` (0-8).
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, index: usize) -> &SessionState {
        let next = match self.state.play(index) {
            Ok(next) => next,
            Err(e) => {
                debug!(error = %e, "Move ignored");
                return &self.state;
            }
        };
        contracts::assert_transition(&self.state, &next);

        let player = self.state.current_player();
        let position = Position::from_index(index);
        self.state = next;

        if let Some(position) = position {
            debug!(%player, %position, "Move applied");
            self.emit(GameEvent::MoveApplied { player, position });
        }

        if self.state.outcome().is_over() {
            info!(
                outcome = %self.state.outcome(),
                winning_line = ?self.state.winning_line(),
                "Game decided"
            );
            self.emit(GameEvent::OutcomeChanged {
                outcome: self.state.outcome(),
                winning_line: self.state.winning_line(),
            });
        }

        &self.state
    }

    /// Applies the current player's move at `pos`.
    pub fn apply_position(&mut self, pos: Position) -> &SessionState {
        self.apply_move(pos.to_index())
    }

    /// Restores the initial session, whatever the current state.
    #[instrument(skip(self), fields(outcome = %self.state.outcome()))]
    pub fn reset(&mut self) -> &SessionState {
        info!("Resetting game");
        self.state = SessionState::new();
        self.emit(GameEvent::Reset);
        &self.state
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event, &self.state);
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
