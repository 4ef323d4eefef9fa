//! Tiles engine - tic-tac-toe game state and rules.
//!
//! The [`GameEngine`] owns one [`SessionState`] and advances it in response
//! to moves and resets. Invalid moves are silently ignored; callers that need
//! the reason can use the pure transition [`SessionState::play`], which
//! reports a [`MoveError`].
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`], [`Position`]
//! - **Rules**: the eight [`WinLine`]s, scanned in fixed order, then the
//!   full-board check
//! - **Engine**: [`GameEngine`] with [`GameEvent`] notifications for
//!   collaborators such as sound playback
//! - **Invariants**: properties every reachable state satisfies
//!
//! # Example
//!
//! ```
//! use tiles_engine::{GameEngine, Outcome, WinLine};
//!
//! let mut engine = GameEngine::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     engine.apply_move(cell);
//! }
//! assert_eq!(engine.state().outcome(), Outcome::XWins);
//! assert_eq!(engine.state().winning_line(), Some(WinLine::TopRow));
//!
//! let fresh = engine.reset();
//! assert_eq!(fresh.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod engine;
mod event;
mod lines;
mod outcome;
mod position;
mod session;
mod types;

pub mod invariants;
pub mod rules;

pub use contracts::check_transition;
pub use engine::GameEngine;
pub use event::{GameEvent, GameObserver};
pub use lines::WinLine;
pub use outcome::Outcome;
pub use position::Position;
pub use session::{MoveError, SessionState};
pub use types::{Board, Player, Square};
