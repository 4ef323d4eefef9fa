//! Tiles - terminal tic-tac-toe.
//!
//! Wires the [`tiles_engine`] game engine to a ratatui frontend and a sound
//! collaborator that reacts to engine events.
//!
//! # Architecture
//!
//! - **App**: engine plus cursor state, driven by [`Action`]s
//! - **UI**: stateless rendering of an [`App`]
//! - **Audio**: [`SoundBoard`] turns engine events into [`SoundCue`]s
//! - **Replay**: headless play for scripts and quick checks

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod audio;
mod cli;
mod config;
mod input;
mod replay;
mod ui;

pub mod logging;
pub mod terminal;

pub use app::App;
pub use audio::{SoundBoard, SoundCue, Speaker, TerminalBell};
pub use cli::{Cli, Command};
pub use config::{AudioSettings, ConfigError, DEFAULT_CONFIG_FILE, TilesConfig, UiSettings};
pub use input::{Action, action_for, move_cursor};
pub use replay::{render as render_replay, replay};
pub use ui::draw;
