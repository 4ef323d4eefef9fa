//! Headless replay of a move list.

use anyhow::{Context, Result};
use tiles_engine::{GameEngine, Position, SessionState};
use tracing::{info, instrument, warn};

/// Plays `moves` on a fresh engine and returns the final state.
///
/// Each move is a cell index (0-8) or a position label. Unparseable or
/// rejected moves are skipped with a warning, the same way the engine
/// ignores them.
#[instrument(skip_all, fields(moves = moves.len()))]
pub fn replay(moves: &[String]) -> SessionState {
    let mut engine = GameEngine::new();

    for (turn, raw) in moves.iter().enumerate() {
        let Some(pos) = Position::from_label_or_number(raw) else {
            warn!(turn, input = %raw, "Not a board cell, skipping");
            continue;
        };
        if let Err(e) = engine.state().check_move(pos.to_index()) {
            warn!(turn, %pos, error = %e, "Move rejected");
            continue;
        }
        engine.apply_position(pos);
    }

    info!(outcome = %engine.state().outcome(), "Replay finished");
    engine.state().clone()
}

/// Renders the final state either as pretty JSON or as a text board.
pub fn render(state: &SessionState, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(state).context("Failed to serialize session state");
    }

    let mut out = state.board().display();
    out.push_str("\n\n");
    out.push_str(&format!("Outcome: {}", state.outcome()));
    if let Some(line) = state.winning_line() {
        out.push_str(&format!(" ({})", line));
    }
    if !state.outcome().is_over() {
        out.push_str(&format!("\nNext: {}", state.current_player()));
    }
    Ok(out)
}
