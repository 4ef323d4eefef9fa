//! Balanced marks invariant: X leads O by at most one mark.

use super::super::{Player, SessionState};
use super::Invariant;

/// Invariant: the board holds as many X marks as O marks, or one more X.
///
/// X moves first and exactly one mark is written per accepted move.
pub struct BalancedMarksInvariant;

impl Invariant<SessionState> for BalancedMarksInvariant {
    fn holds(state: &SessionState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X marks equal O marks or lead by one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_through_a_game() {
        let mut state = SessionState::new();
        for i in [4, 0, 8, 2, 1] {
            state = state.play(i).unwrap();
            assert!(BalancedMarksInvariant::holds(&state));
        }
    }
}
