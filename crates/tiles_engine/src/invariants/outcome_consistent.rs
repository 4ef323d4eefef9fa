//! Outcome consistency invariant: the recorded outcome matches the board.

use super::super::{Outcome, SessionState, rules};
use super::Invariant;

/// Invariant: outcome and winning line agree with what the board shows.
///
/// - in progress: no owned line, board not full, no winning line
/// - win: the recorded line is the first owned line and belongs to the winner
/// - draw: board full, no owned line, no winning line
pub struct OutcomeConsistentInvariant;

impl Invariant<SessionState> for OutcomeConsistentInvariant {
    fn holds(state: &SessionState) -> bool {
        let found = rules::check_winner(state.board());
        let full = rules::is_full(state.board());

        match state.outcome() {
            Outcome::InProgress => found.is_none() && !full && state.winning_line().is_none(),
            Outcome::XWins | Outcome::OWins => match (found, state.winning_line()) {
                (Some((player, line)), Some(recorded)) => {
                    Outcome::win_for(player) == state.outcome() && line == recorded
                }
                _ => false,
            },
            Outcome::Draw => found.is_none() && full && state.winning_line().is_none(),
        }
    }

    fn description() -> &'static str {
        "Outcome and winning line match the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_for_win_and_draw() {
        let mut won = SessionState::new();
        for i in [0, 3, 1, 4, 2] {
            won = won.play(i).unwrap();
        }
        assert!(OutcomeConsistentInvariant::holds(&won));

        let mut drawn = SessionState::new();
        for i in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            drawn = drawn.play(i).unwrap();
        }
        assert_eq!(drawn.outcome(), Outcome::Draw);
        assert!(OutcomeConsistentInvariant::holds(&drawn));
    }
}
