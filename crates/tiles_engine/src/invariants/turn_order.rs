//! Turn order invariant: the player to move follows from the mark counts.

use super::super::{Player, SessionState};
use super::Invariant;

/// Invariant: `current_player` is consistent with the board.
///
/// While the game is in progress X is to move exactly when both players
/// have placed the same number of marks. Once it is over the current player
/// is frozen on whoever made the final move.
pub struct TurnOrderInvariant;

impl Invariant<SessionState> for TurnOrderInvariant {
    fn holds(state: &SessionState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);

        let expected = if state.outcome().is_over() {
            if x > o { Player::X } else { Player::O }
        } else if x == o {
            Player::X
        } else {
            Player::O
        };

        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
