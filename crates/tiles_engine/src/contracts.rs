//! Postconditions for move transitions.

use super::invariants::{InvariantSet, SessionInvariants};
use super::SessionState;
use tracing::warn;

/// Checks that a transition wrote exactly one mark and kept every
/// session invariant.
pub fn check_transition(before: &SessionState, after: &SessionState) -> Result<(), String> {
    let written = before
        .board()
        .squares()
        .iter()
        .zip(after.board().squares())
        .filter(|(b, a)| b != a)
        .count();
    if written != 1 || after.board().filled() != before.board().filled() + 1 {
        return Err(format!("expected one new mark, found {written} changed squares"));
    }

    SessionInvariants::check_all(after).map_err(|violations| {
        violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    })
}

/// Asserts the transition postconditions in debug builds.
pub(crate) fn assert_transition(before: &SessionState, after: &SessionState) {
    if !cfg!(debug_assertions) {
        return;
    }
    let result = check_transition(before, after);
    if let Err(reason) = &result {
        warn!(%reason, "Postcondition failed");
    }
    debug_assert!(result.is_ok(), "Postcondition failed: {result:?}");
}
