//! First-class invariants for tic-tac-toe sessions.
//!
//! Invariants are logical properties of a [`SessionState`](crate::SessionState) that every
//! reachable state satisfies. The engine checks them after each accepted
//! move in debug builds; tests use them directly.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

pub mod balanced_marks;
pub mod outcome_consistent;
pub mod turn_order;

pub use balanced_marks::BalancedMarksInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;
pub use turn_order::TurnOrderInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    BalancedMarksInvariant,
    TurnOrderInvariant,
    OutcomeConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SessionState;

    #[test]
    fn test_invariant_set_holds_for_initial_state() {
        assert!(SessionInvariants::check_all(&SessionState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let state = SessionState::new()
            .play(0)
            .and_then(|s| s.play(4))
            .and_then(|s| s.play(2))
            .unwrap();
        assert!(SessionInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (BalancedMarksInvariant, TurnOrderInvariant);
        assert!(TwoInvariants::check_all(&SessionState::new()).is_ok());
    }
}
