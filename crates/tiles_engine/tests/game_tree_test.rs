//! Exhaustive checks over every reachable game.
//!
//! Walks all move orders from the empty board and checks the engine
//! properties at every node.

use tiles_engine::invariants::{InvariantSet, SessionInvariants};
use tiles_engine::{GameEngine, Outcome, Player, SessionState, check_transition};

#[derive(Default)]
struct Totals {
    games: usize,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

fn walk(state: &SessionState, accepted: usize, totals: &mut Totals) {
    assert_eq!(state.board().filled(), accepted);
    assert!(SessionInvariants::check_all(state).is_ok());

    if state.outcome().is_over() {
        totals.games += 1;
        match state.outcome() {
            Outcome::XWins => totals.x_wins += 1,
            Outcome::OWins => totals.o_wins += 1,
            Outcome::Draw => totals.draws += 1,
            Outcome::InProgress => unreachable!(),
        }
        for cell in 0..9 {
            assert!(state.play(cell).is_err());
        }
        return;
    }

    let expected = if accepted % 2 == 0 { Player::X } else { Player::O };
    assert_eq!(state.current_player(), expected);

    for cell in 0..9 {
        match state.play(cell) {
            Ok(next) => {
                assert!(check_transition(state, &next).is_ok());
                walk(&next, accepted + 1, totals);
            }
            Err(_) => assert!(state.board().squares()[cell].player().is_some()),
        }
    }
}

#[test]
fn test_every_reachable_game() {
    let mut totals = Totals::default();
    walk(&SessionState::new(), 0, &mut totals);

    // Known counts for tic-tac-toe move sequences ending at the first win or
    // a full board.
    assert_eq!(totals.games, 255_168);
    assert_eq!(totals.x_wins, 131_184);
    assert_eq!(totals.o_wins, 77_904);
    assert_eq!(totals.draws, 46_080);
}

#[test]
fn test_engine_agrees_with_pure_transition() {
    // Diagonal sweep with repeats and out-of-range cells mixed in.
    let moves = [4, 4, 0, 12, 8, 2, 6, 6, 3, 5, 1, 7];
    let mut engine = GameEngine::new();
    let mut state = SessionState::new();

    for cell in moves {
        if let Ok(next) = state.play(cell) {
            state = next;
        }
        assert_eq!(engine.apply_move(cell), &state);
    }
}
