//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, WinLine};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`WinLine::ALL`] order and the first line owned by a
/// single mark is returned, so a move completing two lines at once reports
/// the earlier one.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, WinLine)> {
    WinLine::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.cells();
        let first = board.get(a);
        let player = first.player()?;
        (board.get(b) == first && board.get(c) == first).then_some((player, line))
    })
}
