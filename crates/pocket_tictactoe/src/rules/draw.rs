//! Full-board detection for tic-tac-toe.

use crate::{Board, Square};
use tracing::instrument;

/// Checks if every square is occupied.
///
/// A full board with no winner is a draw; callers combine this with
/// [`check_winner`](super::check_winner) to decide.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().flatten().all(|s| *s != Square::Empty)
}
