//! Heuristic computer opponent.
//!
//! Strategies are tried in priority order and the first that applies wins:
//!
//! 1. complete a line of our own,
//! 2. occupy the cell where the opponent would complete a line,
//! 3. take the center,
//! 4. take a random empty corner,
//! 5. take the first empty cell in row-major order.
//!
//! Hypothetical moves are evaluated on copies of the board, so the caller's
//! board is never touched.

use crate::rules::check_winner;
use crate::{Board, Cell, Mark};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Finds a cell where placing `mark` completes a line.
///
/// Cells are tried in row-major order; the first hit is returned.
#[instrument(skip(board))]
pub fn find_winning_move(board: &Board, mark: Mark) -> Option<Cell> {
    board
        .empty_cells()
        .find(|&cell| check_winner(&board.with(cell, mark)) == Some(mark))
}

/// Picks the computer's move for `computer` on `board`.
///
/// Returns `None` only when the board is full.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng + ?Sized>(board: &Board, computer: Mark, rng: &mut R) -> Option<Cell> {
    if let Some(cell) = find_winning_move(board, computer) {
        debug!(%cell, "Taking winning cell");
        return Some(cell);
    }

    if let Some(cell) = find_winning_move(board, computer.opponent()) {
        debug!(%cell, "Blocking opponent");
        return Some(cell);
    }

    if board.is_empty(Cell::CENTER) {
        debug!("Taking center");
        return Some(Cell::CENTER);
    }

    let mut corners = Cell::CORNERS;
    corners.shuffle(rng);
    if let Some(cell) = corners.into_iter().find(|&cell| board.is_empty(cell)) {
        debug!(%cell, "Taking corner");
        return Some(cell);
    }

    let fallback = board.empty_cells().next();
    debug!(cell = ?fallback, "Taking first free cell");
    fallback
}
