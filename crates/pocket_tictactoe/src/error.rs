//! Move rejection errors.

use derive_more::{Display, Error};

/// Reasons [`Game::make_move`](crate::Game::make_move) refuses a move.
///
/// A rejected move leaves the board and turn order untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Row or column is outside `0..=2`.
    #[display("invalid position ({row}, {col}): must be between 0 and 2")]
    InvalidPosition {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// Target cell already holds a mark.
    #[display("position ({row}, {col}) already taken")]
    PositionTaken {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}
