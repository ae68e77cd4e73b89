//! Conversion between 1-based position labels and board coordinates.
//!
//! Labels run row-major from the top-left:
//!
//! ```text
//!  1 | 2 | 3
//! ---+---+---
//!  4 | 5 | 6
//! ---+---+---
//!  7 | 8 | 9
//! ```

use crate::Cell;
use tracing::instrument;

/// Converts a position label (1-9) to its cell.
///
/// Returns `None` for 0 and anything above 9.
#[instrument]
pub fn position_to_row_col(position: usize) -> Option<Cell> {
    if !(1..=9).contains(&position) {
        return None;
    }
    let index = position - 1;
    Some(Cell::new(index / 3, index % 3))
}

/// Converts a cell to its position label (1-9).
///
/// Returns `None` when the cell is off the board.
#[instrument]
pub fn row_col_to_position(cell: Cell) -> Option<usize> {
    if cell.row > 2 || cell.col > 2 {
        return None;
    }
    Some(cell.row * 3 + cell.col + 1)
}
