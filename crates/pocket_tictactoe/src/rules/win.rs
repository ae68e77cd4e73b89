//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Square};
use tracing::instrument;

/// The eight lines, in scan order: rows top to bottom, columns left to
/// right, the main diagonal, then the anti-diagonal.
pub const LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)],
    [Cell::new(1, 0), Cell::new(1, 1), Cell::new(1, 2)],
    [Cell::new(2, 0), Cell::new(2, 1), Cell::new(2, 2)],
    // Columns
    [Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)],
    [Cell::new(0, 1), Cell::new(1, 1), Cell::new(2, 1)],
    [Cell::new(0, 2), Cell::new(1, 2), Cell::new(2, 2)],
    // Diagonals
    [Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)],
    [Cell::new(0, 2), Cell::new(1, 1), Cell::new(2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first line in [`LINES`] order that is fully
/// occupied by a single mark. An all-empty line never matches.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a)?;
        if sq != Square::Empty && Some(sq) == board.get(b) && Some(sq) == board.get(c) {
            sq.mark()
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn board_with(mark: Mark, cells: &[Cell]) -> Board {
        let mut board = Board::new();
        for &cell in cells {
            board.place(cell, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_for_both_marks() {
        for mark in Mark::iter() {
            for line in LINES {
                let board = board_with(mark, &line);
                assert_eq!(check_winner(&board), Some(mark), "line {line:?}");
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Mark::X, &[Cell::new(0, 0), Cell::new(0, 1)]);
        board.place(Cell::new(0, 2), Mark::O).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Mark::O, &[Cell::new(0, 0), Cell::new(1, 1)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_lines_scan_top_to_bottom() {
        let mut board = board_with(Mark::X, &[Cell::new(2, 0), Cell::new(2, 1), Cell::new(2, 2)]);
        for cell in [Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)] {
            board.place(cell, Mark::O).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Mark::O));
    }
}
