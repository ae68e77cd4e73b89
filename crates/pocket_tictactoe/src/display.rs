//! Text rendering of the board.

use crate::{Board, Cell, Mark, Square, row_col_to_position};
use std::fmt;

impl Board {
    /// Renders the board as a text grid.
    ///
    /// Empty squares show their position label, played squares show the mark
    /// as returned by `paint` (so callers can add colour). The grid starts
    /// with a blank line:
    ///
    /// ```text
    ///
    ///  X | 2 | 3
    /// ---+---+---
    ///  4 | O | 6
    /// ---+---+---
    ///  7 | 8 | 9
    /// ```
    pub fn render_with<F>(&self, mut paint: F) -> String
    where
        F: FnMut(Mark) -> String,
    {
        let mut result = String::from("\n");
        for (row, squares) in self.squares().iter().enumerate() {
            let cells: Vec<String> = squares
                .iter()
                .enumerate()
                .map(|(col, square)| match square {
                    Square::Occupied(mark) => paint(*mark),
                    Square::Empty => row_col_to_position(Cell::new(row, col))
                        .map(|p| p.to_string())
                        .unwrap_or_default(),
                })
                .collect();
            result.push(' ');
            result.push_str(&cells.join(" | "));
            result.push('\n');
            if row < 2 {
                result.push_str("---+---+---\n");
            }
        }
        result
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(|mark| mark.to_string()))
    }
}
