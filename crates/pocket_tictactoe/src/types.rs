//! Core domain types for tic-tac-toe.

use crate::MoveError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, EnumIter,
)]
pub enum Mark {
    /// X always moves first and is always a human.
    X,
    /// O moves second; the computer's seat in [`GameMode::VsComputer`].
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Who sits in the O seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans share the terminal.
    #[display("Local Multiplayer")]
    LocalMultiplayer,
    /// The human plays X against the computer as O.
    #[display("Play Against Computer")]
    VsComputer,
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Not yet played.
    #[default]
    Empty,
    /// Holds a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// Zero-based board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("({row}, {col})")]
pub struct Cell {
    /// Row, top to bottom.
    pub row: usize,
    /// Column, left to right.
    pub col: usize,
}

impl Cell {
    /// Creates a cell coordinate. Does not check bounds.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Every cell in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell::new(0, 0),
        Cell::new(0, 1),
        Cell::new(0, 2),
        Cell::new(1, 0),
        Cell::new(1, 1),
        Cell::new(1, 2),
        Cell::new(2, 0),
        Cell::new(2, 1),
        Cell::new(2, 2),
    ];

    /// The center cell.
    pub const CENTER: Cell = Cell::new(1, 1);

    /// The four corners, top-left first.
    pub const CORNERS: [Cell; 4] = [
        Cell::new(0, 0),
        Cell::new(0, 2),
        Cell::new(2, 0),
        Cell::new(2, 2),
    ];
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [[Square; 3]; 3],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the square at `cell`, or `None` when off the board.
    pub fn get(&self, cell: Cell) -> Option<Square> {
        self.squares.get(cell.row)?.get(cell.col).copied()
    }

    /// Checks whether `cell` is on the board and unplayed.
    pub fn is_empty(&self, cell: Cell) -> bool {
        matches!(self.get(cell), Some(Square::Empty))
    }

    /// Returns the rows, top to bottom.
    pub fn squares(&self) -> &[[Square; 3]; 3] {
        &self.squares
    }

    /// Cells still unplayed, in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::ALL.into_iter().filter(|&cell| self.is_empty(cell))
    }

    /// Places `mark` at `cell` without regard to turn order.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidPosition`] when `cell` is off the board,
    /// [`MoveError::PositionTaken`] when it is already played.
    pub fn place(&mut self, cell: Cell, mark: Mark) -> Result<(), MoveError> {
        match self.get(cell) {
            None => Err(MoveError::InvalidPosition {
                row: cell.row,
                col: cell.col,
            }),
            Some(Square::Occupied(_)) => Err(MoveError::PositionTaken {
                row: cell.row,
                col: cell.col,
            }),
            Some(Square::Empty) => {
                self.set(cell, Square::Occupied(mark));
                Ok(())
            }
        }
    }

    fn set(&mut self, cell: Cell, square: Square) {
        self.squares[cell.row][cell.col] = square;
    }

    /// Returns a copy of this board with `mark` placed at `cell`.
    pub(crate) fn with(mut self, cell: Cell, mark: Mark) -> Self {
        self.set(cell, Square::Occupied(mark));
        self
    }
}
