//! Pure tic-tac-toe game logic.
//!
//! The engine owns a 3x3 board, turn order, move legality and win/full-board
//! detection. In [`GameMode::VsComputer`] the O seat is played by a small
//! heuristic search (win, block, center, random corner, first free cell).
//!
//! Nothing here performs I/O. Drivers render the board, ask a human for a
//! [position label](position_to_row_col), and stop the loop once
//! [`Game::winner`] or [`Game::is_board_full`] says the match is over.
//!
//! # Example
//!
//! ```
//! use pocket_tictactoe::{Game, GameMode, Mark};
//!
//! let mut game = Game::new(GameMode::LocalMultiplayer);
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     game.make_move(row, col).unwrap();
//! }
//! assert_eq!(game.winner(), Some(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod display;
mod error;
mod game;
mod opponent;
mod position;
pub mod rules;
mod types;

pub use error::MoveError;
pub use game::Game;
pub use opponent::{choose_move, find_winning_move};
pub use position::{position_to_row_col, row_col_to_position};
pub use types::{Board, Cell, GameMode, Mark, Square};
