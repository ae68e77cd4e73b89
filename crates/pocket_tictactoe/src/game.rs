//! Turn-keeping game engine for tic-tac-toe.

use crate::opponent::choose_move;
use crate::rules::{check_winner, is_full};
use crate::{Board, Cell, GameMode, Mark, MoveError, Square};
use rand::Rng;
use std::fmt;
use tracing::{debug, instrument};

/// A single tic-tac-toe match.
///
/// The game does not refuse moves after a winner is decided or the board
/// fills; the driver loop stops asking once [`winner`](Self::winner) or
/// [`is_board_full`](Self::is_board_full) reports the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Mark,
    mode: GameMode,
    computer_mark: Option<Mark>,
}

impl Game {
    /// Creates a game with an empty board and X to move.
    ///
    /// In [`GameMode::VsComputer`] the computer plays O.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        let computer_mark = match mode {
            GameMode::VsComputer => Some(Mark::O),
            GameMode::LocalMultiplayer => None,
        };
        Self {
            board: Board::new(),
            current_player: Mark::X,
            mode,
            computer_mark,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the computer's mark, if the computer is playing.
    pub fn computer_mark(&self) -> Option<Mark> {
        self.computer_mark
    }

    /// Places the current player's mark at zero-based `(row, col)` and passes
    /// the turn.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidPosition`] if `row` or `col` exceeds 2,
    /// [`MoveError::PositionTaken`] if the cell is occupied. The game is left
    /// unchanged on error.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        self.board.place(Cell::new(row, col), self.current_player)?;
        debug!(row, col, "Move applied");
        self.current_player = self.current_player.opponent();
        Ok(())
    }

    /// Returns the mark holding a complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        check_winner(&self.board)
    }

    /// Checks whether all nine cells are played.
    pub fn is_board_full(&self) -> bool {
        is_full(&self.board)
    }

    /// Labels ("1" to "9") of the unplayed cells, ascending.
    #[instrument(skip(self))]
    pub fn available_positions(&self) -> Vec<String> {
        self.board
            .squares()
            .iter()
            .flatten()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| (index + 1).to_string())
            .collect()
    }

    /// Checks whether the computer should move now.
    pub fn is_computer_turn(&self) -> bool {
        self.computer_mark == Some(self.current_player)
    }

    /// Picks the computer's next move without applying it.
    ///
    /// Plays for the computer's mark (O when no computer is seated). Returns
    /// `None` only on a full board.
    #[instrument(skip(self, rng))]
    pub fn computer_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Cell> {
        choose_move(&self.board, self.computer_mark.unwrap_or(Mark::O), rng)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}
