//! Terminal driver for [`pocket_tictactoe`].

use crate::prompt::{PromptError, Prompter};
use crate::theme::Theme;
use anyhow::Result;
use derive_more::{Display, Error};
use pocket_tictactoe::{Cell, Game, GameMode, Mark, position_to_row_col, row_col_to_position};
use rand::Rng;
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// Failure to acquire a human move.
#[derive(Debug, Clone, Display, Error)]
pub enum TurnError {
    /// The board has no free cell.
    #[display("no available moves")]
    NoAvailableMoves,
    /// The prompter answered with an index outside the offered list.
    #[display("invalid selection index {_0}")]
    InvalidSelection(#[error(not(source))] usize),
    /// The chosen label is not a position from 1 to 9.
    #[display("invalid position value '{_0}'")]
    InvalidPositionValue(#[error(not(source))] String),
    /// The prompter itself failed.
    #[display("{_0}")]
    Prompt(PromptError),
}

impl From<PromptError> for TurnError {
    fn from(err: PromptError) -> Self {
        Self::Prompt(err)
    }
}

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    /// A line was completed.
    Winner(Mark),
    /// The board filled without a line.
    Draw,
}

const MODES: [GameMode; 2] = [GameMode::LocalMultiplayer, GameMode::VsComputer];

/// Asks which mode to play. Out-of-range answers fall back to local play.
#[instrument(skip(prompter))]
pub fn select_mode<P: Prompter + ?Sized>(prompter: &mut P) -> Result<GameMode, PromptError> {
    let labels = MODES.map(|mode| mode.to_string());
    let options: Vec<&str> = labels.iter().map(String::as_str).collect();
    let index = prompter.select("Select game mode:", &labels[0], &options)?;
    Ok(MODES.get(index).copied().unwrap_or(GameMode::LocalMultiplayer))
}

/// Asks the current human player for a cell.
///
/// # Errors
///
/// [`TurnError::NoAvailableMoves`] on a full board, [`TurnError::InvalidSelection`]
/// or [`TurnError::InvalidPositionValue`] for a bad answer, and
/// [`TurnError::Prompt`] when the prompter fails.
#[instrument(skip(prompter, game), fields(player = %game.current_player()))]
pub fn player_move<P: Prompter + ?Sized>(
    prompter: &mut P,
    game: &Game,
) -> Result<Cell, TurnError> {
    let available = game.available_positions();
    if available.is_empty() {
        return Err(TurnError::NoAvailableMoves);
    }
    let options: Vec<&str> = available.iter().map(String::as_str).collect();
    let index = prompter.select("Select position (1-9):", "1", &options)?;
    let label = available
        .get(index)
        .ok_or(TurnError::InvalidSelection(index))?;
    let cell = label_to_cell(label)?;
    debug!(%label, %cell, "Position selected");
    Ok(cell)
}

/// Maps a position label ("1" to "9") to its cell.
///
/// # Errors
///
/// [`TurnError::InvalidPositionValue`] for anything else.
pub fn label_to_cell(label: &str) -> Result<Cell, TurnError> {
    label
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(position_to_row_col)
        .ok_or_else(|| TurnError::InvalidPositionValue(label.to_string()))
}

fn render<W: Write>(out: &mut W, game: &Game, theme: &Theme) -> std::io::Result<()> {
    writeln!(out, "{}", game.board().render_with(|mark| theme.mark(mark)))
}

/// Plays one match to completion.
#[instrument(skip(prompter, rng, out, theme))]
pub fn run<P, R, W>(prompter: &mut P, rng: &mut R, out: &mut W, theme: &Theme) -> Result<Finish>
where
    P: Prompter + ?Sized,
    R: Rng + ?Sized,
    W: Write,
{
    writeln!(out, "{}", theme.title("Tic Tac Toe"))?;
    let mode = select_mode(prompter)?;
    let mut game = Game::new(mode);
    info!(%mode, "Starting tic-tac-toe");

    loop {
        render(out, &game, theme)?;
        let player = game.current_player();
        writeln!(out, "Player {}'s turn", theme.mark(player))?;

        let cell = if game.is_computer_turn() {
            let Some(cell) = game.computer_move(rng) else {
                // Unreachable while the loop stops on a full board.
                warn!("Computer found no move");
                break Ok(Finish::Draw);
            };
            let position = row_col_to_position(cell).unwrap_or_default();
            writeln!(
                out,
                "Computer places {} at position {}",
                theme.mark(player),
                theme.number(position)
            )?;
            cell
        } else {
            match player_move(prompter, &game) {
                Ok(cell) => cell,
                Err(TurnError::Prompt(e)) => return Err(e.into()),
                Err(e) => {
                    warn!(error = %e, "Move not acquired");
                    writeln!(out, "{}", theme.incorrect(format!("Error: {e}")))?;
                    continue;
                }
            }
        };

        if let Err(e) = game.make_move(cell.row, cell.col) {
            warn!(error = %e, "Move rejected");
            writeln!(out, "{}", theme.incorrect(format!("Invalid move: {e}")))?;
            continue;
        }

        if let Some(winner) = game.winner() {
            render(out, &game, theme)?;
            if game.computer_mark() == Some(winner) {
                writeln!(out, "{}", theme.correct(format!("Computer ({winner}) wins!")))?;
            } else {
                writeln!(out, "{}", theme.correct(format!("Player {winner} wins!")))?;
            }
            info!(%winner, "Tic-tac-toe finished");
            break Ok(Finish::Winner(winner));
        }

        if game.is_board_full() {
            render(out, &game, theme)?;
            writeln!(out, "{}", theme.instruction("It's a draw!"))?;
            info!("Tic-tac-toe finished in a draw");
            break Ok(Finish::Draw);
        }
    }
}
