//! Coin toss: keep guessing the flip to build a streak.

use crate::prompt::Prompter;
use crate::theme::Theme;
use anyhow::{Context, Result};
use derive_more::{Display, Error};
use rand::Rng;
use std::io::Write;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumIter};
use tracing::{debug, info, instrument};

/// A face of the coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter)]
pub enum CoinSide {
    /// Heads.
    Heads,
    /// Tails.
    Tails,
}

/// A guess that is neither heads nor tails.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("guess must be either 'heads' or 'tails'")]
pub struct InvalidGuess;

impl FromStr for CoinSide {
    type Err = InvalidGuess;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heads" => Ok(CoinSide::Heads),
            "tails" => Ok(CoinSide::Tails),
            _ => Err(InvalidGuess),
        }
    }
}

/// Flips the coin.
pub fn toss<R: Rng + ?Sized>(rng: &mut R) -> CoinSide {
    if rng.random_bool(0.5) {
        CoinSide::Heads
    } else {
        CoinSide::Tails
    }
}

const NEXT_GUESS_OPTIONS: [&str; 3] = ["Heads", "Tails", "Quit"];

/// Asks for the next guess; `None` means the player quit.
#[instrument(skip(prompter))]
pub fn next_guess<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Option<CoinSide>> {
    let index = prompter
        .select(
            "What's your next guess? Heads, Tails or Quit?",
            "Heads",
            &NEXT_GUESS_OPTIONS,
        )
        .context("Failed to read next guess")?;
    match index {
        0 => Ok(Some(CoinSide::Heads)),
        1 => Ok(Some(CoinSide::Tails)),
        _ => Ok(None),
    }
}

/// Plays until the player guesses wrong or quits. Returns the final streak.
#[instrument(skip(prompter, rng, out, theme))]
pub fn run<P, R, W>(
    prompter: &mut P,
    rng: &mut R,
    out: &mut W,
    theme: &Theme,
    first_guess: CoinSide,
) -> Result<u32>
where
    P: Prompter + ?Sized,
    R: Rng + ?Sized,
    W: Write,
{
    info!("Starting coin toss");
    let mut guess = first_guess;
    let mut streak = 0;

    loop {
        let result = toss(rng);
        debug!(%guess, %result, "Coin tossed");
        writeln!(out, "The coin shows: {}!", theme.number(result))?;

        if guess != result {
            writeln!(
                out,
                "{} {}",
                theme.incorrect("Game Over!"),
                theme.streak(format!("Final streak: {streak}"))
            )?;
            break;
        }

        streak += 1;
        writeln!(
            out,
            "{} {}",
            theme.correct("Correct!"),
            theme.streak(format!("Streak: {streak}"))
        )?;
        match next_guess(prompter)? {
            Some(next) => guess = next,
            None => break,
        }
    }

    info!(streak, "Coin toss finished");
    Ok(streak)
}
