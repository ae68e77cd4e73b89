//! Higher or lower: guess whether the next number beats the current one.

use crate::config::HigherLowerSettings;
use crate::prompt::Prompter;
use crate::theme::Theme;
use anyhow::{Context, Result};
use derive_more::{Display, Error};
use rand::Rng;
use std::io::Write;
use strum::Display as StrumDisplay;
use tracing::{debug, info, instrument};

/// The player's call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// Next number will be larger.
    Higher,
    /// Next number will be smaller.
    Lower,
}

/// The range is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("minimum {min} exceeds maximum {max}")]
pub struct InvalidRange {
    /// Requested minimum.
    pub min: i64,
    /// Requested maximum.
    pub max: i64,
}

/// State of one higher-or-lower session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HigherLower {
    min: i64,
    max: i64,
    current: i64,
    next: Option<i64>,
    guess: Option<Direction>,
    correct: bool,
    over: bool,
}

impl HigherLower {
    /// Starts a session with a random number in `min..=max`.
    #[instrument(skip(rng))]
    pub fn new<R: Rng + ?Sized>(min: i64, max: i64, rng: &mut R) -> Result<Self, InvalidRange> {
        if min > max {
            return Err(InvalidRange { min, max });
        }
        Ok(Self {
            min,
            max,
            current: rng.random_range(min..=max),
            next: None,
            guess: None,
            correct: false,
            over: false,
        })
    }

    /// The number the player is guessing against.
    pub fn current(&self) -> i64 {
        self.current
    }

    /// The most recently drawn number.
    pub fn next(&self) -> Option<i64> {
        self.next
    }

    /// Whether the last guess was right.
    pub fn is_correct(&self) -> bool {
        self.correct
    }

    /// Whether the session has ended.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Draws the next number and scores `guess` against it.
    ///
    /// Drawing the same number again is always a miss.
    #[instrument(skip(self, rng), fields(current = self.current))]
    pub fn play<R: Rng + ?Sized>(&mut self, guess: Direction, rng: &mut R) {
        let next = rng.random_range(self.min..=self.max);
        self.guess = Some(guess);
        self.next = Some(next);
        self.correct = match guess {
            _ if next == self.current => false,
            Direction::Higher => next > self.current,
            Direction::Lower => next < self.current,
        };
        self.over = !self.correct;
        debug!(next, correct = self.correct, "Round scored");
    }

    /// Makes the drawn number the new current number.
    pub fn advance(&mut self) {
        if let Some(next) = self.next.take() {
            self.current = next;
        }
    }

    /// Describes the last round.
    pub fn result_message(&self, theme: &Theme) -> String {
        let Some(next) = self.next else {
            return format!("Current number: {}", theme.number(self.current));
        };
        let numbers = format!(
            "Current number: {}, Next number: {}",
            theme.number(self.current),
            theme.number(next)
        );
        if next == self.current {
            return format!("{numbers}\nThe numbers are the same! Game over!");
        }
        let outcome = if self.correct {
            theme.correct("Correct")
        } else {
            theme.incorrect("Incorrect")
        };
        let guess = self.guess.map(|g| g.to_string()).unwrap_or_default();
        format!(
            "{numbers}\nYou guessed the next number would be {}: {outcome}!",
            theme.guess(guess)
        )
    }
}

const GUESS_OPTIONS: [&str; 3] = ["Higher", "Lower", "Quit"];

const RULES: [&str; 6] = [
    "Rules:",
    "1. You'll be shown a random number",
    "2. Guess if the next number will be HIGHER or LOWER",
    "3. If you guess correctly, you continue and build your streak",
    "4. If you guess incorrectly, the game ends",
    "5. If the numbers are the same, the game ends",
];

/// Asks higher, lower or quit; `None` means quit.
#[instrument(skip(prompter))]
pub fn player_guess<P: Prompter + ?Sized>(
    prompter: &mut P,
    current: i64,
) -> Result<Option<Direction>> {
    let prompt = format!("Current number is {current}. Will the next number be Higher or Lower?");
    let index = prompter
        .select(&prompt, "Higher", &GUESS_OPTIONS)
        .context("Failed to read guess")?;
    match index {
        0 => Ok(Some(Direction::Higher)),
        1 => Ok(Some(Direction::Lower)),
        _ => Ok(None),
    }
}

/// Plays a session. Returns the final streak.
#[instrument(skip(prompter, rng, out, theme))]
pub fn run<P, R, W>(
    prompter: &mut P,
    rng: &mut R,
    out: &mut W,
    theme: &Theme,
    settings: HigherLowerSettings,
) -> Result<u32>
where
    P: Prompter + ?Sized,
    R: Rng + ?Sized,
    W: Write,
{
    let (min, max) = (*settings.min(), *settings.max());
    writeln!(
        out,
        "{} Numbers range from {} to {}\n",
        theme.title("Welcome to Higher or Lower!"),
        theme.number(min),
        theme.number(max)
    )?;
    for rule in RULES {
        writeln!(out, "{rule}")?;
    }
    writeln!(out)?;

    let mut game = HigherLower::new(min, max, rng)?;
    info!(start = game.current(), "Starting higher or lower");
    writeln!(out, "Starting number: {}", theme.number(game.current()))?;

    let mut streak = 0;
    while let Some(guess) = player_guess(prompter, game.current())? {
        game.play(guess, rng);
        writeln!(out, "{}", game.result_message(theme))?;

        if !game.is_correct() {
            writeln!(
                out,
                "{} {}",
                theme.incorrect("Game Over!"),
                theme.streak(format!("Final streak: {streak}"))
            )?;
            break;
        }

        streak += 1;
        writeln!(out, "{}", theme.streak(format!("Streak: {streak}")))?;
        game.advance();
    }

    info!(streak, "Higher or lower finished");
    Ok(streak)
}
