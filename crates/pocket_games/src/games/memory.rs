//! Memory sequence: repeat a growing sequence of colours.

use crate::config::MemorySettings;
use crate::prompt::Prompter;
use crate::terminal::{clear_screen, pause};
use crate::theme::Theme;
use anyhow::{Context, Result};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::io::Write;
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::{debug, info, instrument};

/// A colour in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Color {
    /// Red.
    Red,
    /// Yellow.
    Yellow,
    /// Green.
    Green,
    /// Blue.
    Blue,
}

impl Color {
    /// ANSI colour code used when showing this colour.
    pub fn ansi(self) -> u8 {
        match self {
            Color::Red => 9,
            Color::Yellow => 11,
            Color::Green => 10,
            Color::Blue => 12,
        }
    }
}

/// State of a memory game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryGame {
    lives: u32,
    round: u32,
    max_round: u32,
    sequence: Vec<Color>,
}

impl MemoryGame {
    /// Starts at round 1 with `lives` lives.
    #[instrument]
    pub fn new(lives: u32, max_round: u32) -> Self {
        Self {
            lives,
            round: 1,
            max_round,
            sequence: Vec::new(),
        }
    }

    /// Lives left.
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Current round, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The sequence to reproduce this round.
    pub fn sequence(&self) -> &[Color] {
        &self.sequence
    }

    /// Draws a fresh sequence of `round + 2` colours.
    #[instrument(skip(self, rng), fields(round = self.round))]
    pub fn generate_sequence<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let palette: Vec<Color> = Color::iter().collect();
        let length = self.round as usize + 2;
        self.sequence = (0..length)
            .filter_map(|_| palette.choose(rng).copied())
            .collect();
        debug!(length, "Sequence generated");
    }

    /// Checks a full answer against the sequence.
    pub fn check_sequence(&self, answer: &[Color]) -> bool {
        answer == self.sequence.as_slice()
    }

    /// Removes one life.
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    /// Moves on to the next round.
    pub fn next_round(&mut self) {
        self.round += 1;
    }

    /// Whether the player is out of lives or past the last round.
    pub fn is_over(&self) -> bool {
        self.lives == 0 || self.round > self.max_round
    }
}

const LIFE_OPTIONS: [&str; 3] = ["1 life (hardcore mode)", "2 lives", "3 lives"];

/// How the player's attempt at a round ended.
enum Attempt {
    Correct,
    Wrong,
}

/// Plays until the lives run out or the last round is cleared.
///
/// Returns the round reached.
#[instrument(skip(prompter, rng, out, theme))]
pub fn run<P, R, W>(
    prompter: &mut P,
    rng: &mut R,
    out: &mut W,
    theme: &Theme,
    settings: MemorySettings,
) -> Result<u32>
where
    P: Prompter + ?Sized,
    R: Rng + ?Sized,
    W: Write,
{
    let index = prompter
        .select("Choose number of lives:", "2 lives", &LIFE_OPTIONS)
        .context("Failed to select lives")?;
    let lives = match index {
        0 => 1,
        1 => 2,
        _ => 3,
    };
    let mut game = MemoryGame::new(lives, *settings.max_round());
    info!(lives, "Starting memory game");

    while !game.is_over() {
        game.generate_sequence(rng);
        show_sequence(out, theme, &game, &settings)?;

        loop {
            match attempt(prompter, out, &game, &settings)? {
                Attempt::Correct => {
                    writeln!(
                        out,
                        "{}",
                        theme.bold("Correct! Next round...", *theme.correct_color())
                    )?;
                    pause(out, *settings.advance_pause_secs())?;
                    game.next_round();
                    break;
                }
                Attempt::Wrong => {
                    game.lose_life();
                    if game.is_over() {
                        writeln!(
                            out,
                            "{}",
                            theme.bold(
                                format!("Game Over! You reached round {}.", game.round()),
                                *theme.incorrect_color()
                            )
                        )?;
                        info!(round = game.round(), "Memory game lost");
                        return Ok(game.round());
                    }
                    writeln!(
                        out,
                        "{}",
                        theme.bold(
                            "Wrong color! Try again from the start of this round...",
                            *theme.incorrect_color()
                        )
                    )?;
                    pause(out, *settings.retry_pause_secs())?;
                    show_sequence(out, theme, &game, &settings)?;
                }
            }
        }
    }

    writeln!(out, "{}", theme.strong("Thanks for playing!"))?;
    info!(round = game.round(), "Memory game finished");
    Ok(game.round())
}

fn header<W: Write>(
    out: &mut W,
    game: &MemoryGame,
    settings: &MemorySettings,
) -> std::io::Result<()> {
    if *settings.clear_screen() {
        clear_screen(out)?;
    }
    writeln!(out, "Round {} - Lives: {}\n", game.round(), game.lives())
}

fn show_sequence<W: Write>(
    out: &mut W,
    theme: &Theme,
    game: &MemoryGame,
    settings: &MemorySettings,
) -> Result<()> {
    header(out, game, settings)?;
    writeln!(out, "{}", theme.strong("Remember this sequence:"))?;
    let shown: Vec<String> = game
        .sequence()
        .iter()
        .map(|color| theme.bold(color, color.ansi()))
        .collect();
    writeln!(out, "{}", shown.join(" "))?;
    writeln!(
        out,
        "\nMemorize it! It will disappear in {} seconds...",
        settings.display_secs()
    )?;
    pause(out, *settings.display_secs())?;
    Ok(())
}

/// Collects colours one at a time, stopping at the first mistake.
fn attempt<P, W>(
    prompter: &mut P,
    out: &mut W,
    game: &MemoryGame,
    settings: &MemorySettings,
) -> Result<Attempt>
where
    P: Prompter + ?Sized,
    W: Write,
{
    header(out, game, settings)?;
    writeln!(out, "Select the sequence in order using the menu.")?;
    let palette: Vec<Color> = Color::iter().collect();
    let labels: Vec<String> = palette.iter().map(Color::to_string).collect();
    let labels: Vec<&str> = labels.iter().map(String::as_str).collect();

    let mut answer = Vec::with_capacity(game.sequence().len());
    for (step, expected) in game.sequence().iter().enumerate() {
        let index = prompter
            .select(&format!("Color {}:", step + 1), labels[0], &labels)
            .context("Failed to select color")?;
        let picked = palette.get(index).copied();
        debug!(step, ?picked, %expected, "Color picked");
        match picked {
            Some(color) if color == *expected => answer.push(color),
            _ => return Ok(Attempt::Wrong),
        }
    }
    if game.check_sequence(&answer) {
        Ok(Attempt::Correct)
    } else {
        Ok(Attempt::Wrong)
    }
}
