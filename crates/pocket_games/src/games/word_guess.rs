//! Word guess: reveal a hidden word one letter at a time.

use crate::config::WordGuessSettings;
use crate::prompt::Prompter;
use crate::theme::Theme;
use anyhow::{Context, Result};
use derive_more::{Display, Error};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// Placeholder for an unrevealed letter.
const HIDDEN: char = '_';

/// A guess the game refuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GuessError {
    /// Not exactly one ASCII letter.
    #[display("please enter a single letter")]
    NotALetter,
    /// Guessed before.
    #[display("you've already guessed '{_0}'")]
    AlreadyGuessed(#[error(not(source))] char),
}

/// The word list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("no words to choose from")]
pub struct EmptyWordList;

/// Effect of an accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter appears in the word this many times.
    Hit(usize),
    /// The letter is not in the word.
    Miss,
}

/// State of one word guess game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordGuess {
    word: Vec<char>,
    revealed: Vec<char>,
    guessed: Vec<char>,
    incorrect: u32,
    max_incorrect: u32,
    over: bool,
    won: bool,
}

impl WordGuess {
    /// Picks a random word from `words`.
    #[instrument(skip(words, rng), fields(word_count = words.len()))]
    pub fn new<R: Rng + ?Sized>(
        words: &[String],
        max_incorrect: u32,
        rng: &mut R,
    ) -> Result<Self, EmptyWordList> {
        let word = words.choose(rng).ok_or(EmptyWordList)?;
        Ok(Self::with_word(word, max_incorrect))
    }

    /// Starts a game for a known word.
    pub fn with_word(word: &str, max_incorrect: u32) -> Self {
        let word: Vec<char> = word.to_lowercase().chars().collect();
        Self {
            revealed: vec![HIDDEN; word.len()],
            word,
            guessed: Vec::new(),
            incorrect: 0,
            max_incorrect,
            over: false,
            won: false,
        }
    }

    /// The hidden word.
    pub fn word(&self) -> String {
        self.word.iter().collect()
    }

    /// The word with unguessed letters as `_`.
    pub fn revealed(&self) -> String {
        self.revealed.iter().collect()
    }

    /// Letters guessed so far, in order.
    pub fn guessed(&self) -> &[char] {
        &self.guessed
    }

    /// Wrong guesses so far.
    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    /// Wrong guesses still allowed.
    pub fn remaining_guesses(&self) -> u32 {
        self.max_incorrect.saturating_sub(self.incorrect)
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Whether the word was fully revealed.
    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Applies a one-letter guess.
    ///
    /// # Errors
    ///
    /// [`GuessError::NotALetter`] unless `input` is a single ASCII letter,
    /// [`GuessError::AlreadyGuessed`] for repeats. Rejected guesses cost
    /// nothing.
    #[instrument(skip(self))]
    pub fn guess_letter(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        let mut chars = input.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_lowercase(),
            _ => return Err(GuessError::NotALetter),
        };
        if self.guessed.contains(&letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }
        self.guessed.push(letter);

        let mut hits = 0;
        for (slot, &c) in self.revealed.iter_mut().zip(&self.word) {
            if c == letter {
                *slot = c;
                hits += 1;
            }
        }

        if hits > 0 {
            if !self.revealed.contains(&HIDDEN) {
                self.over = true;
                self.won = true;
            }
            debug!(%letter, hits, "Letter revealed");
            Ok(GuessOutcome::Hit(hits))
        } else {
            self.incorrect += 1;
            if self.incorrect >= self.max_incorrect {
                self.over = true;
            }
            debug!(%letter, incorrect = self.incorrect, "Letter missed");
            Ok(GuessOutcome::Miss)
        }
    }

    /// Letters a to z not yet guessed.
    pub fn remaining_letters(&self) -> String {
        ('a'..='z').filter(|c| !self.guessed.contains(c)).collect()
    }

    /// Renders the full game screen.
    pub fn render(&self, theme: &Theme) -> String {
        let mut screen = String::new();
        screen.push_str(&theme.title("W O R D  G U E S S"));
        screen.push_str("\n\n");

        let left = self.remaining_guesses();
        let counter = format!("Guesses Remaining: {}/{}", left, self.max_incorrect);
        let counter = if left > 3 {
            theme.correct(counter)
        } else if left > 1 {
            theme.instruction(counter)
        } else {
            theme.incorrect(counter)
        };
        screen.push_str(&counter);
        screen.push_str("\n\n");

        let spaced: String = self.revealed.iter().map(|c| format!("{c} ")).collect();
        screen.push_str(&theme.number(spaced));
        screen.push_str("\n\n");

        screen.push_str("Guessed: ");
        for letter in &self.guessed {
            let entry = format!("{letter} ");
            if self.word.contains(letter) {
                screen.push_str(&theme.correct(entry));
            } else {
                screen.push_str(&theme.incorrect(entry));
            }
        }
        screen.push_str("\n\n");

        let available: Vec<String> = self.remaining_letters().chars().map(String::from).collect();
        screen.push_str("Available: ");
        screen.push_str(&available.join(" "));
        screen.push_str("\n\n");

        if !self.over {
            screen.push_str(&theme.instruction("Guess a letter to continue.\n"));
        } else if self.won {
            screen.push_str(&theme.correct("🎉 Congratulations! You guessed the word!"));
            screen.push('\n');
        } else {
            screen.push_str(&theme.incorrect("😔 Game over! The word was: "));
            screen.push_str(&theme.number(self.word()));
            screen.push('\n');
        }
        screen
    }
}

/// Plays games until the player declines a rematch. Returns games played.
#[instrument(skip(prompter, rng, out, theme, settings))]
pub fn run<P, R, W>(
    prompter: &mut P,
    rng: &mut R,
    out: &mut W,
    theme: &Theme,
    settings: &WordGuessSettings,
) -> Result<u32>
where
    P: Prompter + ?Sized,
    R: Rng + ?Sized,
    W: Write,
{
    let mut played = 0;
    loop {
        let mut game = WordGuess::new(settings.words(), *settings.max_incorrect(), rng)?;
        played += 1;
        info!(game = played, "Starting word guess");

        writeln!(out, "{}", theme.title("\nWelcome to Word Guess!"))?;
        writeln!(
            out,
            "{}\n",
            theme.instruction("Guess the GitHub-related term one letter at a time.")
        )?;

        while !game.is_over() {
            writeln!(out, "{}", game.render(theme))?;
            let guess = prompter
                .input("Enter a letter: ", "")
                .context("Failed to read letter")?;
            if let Err(e) = game.guess_letter(guess.trim()) {
                warn!(error = %e, "Guess rejected");
                writeln!(out, "{}", theme.incorrect(e))?;
            }
        }

        writeln!(out, "{}", game.render(theme))?;
        info!(won = game.has_won(), word = %game.word(), "Word guess finished");

        let again = prompter
            .confirm("Play again?", true)
            .context("Failed to read play-again answer")?;
        if !again {
            break;
        }
    }

    writeln!(out, "{}", theme.title("Thanks for playing Word Guess!"))?;
    Ok(played)
}
