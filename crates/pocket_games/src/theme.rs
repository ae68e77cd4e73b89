//! Terminal styling.
//!
//! A [`Theme`] is handed to every renderer instead of living in globals.
//! Colours are ANSI 256-colour codes.

use crossterm::style::{Color, Stylize};
use derive_getters::Getters;
use pocket_tictactoe::Mark;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Colour settings for all games.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Theme {
    /// Whether to emit colour codes at all.
    #[serde(default = "default_colors")]
    colors: bool,
    /// Colour for X marks (bright blue).
    #[serde(default = "default_x_color")]
    x_color: u8,
    /// Colour for O marks (bright yellow).
    #[serde(default = "default_o_color")]
    o_color: u8,
    /// Colour for titles (purple).
    #[serde(default = "default_title_color")]
    title_color: u8,
    /// Colour for numbers and the hidden word (blue).
    #[serde(default = "default_number_color")]
    number_color: u8,
    /// Colour for correct answers (green).
    #[serde(default = "default_correct_color")]
    correct_color: u8,
    /// Colour for wrong answers (red).
    #[serde(default = "default_incorrect_color")]
    incorrect_color: u8,
    /// Colour for echoed guesses (yellow).
    #[serde(default = "default_guess_color")]
    guess_color: u8,
    /// Colour for streak counters (orange).
    #[serde(default = "default_streak_color")]
    streak_color: u8,
    /// Colour for instructions (gold).
    #[serde(default = "default_instruction_color")]
    instruction_color: u8,
}

fn default_colors() -> bool {
    true
}

fn default_x_color() -> u8 {
    45
}

fn default_o_color() -> u8 {
    226
}

fn default_title_color() -> u8 {
    99
}

fn default_number_color() -> u8 {
    39
}

fn default_correct_color() -> u8 {
    10
}

fn default_incorrect_color() -> u8 {
    9
}

fn default_guess_color() -> u8 {
    226
}

fn default_streak_color() -> u8 {
    208
}

fn default_instruction_color() -> u8 {
    220
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            x_color: default_x_color(),
            o_color: default_o_color(),
            title_color: default_title_color(),
            number_color: default_number_color(),
            correct_color: default_correct_color(),
            incorrect_color: default_incorrect_color(),
            guess_color: default_guess_color(),
            streak_color: default_streak_color(),
            instruction_color: default_instruction_color(),
        }
    }
}

impl Theme {
    /// Theme that never emits escape codes.
    pub fn plain() -> Self {
        Self {
            colors: false,
            ..Self::default()
        }
    }

    /// Colours `text` with `color`.
    pub fn paint(&self, text: impl Display, color: u8) -> String {
        if self.colors {
            text.to_string().with(Color::AnsiValue(color)).to_string()
        } else {
            text.to_string()
        }
    }

    /// Colours `text` with `color` in bold.
    pub fn bold(&self, text: impl Display, color: u8) -> String {
        if self.colors {
            text.to_string()
                .with(Color::AnsiValue(color))
                .bold()
                .to_string()
        } else {
            text.to_string()
        }
    }

    /// Bold without colour.
    pub fn strong(&self, text: impl Display) -> String {
        if self.colors {
            text.to_string().bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// A tic-tac-toe mark in its player's colour.
    pub fn mark(&self, mark: Mark) -> String {
        let color = match mark {
            Mark::X => self.x_color,
            Mark::O => self.o_color,
        };
        self.paint(mark, color)
    }

    /// Bold title text.
    pub fn title(&self, text: impl Display) -> String {
        self.bold(text, self.title_color)
    }

    /// Bold number.
    pub fn number(&self, value: impl Display) -> String {
        self.bold(value, self.number_color)
    }

    /// Success text.
    pub fn correct(&self, text: impl Display) -> String {
        self.paint(text, self.correct_color)
    }

    /// Failure text.
    pub fn incorrect(&self, text: impl Display) -> String {
        self.paint(text, self.incorrect_color)
    }

    /// Echo of the player's guess.
    pub fn guess(&self, text: impl Display) -> String {
        self.paint(text, self.guess_color)
    }

    /// Bold streak counter.
    pub fn streak(&self, text: impl Display) -> String {
        self.bold(text, self.streak_color)
    }

    /// Instruction text.
    pub fn instruction(&self, text: impl Display) -> String {
        self.paint(text, self.instruction_color)
    }
}
