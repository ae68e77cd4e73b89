//! The games.
//!
//! Each module holds a small state type with pure transitions plus a `run`
//! driver that talks to the player through a [`Prompter`](crate::Prompter)
//! and writes to any [`Write`](std::io::Write).

pub mod cointoss;
pub mod higher_lower;
pub mod memory;
pub mod rock_paper_scissors;
pub mod tictactoe;
pub mod word_guess;
