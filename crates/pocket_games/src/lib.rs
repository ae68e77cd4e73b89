//! Pocket Games library - small terminal games
//!
//! Every game is a plain state type plus a `run` driver. Drivers never touch
//! stdin or stdout directly: questions go through a [`Prompter`], output goes
//! to any [`Write`](std::io::Write), and randomness comes from the caller's
//! [`Rng`](rand::Rng). That keeps each game scriptable end to end.
//!
//! # Architecture
//!
//! - **Games**: coin toss, higher or lower, memory sequence, rock paper
//!   scissors, tic-tac-toe (engine in `pocket_tictactoe`), word guess
//! - **Prompt**: terminal and scripted [`Prompter`]s
//! - **Config**: [`GamesConfig`] loaded from TOML, including the [`Theme`]
//!
//! # Example
//!
//! ```
//! use pocket_games::{Answer, ScriptedPrompter, Theme};
//! use pocket_games::games::tictactoe::{self, Finish};
//! use pocket_tictactoe::Mark;
//! use rand::SeedableRng;
//!
//! # fn main() -> anyhow::Result<()> {
//! // Local game, X takes the top row.
//! let mut prompter = ScriptedPrompter::new([
//!     Answer::Select(0), // Local Multiplayer
//!     Answer::Select(0), // X at 1
//!     Answer::Select(2), // O at 4
//!     Answer::Select(0), // X at 2
//!     Answer::Select(2), // O at 6
//!     Answer::Select(0), // X at 3
//! ]);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let mut out = Vec::new();
//! let finish = tictactoe::run(&mut prompter, &mut rng, &mut out, &Theme::plain())?;
//! assert_eq!(finish, Finish::Winner(Mark::X));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
pub mod games;
mod prompt;
pub mod terminal;
mod theme;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, GamesConfig, HigherLowerSettings, MemorySettings, WordGuessSettings};

// Crate-level exports - Prompting
pub use prompt::{Answer, PromptError, Prompter, ScriptedPrompter, TerminalPrompter};

// Crate-level exports - Styling
pub use theme::Theme;

// Crate-level exports - Tic-tac-toe driver
pub use games::tictactoe::{Finish, TurnError};

// Crate-level exports - Word guess
pub use games::word_guess::GuessError;
