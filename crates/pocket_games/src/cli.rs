//! Command-line interface for pocket_games.

use crate::games::cointoss::CoinSide;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pocket Games - small games for the terminal
#[derive(Parser, Debug)]
#[command(name = "pocket_games")]
#[command(about = "A collection of small terminal games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value = "pocket_games.toml")]
    pub config: PathBuf,

    /// Game to play
    #[command(subcommand)]
    pub command: Command,
}

/// Available games
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Guess heads or tails and build a streak
    Cointoss {
        /// Your first guess: heads or tails
        #[arg(value_parser = parse_coin_side)]
        guess: CoinSide,
    },

    /// Guess whether the next number is higher or lower
    Higherlower {
        /// Smallest number (overrides the config file)
        #[arg(short = 'm', long, allow_negative_numbers = true)]
        min: Option<i64>,

        /// Largest number (overrides the config file)
        #[arg(short = 'M', long, allow_negative_numbers = true)]
        max: Option<i64>,
    },

    /// Repeat an ever-growing colour sequence
    Memorygame,

    /// Rock, paper, scissors against the computer
    Rockpaperscissors,

    /// Tic-tac-toe against a friend or the computer
    Tictactoe,

    /// Guess the hidden word letter by letter
    Wordguess,
}

fn parse_coin_side(s: &str) -> Result<CoinSide, String> {
    s.parse().map_err(|e: crate::games::cointoss::InvalidGuess| e.to_string())
}
