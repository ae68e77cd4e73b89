//! Rock paper scissors against the computer, best of N rounds.

use crate::prompt::Prompter;
use crate::theme::Theme;
use anyhow::{Context, Result};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::io::Write;
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::{debug, info, instrument};

/// A hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Choice {
    /// Beats scissors.
    Rock,
    /// Beats rock.
    Paper,
    /// Beats paper.
    Scissors,
}

impl Choice {
    /// Whether `self` beats `other`.
    pub fn beats(self, other: Choice) -> bool {
        matches!(
            (self, other),
            (Choice::Rock, Choice::Scissors)
                | (Choice::Paper, Choice::Rock)
                | (Choice::Scissors, Choice::Paper)
        )
    }

    /// Draws a hand uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let all: Vec<Choice> = Choice::iter().collect();
        all.choose(rng).copied().unwrap_or(Choice::Rock)
    }
}

/// Who took a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RoundWinner {
    /// The human.
    Player,
    /// The computer.
    Computer,
    /// Same hands.
    Draw,
}

/// A best-of-N match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    best_of: u32,
    player_score: u32,
    computer_score: u32,
    rounds_played: u32,
    last_round: Option<(Choice, Choice, RoundWinner)>,
    over: bool,
    forfeited: bool,
}

impl Match {
    /// Starts a match; even (or zero) round counts become the next odd number.
    #[instrument]
    pub fn new(best_of: u32) -> Self {
        let best_of = if best_of % 2 == 0 { best_of + 1 } else { best_of };
        Self {
            best_of,
            player_score: 0,
            computer_score: 0,
            rounds_played: 0,
            last_round: None,
            over: false,
            forfeited: false,
        }
    }

    /// Rounds in the match.
    pub fn best_of(&self) -> u32 {
        self.best_of
    }

    /// Round wins needed to take the match.
    pub fn wins_needed(&self) -> u32 {
        self.best_of / 2 + 1
    }

    /// Player's round wins.
    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    /// Computer's round wins.
    pub fn computer_score(&self) -> u32 {
        self.computer_score
    }

    /// Rounds played so far, draws included.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Player hand, computer hand and winner of the last round.
    pub fn last_round(&self) -> Option<(Choice, Choice, RoundWinner)> {
        self.last_round
    }

    /// Whether the match is decided or abandoned.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Plays `player` against a random computer hand.
    pub fn play_round<R: Rng + ?Sized>(&mut self, player: Choice, rng: &mut R) -> RoundWinner {
        let computer = Choice::random(rng);
        self.play_against(player, computer)
    }

    /// Plays `player` against a known computer hand.
    #[instrument(skip(self))]
    pub fn play_against(&mut self, player: Choice, computer: Choice) -> RoundWinner {
        let winner = if player == computer {
            RoundWinner::Draw
        } else if player.beats(computer) {
            RoundWinner::Player
        } else {
            RoundWinner::Computer
        };
        match winner {
            RoundWinner::Player => self.player_score += 1,
            RoundWinner::Computer => self.computer_score += 1,
            RoundWinner::Draw => {}
        }
        self.rounds_played += 1;
        self.last_round = Some((player, computer, winner));
        self.over = self.player_score >= self.wins_needed()
            || self.computer_score >= self.wins_needed()
            || self.rounds_played >= self.best_of;
        debug!(%winner, player = self.player_score, computer = self.computer_score, "Round played");
        winner
    }

    /// Ends the match at the player's request.
    pub fn forfeit(&mut self) {
        self.over = true;
        self.forfeited = true;
    }

    /// One-line summary of the last round.
    pub fn round_message(&self) -> Option<String> {
        let (player, computer, winner) = self.last_round?;
        Some(match winner {
            RoundWinner::Draw => format!("Draw! Player ({player}) - CPU ({computer})"),
            RoundWinner::Player => format!("Player ({player}) beats CPU ({computer})"),
            RoundWinner::Computer => format!("Player ({player}) loses to CPU ({computer})"),
        })
    }

    /// Final verdict.
    pub fn game_over_message(&self) -> String {
        let (p, c) = (self.player_score, self.computer_score);
        if self.forfeited {
            "Game ended by player".to_string()
        } else if p > c {
            format!("GAME OVER: Player WINS ({p} - {c})")
        } else if c > p {
            format!("GAME OVER: Player LOSES ({p} - {c})")
        } else {
            format!("GAME OVER: DRAW ({p} - {c})")
        }
    }
}

const ROUND_OPTIONS: [&str; 4] = ["3", "5", "7", "9"];
const MOVE_OPTIONS: [&str; 4] = ["rock", "paper", "scissors", "exit"];

/// Plays a match. Returns the finished match.
#[instrument(skip(prompter, rng, out, theme))]
pub fn run<P, R, W>(prompter: &mut P, rng: &mut R, out: &mut W, theme: &Theme) -> Result<Match>
where
    P: Prompter + ?Sized,
    R: Rng + ?Sized,
    W: Write,
{
    let index = prompter
        .select(
            "How many rounds would you like to play (best of)?",
            "3",
            &ROUND_OPTIONS,
        )
        .context("Failed to read number of rounds")?;
    let best_of = ROUND_OPTIONS
        .get(index)
        .and_then(|s| s.parse().ok())
        .unwrap_or(3);

    let mut game = Match::new(best_of);
    info!(best_of = game.best_of(), "Starting rock paper scissors");
    writeln!(out, "Playing best of {} games", game.best_of())?;

    while !game.is_over() {
        writeln!(
            out,
            "\nCurrent score - Player: {}, Computer: {}",
            theme.number(game.player_score()),
            theme.number(game.computer_score())
        )?;

        let index = prompter
            .select("Choose your move", "rock", &MOVE_OPTIONS)
            .context("Failed to read move")?;
        let Some(choice) = Choice::iter().nth(index) else {
            game.forfeit();
            break;
        };

        game.play_round(choice, rng);
        if let Some(message) = game.round_message() {
            writeln!(out, "{message}")?;
        }
    }

    writeln!(out, "{}", theme.title(game.game_over_message()))?;
    info!(
        player = game.player_score(),
        computer = game.computer_score(),
        "Rock paper scissors finished"
    );
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beats_is_a_cycle() {
        assert!(Choice::Rock.beats(Choice::Scissors));
        assert!(Choice::Paper.beats(Choice::Rock));
        assert!(Choice::Scissors.beats(Choice::Paper));
        for choice in Choice::iter() {
            assert!(!choice.beats(choice));
        }
    }

    #[test]
    fn test_even_best_of_rounds_up() {
        assert_eq!(Match::new(4).best_of(), 5);
        assert_eq!(Match::new(0).best_of(), 1);
        assert_eq!(Match::new(7).best_of(), 7);
        assert_eq!(Match::new(5).wins_needed(), 3);
    }

    #[test]
    fn test_match_ends_at_wins_needed() {
        let mut game = Match::new(3);
        game.play_against(Choice::Rock, Choice::Scissors);
        assert!(!game.is_over());
        game.play_against(Choice::Paper, Choice::Rock);
        assert!(game.is_over());
        assert_eq!(game.game_over_message(), "GAME OVER: Player WINS (2 - 0)");
    }

    #[test]
    fn test_match_ends_after_best_of_rounds() {
        let mut game = Match::new(3);
        for _ in 0..3 {
            game.play_against(Choice::Rock, Choice::Rock);
        }
        assert!(game.is_over());
        assert_eq!(game.rounds_played(), 3);
        assert_eq!(game.game_over_message(), "GAME OVER: DRAW (0 - 0)");
    }

    #[test]
    fn test_round_messages() {
        let mut game = Match::new(9);
        assert_eq!(game.round_message(), None);
        game.play_against(Choice::Rock, Choice::Rock);
        assert_eq!(game.round_message().unwrap(), "Draw! Player (Rock) - CPU (Rock)");
        game.play_against(Choice::Rock, Choice::Scissors);
        assert_eq!(game.round_message().unwrap(), "Player (Rock) beats CPU (Scissors)");
        game.play_against(Choice::Rock, Choice::Paper);
        assert_eq!(game.round_message().unwrap(), "Player (Rock) loses to CPU (Paper)");
    }

    #[test]
    fn test_forfeit() {
        let mut game = Match::new(3);
        game.play_against(Choice::Scissors, Choice::Rock);
        game.forfeit();
        assert!(game.is_over());
        assert_eq!(game.game_over_message(), "Game ended by player");
    }
}
