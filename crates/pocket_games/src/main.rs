//! Pocket Games - terminal entry point

use anyhow::{Context, Result, bail};
use clap::Parser;
use pocket_games::games::{
    cointoss, higher_lower, memory, rock_paper_scissors, tictactoe, word_guess,
};
use pocket_games::{Cli, Command, GamesConfig, HigherLowerSettings, TerminalPrompter};
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the game screen.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GamesConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    run(cli.command, &config)
}

/// Dispatch a subcommand to its game.
#[instrument(skip(config))]
fn run(command: Command, config: &GamesConfig) -> Result<()> {
    let mut prompter = TerminalPrompter::stdio();
    let mut rng = rand::rng();
    let mut out = io::stdout();
    let theme = config.theme();

    match command {
        Command::Cointoss { guess } => {
            let streak = cointoss::run(&mut prompter, &mut rng, &mut out, theme, guess)?;
            info!(streak, "Coin toss session over");
        }
        Command::Higherlower { min, max } => {
            let defaults = config.higher_lower();
            let settings = HigherLowerSettings::new(
                min.unwrap_or(*defaults.min()),
                max.unwrap_or(*defaults.max()),
            );
            if settings.min() > settings.max() {
                bail!(
                    "min ({}) must not be greater than max ({})",
                    settings.min(),
                    settings.max()
                );
            }
            let streak = higher_lower::run(&mut prompter, &mut rng, &mut out, theme, settings)?;
            info!(streak, "Higher or lower session over");
        }
        Command::Memorygame => {
            let round = memory::run(&mut prompter, &mut rng, &mut out, theme, *config.memory())?;
            info!(round, "Memory session over");
        }
        Command::Rockpaperscissors => {
            let result = rock_paper_scissors::run(&mut prompter, &mut rng, &mut out, theme)?;
            info!(
                player = result.player_score(),
                computer = result.computer_score(),
                "Rock paper scissors session over"
            );
        }
        Command::Tictactoe => {
            let finish = tictactoe::run(&mut prompter, &mut rng, &mut out, theme)?;
            info!(?finish, "Tic-tac-toe session over");
        }
        Command::Wordguess => {
            let played =
                word_guess::run(&mut prompter, &mut rng, &mut out, theme, config.word_guess())?;
            info!(played, "Word guess session over");
        }
    }
    Ok(())
}
