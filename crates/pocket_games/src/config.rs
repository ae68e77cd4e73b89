//! Game configuration loaded from TOML.
//!
//! ```toml
//! [theme]
//! colors = false
//!
//! [higher_lower]
//! min = 1
//! max = 1000
//!
//! [memory]
//! display_secs = 5
//!
//! [word_guess]
//! max_incorrect = 8
//! words = ["rust", "cargo"]
//! ```
//!
//! Every key is optional.

use crate::theme::Theme;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GamesConfig {
    /// Colours.
    #[serde(default)]
    theme: Theme,
    /// Higher-or-lower range.
    #[serde(default)]
    higher_lower: HigherLowerSettings,
    /// Memory game pacing.
    #[serde(default)]
    memory: MemorySettings,
    /// Word guess dictionary and limits.
    #[serde(default)]
    word_guess: WordGuessSettings,
}

impl GamesConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.higher_lower.min > self.higher_lower.max {
            return Err(ConfigError::new(format!(
                "higher_lower.min ({}) exceeds higher_lower.max ({})",
                self.higher_lower.min, self.higher_lower.max
            )));
        }
        if self.word_guess.words.is_empty() {
            return Err(ConfigError::new("word_guess.words must not be empty".to_string()));
        }
        if let Some(word) = self
            .word_guess
            .words
            .iter()
            .find(|w| w.is_empty() || !w.chars().all(|c| c.is_ascii_alphabetic()))
        {
            return Err(ConfigError::new(format!(
                "word_guess.words entry {word:?} must contain only ASCII letters"
            )));
        }
        if self.word_guess.max_incorrect == 0 {
            return Err(ConfigError::new(
                "word_guess.max_incorrect must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Number range for higher-or-lower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct HigherLowerSettings {
    /// Smallest number drawn.
    #[serde(default = "default_min")]
    min: i64,
    /// Largest number drawn.
    #[serde(default = "default_max")]
    max: i64,
}

fn default_min() -> i64 {
    1
}

fn default_max() -> i64 {
    100
}

impl Default for HigherLowerSettings {
    fn default() -> Self {
        Self::new(default_min(), default_max())
    }
}

/// Pacing for the memory game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct MemorySettings {
    /// Seconds the sequence stays on screen.
    #[serde(default = "default_display_secs")]
    display_secs: u64,
    /// Pause after a wrong colour.
    #[serde(default = "default_retry_pause_secs")]
    retry_pause_secs: u64,
    /// Pause after a completed round.
    #[serde(default = "default_advance_pause_secs")]
    advance_pause_secs: u64,
    /// Last playable round.
    #[serde(default = "default_max_round")]
    max_round: u32,
    /// Whether to clear the screen between phases.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,
}

fn default_display_secs() -> u64 {
    3
}

fn default_retry_pause_secs() -> u64 {
    2
}

fn default_advance_pause_secs() -> u64 {
    1
}

fn default_max_round() -> u32 {
    100
}

fn default_clear_screen() -> bool {
    true
}

impl Default for MemorySettings {
    fn default() -> Self {
        Self::new(
            default_display_secs(),
            default_retry_pause_secs(),
            default_advance_pause_secs(),
            default_max_round(),
            default_clear_screen(),
        )
    }
}

/// Dictionary and limits for word guess.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct WordGuessSettings {
    /// Wrong guesses allowed before the game is lost.
    #[serde(default = "default_max_incorrect")]
    max_incorrect: u32,
    /// Words to choose from.
    #[serde(default = "default_words")]
    words: Vec<String>,
}

fn default_max_incorrect() -> u32 {
    6
}

fn default_words() -> Vec<String> {
    [
        "github",
        "actions",
        "workflow",
        "repository",
        "branch",
        "commit",
        "merge",
        "issues",
        "pull",
        "request",
        "codespace",
        "copilot",
        "project",
        "discussion",
        "milestone",
        "release",
        "clone",
        "fork",
        "gist",
        "markdown",
        "license",
        "readme",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for WordGuessSettings {
    fn default() -> Self {
        Self::new(default_max_incorrect(), default_words())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = GamesConfig::from_toml("").unwrap();
        assert_eq!(config, GamesConfig::default());
        assert_eq!(*config.higher_lower().max(), 100);
        assert_eq!(config.word_guess().words().len(), 22);
        assert_eq!(*config.theme().x_color(), 45);
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = GamesConfig::from_toml(
            r#"
            [theme]
            colors = false

            [higher_lower]
            max = 1000

            [memory]
            display_secs = 0
            "#,
        )
        .unwrap();
        assert!(!config.theme().colors());
        assert_eq!(*config.theme().o_color(), 226);
        assert_eq!(*config.higher_lower().min(), 1);
        assert_eq!(*config.higher_lower().max(), 1000);
        assert_eq!(*config.memory().display_secs(), 0);
        assert_eq!(*config.memory().max_round(), 100);
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let err = GamesConfig::from_toml("[higher_lower]\nmin = 10\nmax = 5\n").unwrap_err();
        assert!(err.message.contains("exceeds"));
    }

    #[test]
    fn test_empty_word_list_is_rejected() {
        assert!(GamesConfig::from_toml("[word_guess]\nwords = []\n").is_err());
    }

    #[test]
    fn test_non_letter_word_is_rejected() {
        let err = GamesConfig::from_toml("[word_guess]\nwords = [\"fork\", \"pull-request\"]\n")
            .unwrap_err();
        assert!(err.message.contains("\"pull-request\""));

        let err = GamesConfig::from_toml("[word_guess]\nwords = [\"git hub\"]\n").unwrap_err();
        assert!(err.message.contains("\"git hub\""));

        let err = GamesConfig::from_toml("[word_guess]\nwords = [\"gist\", \"\"]\n").unwrap_err();
        assert!(err.message.contains("\"\""));

        let config =
            GamesConfig::from_toml("[word_guess]\nwords = [\"Gist\", \"fork\"]\n").unwrap();
        assert_eq!(config.word_guess().words().len(), 2);
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let err = GamesConfig::from_toml("[memory\n").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = GamesConfig::load_or_default("/definitely/not/here.toml").unwrap();
        assert_eq!(config, GamesConfig::default());
    }
}
