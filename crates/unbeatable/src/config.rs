//! Configuration for the interactive game loop.

use clap::ValueEnum;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};
use unbeatable_tictactoe::Player;

/// Who makes the first move of each game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FirstMover {
    /// The human moves first.
    Human,
    /// The engine moves first.
    Engine,
    /// Ask before every game.
    #[default]
    Ask,
}

/// Settings for `unbeatable play`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Mark the human plays; the engine takes the other.
    human_mark: Player,

    /// Who moves first.
    first: FirstMover,

    /// Print the 1-9 position key under the board.
    show_guide: bool,

    /// Offer another game after each result.
    play_again_prompt: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human_mark: Player::X,
            first: FirstMover::Ask,
            show_guide: true,
            play_again_prompt: true,
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human_mark = %config.human_mark, first = ?config.first, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns the engine's mark.
    pub fn engine_mark(&self) -> Player {
        self.human_mark.opponent()
    }

    /// Overrides the human's mark.
    pub fn with_human_mark(mut self, human_mark: Player) -> Self {
        self.human_mark = human_mark;
        self
    }

    /// Overrides who moves first.
    pub fn with_first(mut self, first: FirstMover) -> Self {
        self.first = first;
        self
    }

    /// Overrides whether the position guide is shown.
    pub fn with_show_guide(mut self, show_guide: bool) -> Self {
        self.show_guide = show_guide;
        self
    }

    /// Overrides whether another game is offered.
    pub fn with_play_again_prompt(mut self, play_again_prompt: bool) -> Self {
        self.play_again_prompt = play_again_prompt;
        self
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
