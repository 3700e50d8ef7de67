//! TOML configuration for the console front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_ntoe::{BoardSize, SessionSettings};
use tracing::{debug, info, instrument, warn};

/// Settings read from `ntoe.toml`. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct NtoeConfig {
    /// Board side length (3, 4 or 5).
    board_size: usize,

    /// Play against the computer, which takes O.
    opponent: bool,

    /// Offer winning-move hints.
    hints: bool,

    /// Seed for the computer's random choices. Unset means OS entropy.
    seed: Option<u64>,
}

impl Default for NtoeConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::default().side(),
            opponent: false,
            hints: true,
            seed: None,
        }
    }
}

impl NtoeConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            warn!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks values serde cannot.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board()?;
        Ok(())
    }

    /// The configured board size.
    pub fn board(&self) -> Result<BoardSize, ConfigError> {
        BoardSize::try_from(self.board_size).map_err(|e| ConfigError::new(e.to_string()))
    }

    /// Session settings for the engine.
    pub fn session_settings(&self) -> Result<SessionSettings, ConfigError> {
        Ok(SessionSettings::new(self.board()?, self.opponent, self.hints))
    }

    /// Applies command-line overrides on top of the file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        board_size: Option<usize>,
        opponent: bool,
        no_hints: bool,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if let Some(size) = board_size {
            self.board_size = size;
        }
        self.opponent |= opponent;
        if no_hints {
            self.hints = false;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self.validate()?;
        Ok(self)
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
