//! Match configuration loaded from TOML.

use crate::series::SeriesRules;
use derive_getters::Getters;
use derive_more::{Display, Error};
use parlor_tictactoe::Difficulty;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for an interactive series.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Level to play; decides games needed and the default difficulty.
    #[serde(default = "default_level")]
    level: u32,

    /// Overrides the level's difficulty when set.
    #[serde(default)]
    difficulty: Option<Difficulty>,

    /// Seed for the computer's random choices; entropy when unset.
    #[serde(default)]
    seed: Option<u64>,

    /// Name shown for the human player.
    #[serde(default = "default_player_name")]
    player_name: String,
}

fn default_level() -> u32 {
    1
}

fn default_player_name() -> String {
    "You".to_string()
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            difficulty: None,
            seed: None,
            player_name: default_player_name(),
        }
    }
}

impl MatchConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.level == 0 {
            return Err(ConfigError::new("Level must be at least 1".to_string()));
        }

        info!(level = config.level, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides; `None` keeps the current value.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] when the level override is 0.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        level: Option<u32>,
        difficulty: Option<Difficulty>,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if let Some(level) = level {
            if level == 0 {
                return Err(ConfigError::new("Level must be at least 1".to_string()));
            }
            self.level = level;
        }
        if difficulty.is_some() {
            self.difficulty = difficulty;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        Ok(self)
    }

    /// Difficulty that will actually be played.
    pub fn effective_difficulty(&self) -> Difficulty {
        self.difficulty
            .unwrap_or_else(|| Difficulty::for_level(self.level))
    }

    /// Series rules for this configuration.
    pub fn series_rules(&self) -> SeriesRules {
        SeriesRules::with_difficulty(self.level, self.effective_difficulty())
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
