//! Player-facing configuration loaded from TOML.

use crate::mode::GameMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for an interactive session.
///
/// Every field is optional in the file; missing ones fall back to defaults.
/// When `mode` or the player names are present, the matching setup screen
/// is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Preselected game mode.
    #[serde(default)]
    mode: Option<GameMode>,

    /// Name of the player using X.
    #[serde(default)]
    player_x: Option<String>,

    /// Name of the player using O (ignored against the computer).
    #[serde(default)]
    player_o: Option<String>,

    /// Display name of the computer opponent.
    #[serde(default = "default_computer_name")]
    computer_name: String,

    /// Ring the terminal bell when a game ends.
    #[serde(default = "default_sound")]
    sound: bool,

    /// Where the TUI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_computer_name() -> String {
    "Robot".to_string()
}

fn default_sound() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictac.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: None,
            player_x: None,
            player_o: None,
            computer_name: default_computer_name(),
            sound: default_sound(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = ?config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        mode: Option<GameMode>,
        player_x: Option<String>,
        player_o: Option<String>,
    ) -> Self {
        if mode.is_some() {
            self.mode = mode;
        }
        if player_x.is_some() {
            self.player_x = player_x;
        }
        if player_o.is_some() {
            self.player_o = player_o;
        }
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
