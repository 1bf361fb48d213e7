//! TOML configuration for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Front-end settings, loadable from TOML. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Name used for the first player when the name field is blank.
    player_one_default: String,

    /// Name used for the second player when the name field is blank.
    player_two_default: String,

    /// Log file written while the terminal UI owns the screen.
    log_file: PathBuf,

    /// `tracing` filter directive, overridden by `RUST_LOG`.
    log_filter: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            player_one_default: "Player 1".to_string(),
            player_two_default: "Player 2".to_string(),
            log_file: PathBuf::from("tictactoe.log"),
            log_filter: "info".to_string(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_one_default.trim().is_empty() {
            return Err(ConfigError::new("player_one_default must not be blank"));
        }
        if self.player_two_default.trim().is_empty() {
            return Err(ConfigError::new("player_two_default must not be blank"));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::new("log_filter must not be empty"));
        }
        Ok(())
    }

    /// Resolves the names typed by the players, substituting defaults for
    /// blank input.
    pub fn player_names(&self, first: &str, second: &str) -> (String, String) {
        (
            or_default(first, &self.player_one_default),
            or_default(second, &self.player_two_default),
        )
    }

    /// Renders the default configuration as TOML.
    pub fn default_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&Self::default())
            .map_err(|e| ConfigError::new(format!("Failed to render config: {}", e)))
    }
}

fn or_default(name: &str, default: &str) -> String {
    match name.trim() {
        "" => default.to_string(),
        trimmed => trimmed.to_string(),
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
