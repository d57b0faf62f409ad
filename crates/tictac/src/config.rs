//! Player-facing settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictac_core::Mark;
use tracing::{debug, info, instrument};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "tictac.toml";

/// Console settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number empty cells when rendering the board.
    show_hints: bool,

    /// Name announced for X.
    player_x: String,

    /// Name announced for O.
    player_o: String,

    /// Log filter used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_hints: true,
            player_x: "player1".to_string(),
            player_o: "player2".to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Returns the name announced for `mark`.
    pub fn player_name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.player_x,
            Mark::O => &self.player_o,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(player_x = %config.player_x, player_o = %config.player_o, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if given, else `tictac.toml` if present, else defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(path, Path::new("."))
    }

    /// Like [`Config::load`], looking for `tictac.toml` in `dir`.
    #[instrument]
    pub fn load_from(path: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let discovered = dir.join(DEFAULT_CONFIG_FILE);
        if discovered.is_file() {
            Self::from_file(discovered)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
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
