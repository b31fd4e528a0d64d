//! Play configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_droptoken::Symbol;
use tracing::{debug, info, instrument};

/// Config file read when no path is given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "droptoken.toml";

/// Settings for a game in the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Symbol that moves first.
    #[serde(default = "default_first_mover")]
    first_mover: Symbol,

    /// Symbol played by the computer.
    #[serde(default = "default_computer")]
    computer: Symbol,

    /// Both symbols are entered by hand.
    #[serde(default)]
    human_only: bool,

    /// Seed for the computer's column choice.
    #[serde(default)]
    seed: Option<u64>,

    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_first_mover() -> Symbol {
    Symbol::X
}

fn default_computer() -> Symbol {
    Symbol::X
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            first_mover: default_first_mover(),
            computer: default_computer(),
            human_only: false,
            seed: None,
            log_filter: default_log_filter(),
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

        info!(first_mover = %config.first_mover, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the explicit path, or the default file when it exists, or
    /// falls back to defaults.
    ///
    /// An explicit path that cannot be read is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        first_mover: Option<Symbol>,
        computer: Option<Symbol>,
        human_only: bool,
        seed: Option<u64>,
    ) -> Self {
        if let Some(first_mover) = first_mover {
            self.first_mover = first_mover;
        }
        if let Some(computer) = computer {
            self.computer = computer;
        }
        self.human_only |= human_only;
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Symbol the computer plays, unless the game is human-only.
    pub fn computer_seat(&self) -> Option<Symbol> {
        (!self.human_only).then_some(self.computer)
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
