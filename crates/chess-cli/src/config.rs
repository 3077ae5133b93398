//! Configuration file loading.
//!
//! Settings come from `chess.toml` in the current directory unless another
//! path is given. Every key is optional.
//!
//! ```toml
//! save_dir = "save"
//! default_save_name = "saved_game"
//! ascii = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::storage::is_valid_save_name;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "chess.toml";

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The default save name is not a usable file name.
    #[error("Invalid default_save_name '{0}': use letters, numbers and underscore")]
    InvalidSaveName(String),
}

/// Terminal game settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory for saved games. Defaults to `save`.
    #[serde(default = "default_save_dir")]
    pub save_dir: PathBuf,
    /// Name used by `save` and `load` without an argument.
    /// Defaults to `saved_game`.
    #[serde(default = "default_save_name")]
    pub default_save_name: String,
    /// Draw pieces as letters instead of chess glyphs.
    #[serde(default)]
    pub ascii: bool,
}

fn default_save_dir() -> PathBuf {
    PathBuf::from("save")
}

fn default_save_name() -> String {
    "saved_game".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            save_dir: default_save_dir(),
            default_save_name: default_save_name(),
            ascii: false,
        }
    }
}

impl Config {
    /// Loads the configuration from `path`.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// [`ConfigError::ParseError`] if it is not valid TOML, or
    /// [`ConfigError::InvalidSaveName`] if the default save name is unusable.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        if !is_valid_save_name(&config.default_save_name) {
            return Err(ConfigError::InvalidSaveName(config.default_save_name));
        }
        Ok(config)
    }
}
