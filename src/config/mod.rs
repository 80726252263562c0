//! Configuration management for MediCitas.
//!
//! This module handles loading and saving the user's TOML configuration file.
//! Only presentation preferences live here; appointment data is never persisted.

mod settings;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

pub use settings::{ReminderLead, Settings};

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform configuration directory could not be determined.
    #[error("could not determine configuration directory")]
    NoConfigDir,

    /// The configuration directory could not be created.
    #[error("failed to create configuration directory: {0}")]
    CreateDirError(#[source] std::io::Error),

    /// The configuration file could not be read.
    #[error("failed to read configuration file: {0}")]
    ReadError(#[source] std::io::Error),

    /// The configuration file could not be written.
    #[error("failed to write configuration file: {0}")]
    WriteError(#[source] std::io::Error),

    /// The configuration file is not valid TOML for [`Config`].
    #[error("failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// A setting has an invalid value.
    #[error("invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// The application configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Application-wide settings.
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// File name of the configuration file inside the config directory.
    pub const FILE_NAME: &'static str = "config.toml";

    /// Get the configuration directory.
    ///
    /// - Linux: `~/.config/medicitas/`
    /// - macOS: `~/Library/Application Support/medicitas/`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\medicitas\`
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("medicitas"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(Self::FILE_NAME))
    }

    /// Load the configuration from a specific file.
    ///
    /// A missing file is not an error and yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed, or
    /// fails validation.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;

        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Save the configuration to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::CreateDirError)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(ConfigError::WriteError)?;

        info!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Validate all settings.
    pub fn validate(&self) -> Result<()> {
        self.settings.validate()
    }
}
