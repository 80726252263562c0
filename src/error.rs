//! Centralized error types for MediCitas.
//!
//! The domain operations of the app never fail; errors only come from the
//! edges: the configuration file and the terminal. All error types use
//! `thiserror`.

use thiserror::Error;

use crate::config::ConfigError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// IO errors (file system, terminal backend).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal-related errors.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl AppError {
    /// Create a terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        AppError::Terminal(msg.into())
    }

    /// Get a user-friendly message for display in a toast.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find the configuration directory. Using default settings."
                        .to_string()
                }
                ConfigError::CreateDirError(_) | ConfigError::WriteError(_) => {
                    "Could not save settings. Check file permissions.".to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read the settings file. Using default settings.".to_string()
                }
                ConfigError::ParseError(_) => {
                    "Settings file is invalid. Using default settings.".to_string()
                }
                ConfigError::SerializeError(_) => {
                    "Could not save settings. Internal error.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Settings error: {}", msg),
            },
            AppError::Io(_) => "A file operation failed. Check file permissions.".to_string(),
            AppError::Terminal(msg) => format!("Terminal error: {}", msg),
        }
    }

    /// Check if this error prevents the application from running.
    ///
    /// Configuration problems are not critical: the app falls back to defaults.
    pub fn is_critical(&self) -> bool {
        matches!(self, AppError::Terminal(_) | AppError::Io(_))
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
