//! Error types for configuration and settings handling.

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no user config directory available")]
    NoConfigDir,

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("config file is malformed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid setting: {0}")]
    InvalidSetting(String),
}

impl ConfigError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NoConfigDir => "Could not locate a settings directory.",
            ConfigError::Io(_) => "Failed to read settings. Using defaults.",
            ConfigError::Parse(_) => "Settings file is malformed. Check your settings.",
            ConfigError::Serialize(_) => "Failed to save settings.",
            ConfigError::InvalidSetting(_) => "A setting has an invalid value.",
        }
    }
}
