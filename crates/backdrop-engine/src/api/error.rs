//! Error types for field configuration.

use std::fmt;

/// Errors that can occur while loading a [`FieldConfig`](super::config::FieldConfig).
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON could not be parsed into a config.
    Parse(serde_json::Error),
    /// The config parsed but describes a field that cannot be simulated.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "Failed to parse field config: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid field config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
