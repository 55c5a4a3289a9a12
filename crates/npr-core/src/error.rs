//! Error types for npr-core

use thiserror::Error;

/// Result type alias using npr-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for npr
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration format
    #[error("Invalid configuration format: {message}")]
    InvalidConfig { message: String },

    /// Configuration file exists but could not be read
    #[error("Failed to read configuration file {path}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Project name cannot be used as a directory name
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    /// Home directory could not be determined
    #[error("Could not determine home directory")]
    HomeDirNotFound,

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create a config read error
    pub fn config_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid project name error
    pub fn invalid_project_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidProjectName {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
