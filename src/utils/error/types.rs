//! Error types for threat-sentinel

use thiserror::Error;

/// Result type alias for threat-sentinel
pub type Result<T> = std::result::Result<T, SentinelError>;

/// Main error type for threat-sentinel
#[derive(Error, Debug)]
pub enum SentinelError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
