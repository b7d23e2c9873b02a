//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Model timeout must be shorter than the request timeout")]
    ModelTimeoutTooLong,

    #[error("Temperature must be between 0 and 2")]
    InvalidTemperature,

    #[error("Max tokens must be positive")]
    InvalidMaxTokens,

    #[error("Max chunk length must be positive")]
    InvalidChunkLength,

    #[error("Checkpoint threshold must be positive")]
    InvalidCheckpointThreshold,

    #[error("Persona target age must be positive")]
    InvalidTargetAge,
}
