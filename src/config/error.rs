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
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Filename prefix may only contain letters, digits, '-' and '_'")]
    InvalidFilenamePrefix,

    #[error("UTC offset must be within ±840 minutes, got {0}")]
    InvalidUtcOffset(i32),

    #[error("Invalid date-time format: {0}")]
    InvalidDateTimeFormat(String),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
