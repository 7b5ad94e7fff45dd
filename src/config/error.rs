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
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Inference rounds must be between 1 and {max}, got {actual}")]
    InvalidRounds { max: u32, actual: u32 },

    #[error("Intent keyword threshold must be at least 1")]
    InvalidKeywordThreshold,

    #[error("Unsupported bundle file extension: {0}")]
    UnsupportedBundleFormat(String),

    #[error("Log filter must not be empty")]
    EmptyLogFilter,
}
