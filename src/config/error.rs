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
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("AI max_retries {0} exceeds limit of {1}")]
    TooManyRetries(u32, u32),

    #[error("Invalid AI base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Speech rate {0} outside 0.1..=10")]
    RateOutOfRange(f32),

    #[error("Speech pitch {0} outside 0..=2")]
    PitchOutOfRange(f32),
}
