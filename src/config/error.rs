//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),

    #[error("Rule weight {0} must be a non-negative number")]
    NegativeWeight(&'static str),

    #[error("Threshold {0} must be a positive number")]
    NonPositiveThreshold(&'static str),

    #[error("Thresholds must satisfy review <= revoke <= max risk score")]
    ThresholdsOutOfOrder,

    #[error("Citation excerpt length must be greater than zero")]
    InvalidExcerptLength,

    #[error("Sync interval must be greater than zero")]
    InvalidSyncInterval,

    #[error("Auto-sync period must be greater than zero")]
    InvalidAutoSyncPeriod,
}
