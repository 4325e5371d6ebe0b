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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Discovery counts must be at least 1")]
    ZeroDiscoveryCount,

    #[error("required_selections cannot exceed traits_per_profile")]
    SelectionsExceedBoard,

    #[error("Invalid gateway base URL format")]
    InvalidGatewayUrl,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid campus domain")]
    InvalidCampusDomain,
}
