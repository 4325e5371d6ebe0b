//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is loaded
//! with the `MASQUERADE` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use masquerade::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reviewing {} profiles per session", config.discovery.profiles_per_session);
//! ```

mod auth;
mod discovery;
mod error;
mod gateway;

pub use auth::AuthConfig;
pub use discovery::DiscoveryConfig;
pub use error::{ConfigError, ValidationError};
pub use gateway::GatewayConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the Masquerade core.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Discovery flow configuration (batch size, board size, pick count)
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Discovery backend gateway configuration
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Campus identity configuration
    #[serde(default)]
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MASQUERADE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MASQUERADE__DISCOVERY__REQUIRED_SELECTIONS=2` -> `discovery.required_selections = 2`
    /// - `MASQUERADE__GATEWAY__BASE_URL=...` -> `gateway.base_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MASQUERADE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.discovery.validate()?;
        self.gateway.validate()?;
        self.auth.validate()?;
        Ok(())
    }
}
