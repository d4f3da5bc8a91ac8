//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `CLEARANCE_OS` prefix
//! and `__` between nested keys. Every value has a default.
//!
//! # Example
//!
//! ```no_run
//! use clearance_os::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Revoke threshold: {}", config.engine.revoke_threshold);
//! ```

mod engine;
mod error;
mod extraction;
mod legacy;
mod logging;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use extraction::ExtractionConfig;
pub use legacy::LegacyConfig;
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Simulated extractor timing
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Rule weights and thresholds
    #[serde(default)]
    pub engine: EngineConfig,

    /// Mainframe sync timing
    #[serde(default)]
    pub legacy: LegacyConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `CLEARANCE_OS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `CLEARANCE_OS__ENGINE__REVOKE_THRESHOLD=5` -> `engine.revoke_threshold = 5.0`
    /// - `CLEARANCE_OS__LEGACY__AUTO_SYNC_SECS=30` -> `legacy.auto_sync_secs = Some(30)`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CLEARANCE_OS")
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
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.engine.validate()?;
        self.legacy.validate()?;
        Ok(())
    }
}
