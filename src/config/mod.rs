//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `RC_BEAM_CHAT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use rc_beam_chat::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Inference rounds: {}", config.inference.rounds);
//! ```

mod bundle;
mod chat;
mod error;
mod inference;
mod logging;

pub use bundle::BundleConfig;
pub use chat::ChatConfig;
pub use error::{ConfigError, ValidationError};
pub use inference::InferenceConfig;
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Default bundle artifact
    #[serde(default)]
    pub bundle: BundleConfig,

    /// Iterative inference settings
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Prompt language and intent sensitivity
    #[serde(default)]
    pub chat: ChatConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `RC_BEAM_CHAT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `RC_BEAM_CHAT__INFERENCE__ROUNDS=5` -> `inference.rounds = 5`
    /// - `RC_BEAM_CHAT__BUNDLE__PATH=...` -> `bundle.path = ...`
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
                    .prefix("RC_BEAM_CHAT")
                    .separator("__")
                    .try_parsing(true),
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
        self.bundle.validate()?;
        self.inference.validate()?;
        self.chat.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
