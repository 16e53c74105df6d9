//! Engine configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PERSONA_ENGINE` prefix and nested values use double underscores as separators.
//! Every setting has a default, so an empty environment yields a usable config.
//!
//! # Example
//!
//! ```no_run
//! use persona_engine::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Default tier: {}", config.selection.default_tier);
//! ```

mod compatibility;
mod error;
mod selection;
mod telemetry;

pub use compatibility::CompatibilityConfig;
pub use error::{ConfigError, ValidationError};
pub use selection::{ExclusionFallback, SelectionConfig};
pub use telemetry::TelemetryConfig;

use serde::Deserialize;

/// Root engine configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Question selection (tier, exclusion policy, seed, bank file)
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Compatibility scoring options
    #[serde(default)]
    pub compatibility: CompatibilityConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PERSONA_ENGINE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PERSONA_ENGINE__SELECTION__DEFAULT_TIER=quick` -> `selection.default_tier = quick`
    /// - `PERSONA_ENGINE__SELECTION__FRAMEWORKS=prism,mbti` -> `selection.frameworks = [prism, mbti]`
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
                    .prefix("PERSONA_ENGINE")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("selection.frameworks")
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
        self.selection.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}
