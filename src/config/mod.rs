//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `GROW_RICH_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use feel_and_grow_rich::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Sessions stored in {}", config.storage.sessions_path().display());
//! ```

mod error;
mod export;
mod logging;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use logging::LoggingConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

use crate::adapters::export::ExportSettings;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Export rendering (filenames, document text, timestamp display)
    #[serde(default)]
    pub export: ExportConfig,

    /// Session storage location
    #[serde(default)]
    pub storage: StorageConfig,

    /// Tracing subscriber setup
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `GROW_RICH` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `GROW_RICH__EXPORT__FILENAME_PREFIX=journey` -> `export.filename_prefix = "journey"`
    /// - `GROW_RICH__STORAGE__DATA_DIR=/var/lib/grow` -> `storage.data_dir = "/var/lib/grow"`
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
                    .prefix("GROW_RICH")
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
        self.export.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Exporter settings derived from the `export` section.
    pub fn export_settings(&self) -> Result<ExportSettings, ValidationError> {
        self.export.to_settings()
    }
}
