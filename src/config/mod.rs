//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `STALK_LEDGER`
//! prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use stalk_ledger::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("ledger data in {}", config.store.data_dir.display());
//! ```

mod error;
mod forecast;
mod store;

pub use error::{ConfigError, ValidationError};
pub use forecast::ForecastConfig;
pub use store::StoreConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Ledger store configuration
    #[serde(default)]
    pub store: StoreConfig,

    /// Forecast upstream configuration
    #[serde(default)]
    pub forecast: ForecastConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present (for development), then reads
    /// environment variables:
    ///
    /// - `STALK_LEDGER__STORE__DATA_DIR=/var/lib/ledger` -> `store.data_dir`
    /// - `STALK_LEDGER__FORECAST__TIMEOUT_SECS=5` -> `forecast.timeout_secs`
    ///
    /// Every value has a default, so an empty environment is valid.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STALK_LEDGER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.store.validate()?;
        self.forecast.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.forecast.max_retries, 1);
    }
}
