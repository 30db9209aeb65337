//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `LIFE_WHEEL_` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use life_wheel::config::{init_tracing, AppConfig};
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! init_tracing(&config.logging).expect("Failed to install subscriber");
//! ```

mod chart;
mod error;
mod logging;
mod resources;
mod storage;

pub use chart::ChartConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{init_tracing, LogFormat, LoggingConfig};
pub use resources::ResourcesConfig;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Radar chart layout
    #[serde(default)]
    pub chart: ChartConfig,

    /// Assessment persistence
    #[serde(default)]
    pub storage: StorageConfig,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Outbound resource links
    #[serde(default)]
    pub resources: ResourcesConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `LIFE_WHEEL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `LIFE_WHEEL__CHART__MAX_RADIUS=140` -> `chart.max_radius = 140`
    /// - `LIFE_WHEEL__CHART__GRID_LEVELS=5,10` -> `chart.grid_levels = [5, 10]`
    /// - `LIFE_WHEEL__STORAGE__BACKEND=file` -> `storage.backend = File`
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
                    .prefix("LIFE_WHEEL")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("chart.grid_levels"),
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
        self.chart.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "LIFE_WHEEL__CHART__SIZE",
        "LIFE_WHEEL__CHART__MAX_RADIUS",
        "LIFE_WHEEL__CHART__GRID_LEVELS",
        "LIFE_WHEEL__STORAGE__BACKEND",
        "LIFE_WHEEL__STORAGE__DATA_DIR",
        "LIFE_WHEEL__LOGGING__FORMAT",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_nested_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("LIFE_WHEEL__CHART__MAX_RADIUS", "120");
        env::set_var("LIFE_WHEEL__STORAGE__BACKEND", "file");
        env::set_var("LIFE_WHEEL__STORAGE__DATA_DIR", "/tmp/wheel");
        env::set_var("LIFE_WHEEL__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.chart.max_radius, 120.0);
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/wheel"));
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_grid_levels_parse_as_list() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("LIFE_WHEEL__CHART__GRID_LEVELS", "5,10");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.chart.grid_levels, vec![5.0, 10.0]);
    }

    #[test]
    fn test_validate_reports_chart_errors() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("LIFE_WHEEL__CHART__SIZE", "100");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::ChartTooSmall { .. })
        ));
    }
}
