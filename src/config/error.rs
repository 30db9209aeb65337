//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Logging initialisation failed: {0}")]
    LoggingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Chart size must be positive, got {0}")]
    InvalidSize(f64),

    #[error("Chart max_radius must be positive, got {0}")]
    InvalidRadius(f64),

    #[error("Chart label_offset must not be negative, got {0}")]
    InvalidLabelOffset(f64),

    #[error("Chart of size {size} cannot fit radius {radius} plus label offset {offset}")]
    ChartTooSmall { size: f64, radius: f64, offset: f64 },

    #[error("Grid level {0} is outside (0, 10]")]
    InvalidGridLevel(f64),

    #[error("Storage data_dir must not be empty for the file backend")]
    EmptyDataDir,

    #[error("Invalid log filter '{0}'")]
    InvalidLogLevel(String),
}
