//! Error types for carconf

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    /// A vehicle was assembled from components that do not fit together
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A query that needs at least one vehicle got none
    #[error("No vehicles to compare")]
    EmptyInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to load fleet: {0}")]
    FleetLoad(String),

    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_message() {
        let err = Error::InvalidConfiguration("a vehicle needs 4 wheels, got 3".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: a vehicle needs 4 wheels, got 3"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let err: Error = ConfigError::NotFound.into();
        assert!(matches!(err, Error::Config(ConfigError::NotFound)));
    }
}
