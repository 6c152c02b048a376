use common::ErrorLocation;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config Validation Error: {reason} {location}")]
    ValidationError {
        location: ErrorLocation,
        reason: String,
    },

    #[error("Config Env Error: {key}: {reason} {location}")]
    EnvError {
        location: ErrorLocation,
        key: String,
        reason: String,
    },
}
