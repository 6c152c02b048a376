//! Client configuration.
//!
//! The API base address is resolved once at process start and handed to
//! [`crate::JobPostingClient::new`]. Nothing reads the environment after that.
//!
//! Lookup order:
//! 1. `.env` in the current directory (loaded into the process environment, non-fatal if missing)
//! 2. `API_BASE_URL` environment variable
//! 3. [`crate::DEFAULT_API_BASE_URL`]

use crate::DEFAULT_API_BASE_URL;
use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::env::{self, VarError};
use std::panic::Location;

use log::{debug, info};

/// Environment variable holding the API base address.
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Build a config for an explicit base address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if the address is empty or is
    /// not an `http://` / `https://` URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let config = Self {
            base_url: base_url.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Resolve from the process environment, loading `.env` first.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(|key| env::var(key))
    }

    /// Resolve using an arbitrary variable lookup.
    ///
    /// An absent or empty variable selects [`DEFAULT_API_BASE_URL`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        match lookup(API_BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => {
                info!("Using {API_BASE_URL_ENV}={}", value.trim());
                Self::new(value.trim())
            }
            Ok(_) | Err(VarError::NotPresent) => {
                debug!("{API_BASE_URL_ENV} not set, using {DEFAULT_API_BASE_URL}");
                Ok(Self::default())
            }
            Err(VarError::NotUnicode(_)) => Err(ConfigError::EnvError {
                location: ErrorLocation::from(Location::caller()),
                key: API_BASE_URL_ENV.to_string(),
                reason: "contains invalid unicode".to_string(),
            }),
        }
    }

    /// Base address as configured.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base address with exactly one trailing slash, so relative endpoint
    /// paths join underneath any path prefix instead of replacing it.
    pub fn base_url_for_join(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "base_url cannot be empty string".to_string(),
            });
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid URL format: {}", self.base_url),
            });
        }

        Ok(())
    }
}

/// Load `.env` from the current directory into the process environment.
///
/// Missing or unreadable files are not an error.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded .env from: {:?}", path),
        Err(e) => debug!("No .env loaded: {}", e),
    }
}
