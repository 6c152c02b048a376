use client_core::error::CoreError;

use common::ErrorLocation;

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by CLI commands.
///
/// Serializable (tagged by variant) so the structured form, location
/// included, can be handed to anything that consumes JSON.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum TalentScoutError {
    /// Error from this App
    #[error("Talent Scout Error: {message} {location}")]
    App {
        message: String,
        location: ErrorLocation,
    },

    /// Error from client-core operations (config, API client, session)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// The service answered with a non-success status
    #[error("Service Error: {message} (status {status}) {location}")]
    Service {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    /// Command-line input could not be used
    #[error("Invalid Input Error: {message} {location}")]
    InvalidInput {
        message: String,
        location: ErrorLocation,
    },
}

impl From<CoreError> for TalentScoutError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        let location = ErrorLocation::caller();

        match error {
            CoreError::JobPostingClient(client_error) => match client_error.status() {
                Some(status) => TalentScoutError::Service {
                    status: status.0,
                    message: client_error.message().to_string(),
                    location,
                },
                None => TalentScoutError::Core {
                    message: client_error.to_string(),
                    location,
                },
            },
            other => TalentScoutError::Core {
                message: other.to_string(),
                location,
            },
        }
    }
}
