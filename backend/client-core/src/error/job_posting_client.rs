use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum JobPostingClientError {
    /// Transport failure: the request could not be sent or the response not received.
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    /// Non-success status. `message` is the server-supplied text or the status fallback.
    #[error("Server Error: {message} (status {status}) {location}")]
    Server {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },
}

impl JobPostingClientError {
    /// Message the caller should show to a user.
    ///
    /// For [`JobPostingClientError::Server`] this is exactly the text resolved
    /// from the error body, without the status or location decoration.
    pub fn message(&self) -> &str {
        match self {
            JobPostingClientError::Http { message, .. }
            | JobPostingClientError::Json { message, .. }
            | JobPostingClientError::UrlParse { message, .. }
            | JobPostingClientError::Server { message, .. } => message,
        }
    }

    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            JobPostingClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<url::ParseError> for JobPostingClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        JobPostingClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for JobPostingClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        JobPostingClientError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for JobPostingClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        JobPostingClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
