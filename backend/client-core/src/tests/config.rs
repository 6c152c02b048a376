// Unit tests for config module
// Tests base URL resolution without touching the process environment

use crate::DEFAULT_API_BASE_URL;
use crate::config::{API_BASE_URL_ENV, ClientConfig};
use crate::error::config::ConfigError;

use std::env::VarError;

/// **VALUE**: Verifies the loopback default is used when the variable is missing.
///
/// **WHY THIS MATTERS**: Local development runs without any environment setup.
/// If the fallback is lost, the client fails to start instead of talking to the
/// local backend.
///
/// **BUG THIS CATCHES**: Would catch if a missing variable were treated as an
/// error or resolved to an empty base URL.
#[test]
fn given_missing_variable_when_resolved_then_uses_default_base_url() {
    // GIVEN: A lookup that has no variables
    let lookup = |_: &str| Err(VarError::NotPresent);

    // WHEN: Resolving the config
    let config = ClientConfig::from_lookup(lookup).unwrap();

    // THEN: Should be the local default
    assert_eq!(config.base_url(), DEFAULT_API_BASE_URL);
    assert_eq!(config.base_url(), "http://localhost:8000");
}

#[test]
fn given_empty_variable_when_resolved_then_uses_default_base_url() {
    let lookup = |_: &str| Ok(String::from("   "));

    let config = ClientConfig::from_lookup(lookup).unwrap();

    assert_eq!(config.base_url(), DEFAULT_API_BASE_URL);
}

/// **VALUE**: Verifies the configured variable overrides the default.
///
/// **BUG THIS CATCHES**: Would catch if the lookup reads the wrong key or
/// ignores the value.
#[test]
fn given_variable_set_when_resolved_then_uses_variable() {
    // GIVEN: A lookup that only knows API_BASE_URL
    let lookup = |key: &str| {
        if key == API_BASE_URL_ENV {
            Ok(String::from("https://jobs.example.com"))
        } else {
            Err(VarError::NotPresent)
        }
    };

    // WHEN: Resolving the config
    let config = ClientConfig::from_lookup(lookup).unwrap();

    // THEN: Should use the variable's value
    assert_eq!(config.base_url(), "https://jobs.example.com");
}

#[test]
fn given_non_http_scheme_when_validated_then_returns_validation_error() {
    let result = ClientConfig::new("ftp://jobs.example.com");

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn given_empty_base_url_when_validated_then_returns_validation_error() {
    let result = ClientConfig::new("");

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

/// **VALUE**: Verifies base URLs with path prefixes keep their prefix when joined.
///
/// **WHY THIS MATTERS**: `Url::join` replaces the last path segment unless the
/// base ends in a slash. A deployment behind `/backend` would silently hit the
/// wrong paths.
#[test]
fn given_base_url_with_prefix_when_prepared_for_join_then_has_single_trailing_slash() {
    let bare = ClientConfig::new("http://host/backend").unwrap();
    let slashed = ClientConfig::new("http://host/backend//").unwrap();

    assert_eq!(bare.base_url_for_join(), "http://host/backend/");
    assert_eq!(slashed.base_url_for_join(), "http://host/backend/");
}
