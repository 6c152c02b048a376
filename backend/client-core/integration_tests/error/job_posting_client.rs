use client_core::error::CoreError;
use client_core::error::job_posting_client::JobPostingClientError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

/// **VALUE**: Verifies server errors include the message, status and location.
///
/// **WHY THIS MATTERS**: Logs only see the Display form. Without the status
/// and file location, a failed approval in production can't be traced.
///
/// **BUG THIS CATCHES**: Would catch if someone drops `location` or `status`
/// from the Display format.
#[test]
#[track_caller]
fn given_server_error_when_formatted_then_includes_status_and_location() {
    // GIVEN: A Server error with location
    let err = JobPostingClientError::Server {
        status: HttpStatusCode(422),
        message: "validation failed".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Formatting the error as string
    let error_string = format!("{}", err);

    // THEN: Should include error type, message, status and file location
    assert!(error_string.contains("Server Error"));
    assert!(error_string.contains("validation failed"));
    assert!(error_string.contains("422"));
    assert!(error_string.contains("job_posting_client.rs"));
}

/// **VALUE**: Verifies `message()` is the bare server text.
///
/// **BUG THIS CATCHES**: Would catch decorations (status, location) leaking into
/// the text a caller shows to users.
#[test]
fn given_server_error_when_message_requested_then_returns_bare_text() {
    let err = JobPostingClientError::Server {
        status: HttpStatusCode(400),
        message: "bad input".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    assert_eq!(err.message(), "bad input");
    assert_eq!(err.status(), Some(HttpStatusCode(400)));
}

#[test]
fn given_url_parse_failure_when_converted_then_is_url_parse_variant() {
    let parse_error = url::Url::parse("not a url").unwrap_err();

    let err = JobPostingClientError::from(parse_error);

    assert!(matches!(err, JobPostingClientError::UrlParse { .. }));
    assert_eq!(err.status(), None);
}

#[test]
fn given_json_failure_when_converted_then_is_json_variant_and_wraps_into_core_error() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

    let err = JobPostingClientError::from(json_error);
    assert!(matches!(err, JobPostingClientError::Json { .. }));

    let core: CoreError = err.into();
    assert!(format!("{core}").contains("JSON Error"));
}
