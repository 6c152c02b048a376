use client_core::error::session::SessionError;

use common::ErrorLocation;

use std::error::Error;
use std::io::{Error as IoError, ErrorKind};
use std::path::PathBuf;
use std::panic::Location;

/// **VALUE**: Verifies that error source chains are preserved for debugging.
///
/// **WHY THIS MATTERS**: A failed logout write is only logged. The log line
/// needs the OS cause ("read-only file system"), not just "write failed".
///
/// **BUG THIS CATCHES**: Would catch removal of the `#[source]` attribute.
#[test]
fn given_write_error_with_source_when_inspected_then_preserves_chain() {
    // GIVEN: A WriteError with an underlying IO error
    let err = SessionError::WriteError {
        location: ErrorLocation::from(Location::caller()),
        path: PathBuf::from("/tmp/session.json"),
        source: IoError::new(ErrorKind::PermissionDenied, "access denied"),
    };

    // WHEN: Accessing the error source
    let source = err.source();

    // THEN: Should preserve the source chain with original error message
    assert!(source.is_some(), "Should have error source");
    assert!(format!("{}", source.unwrap()).contains("access denied"));
    assert!(format!("{err}").contains("/tmp/session.json"));
}
