// Unit tests for session module
// Tests the authentication flag over the in-memory store

use crate::session::{AUTH_FLAG_KEY, KeyValueStore, MemoryStore, SessionContext};

use std::sync::Arc;

#[test]
fn given_fresh_session_when_checked_then_not_authenticated() {
    let session = SessionContext::in_memory();

    assert!(!session.is_authenticated().unwrap());
}

#[test]
fn given_marked_session_when_checked_then_authenticated() {
    let store = Arc::new(MemoryStore::default());
    let session = SessionContext::new(store.clone());

    session.mark_authenticated().unwrap();

    assert!(session.is_authenticated().unwrap());
    assert_eq!(store.get(AUTH_FLAG_KEY).unwrap().as_deref(), Some("true"));
}

/// **VALUE**: Verifies only the exact value "true" counts as authenticated.
///
/// **BUG THIS CATCHES**: Would catch the flag being treated as set merely
/// because the key exists (e.g. a stale "false").
#[test]
fn given_non_true_value_when_checked_then_not_authenticated() {
    let store = Arc::new(MemoryStore::default());
    store.set(AUTH_FLAG_KEY, "false").unwrap();
    let session = SessionContext::new(store);

    assert!(!session.is_authenticated().unwrap());
}

#[test]
fn given_absent_flag_when_cleared_then_succeeds() {
    let session = SessionContext::in_memory();

    assert!(session.clear_authenticated().is_ok());
    assert!(!session.is_authenticated().unwrap());
}

#[test]
fn given_cloned_context_when_cleared_then_original_observes_it() {
    let session = SessionContext::in_memory();
    let clone = session.clone();
    session.mark_authenticated().unwrap();

    clone.clear_authenticated().unwrap();

    assert!(!session.is_authenticated().unwrap());
}
