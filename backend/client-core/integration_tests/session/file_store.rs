use client_core::error::session::SessionError;
use client_core::navigation::{HistoryNavigator, NavBar, Route};
use client_core::session::{AUTH_FLAG_KEY, FileStore, KeyValueStore, SessionContext};

use std::sync::Arc;

use tempfile::TempDir;

fn store_in(dir: &TempDir) -> FileStore {
    FileStore::new(dir.path().join("nested").join("session.json"))
}

#[test]
fn given_missing_file_when_read_then_flag_is_absent() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    assert_eq!(store.get(AUTH_FLAG_KEY).unwrap(), None);
    assert!(!store.path().exists(), "Reading must not create the file");
}

/// **VALUE**: Verifies the flag survives across store instances.
///
/// **WHY THIS MATTERS**: The CLI is one process per command. `login` and a later
/// `logout` only work together if the flag is really on disk.
///
/// **BUG THIS CATCHES**: Would catch caching in the store that never hits disk,
/// or a temp file that is never renamed into place.
#[test]
fn given_flag_set_when_reopened_then_flag_persists() {
    // GIVEN: A session marked authenticated through one store
    let dir = TempDir::new().unwrap();
    SessionContext::new(Arc::new(store_in(&dir)))
        .mark_authenticated()
        .unwrap();

    // WHEN: Opening a second store on the same file
    let reopened = SessionContext::new(Arc::new(store_in(&dir)));

    // THEN: The flag is visible, and no temp file is left behind
    assert!(reopened.is_authenticated().unwrap());
    let leftovers: Vec<_> = std::fs::read_dir(dir.path().join("nested"))
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn given_other_keys_when_flag_cleared_then_other_keys_survive() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.set("theme", "dark").unwrap();
    store.set(AUTH_FLAG_KEY, "true").unwrap();

    store.remove(AUTH_FLAG_KEY).unwrap();

    assert_eq!(store.get(AUTH_FLAG_KEY).unwrap(), None);
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn given_corrupted_file_when_read_then_returns_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{not json").unwrap();

    let result = FileStore::new(&path).get(AUTH_FLAG_KEY);

    assert!(matches!(result, Err(SessionError::ParseError { .. })));
}

/// **VALUE**: End-to-end logout over a persisted store.
///
/// **BUG THIS CATCHES**: Would catch logout clearing an in-memory copy while
/// the file still says authenticated.
#[test]
fn given_persisted_login_when_logout_then_file_no_longer_authenticates() {
    // GIVEN: A persisted authenticated session
    let dir = TempDir::new().unwrap();
    let session = SessionContext::new(Arc::new(store_in(&dir)));
    session.mark_authenticated().unwrap();
    let nav_bar = NavBar::new(session);
    let mut navigator = HistoryNavigator::default();

    // WHEN: Logging out
    nav_bar.logout(&mut navigator);

    // THEN: A fresh reader sees no flag, and the guard redirects
    let fresh = SessionContext::new(Arc::new(store_in(&dir)));
    assert!(!fresh.is_authenticated().unwrap());
    assert_eq!(navigator.current(), Some(Route::Login));
    assert_eq!(NavBar::new(fresh).guard(Route::Postings), Route::Login);
}
