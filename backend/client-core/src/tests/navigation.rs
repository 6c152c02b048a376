// Unit tests for navigation module
// Tests active-route computation, logout side effects, and the route guard

use crate::error::session::SessionError;
use crate::navigation::{HistoryNavigator, NAV_DESTINATIONS, NavBar, Route};
use crate::session::{AUTH_FLAG_KEY, KeyValueStore, MemoryStore, SessionContext};

use common::ErrorLocation;

use std::sync::Arc;

/// Store whose every operation fails.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, SessionError> {
        Err(broken())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), SessionError> {
        Err(broken())
    }

    fn remove(&self, _key: &str) -> Result<(), SessionError> {
        Err(broken())
    }
}

fn broken() -> SessionError {
    SessionError::LockError {
        location: ErrorLocation::caller(),
        reason: String::from("poisoned"),
    }
}

fn active_labels(path: &str) -> Vec<&'static str> {
    NavBar::items(path)
        .into_iter()
        .filter(|item| item.active)
        .map(|item| item.label)
        .collect()
}

// ============================================
// Route table
// ============================================

#[test]
fn given_route_table_when_listed_then_order_is_home_create_view() {
    let labels: Vec<_> = NAV_DESTINATIONS.iter().map(|d| d.label).collect();
    let paths: Vec<_> = NAV_DESTINATIONS.iter().map(|d| d.route.path()).collect();

    assert_eq!(labels, ["Home", "Create Posting", "View Postings"]);
    assert_eq!(paths, ["/", "/create-posting", "/postings"]);
}

#[test]
fn given_paths_when_parsed_then_only_exact_matches_are_routes() {
    assert_eq!(Route::from_path("/login"), Some(Route::Login));
    assert_eq!(Route::from_path("/postings"), Some(Route::Postings));
    assert_eq!(Route::from_path("/postings/123"), None);
    assert_eq!(Route::from_path("/postings/"), None);
    assert_eq!(Route::from_path(""), None);
}

// ============================================
// Active state
// ============================================

/// **VALUE**: Verifies exactly the matching control is active.
///
/// **BUG THIS CATCHES**: Would catch an off-by-one in the destination table or
/// a comparison against the wrong route.
#[test]
fn given_postings_path_when_rendered_then_only_view_postings_is_active() {
    // GIVEN: Current path is /postings
    // WHEN: Rendering the bar
    let items = NavBar::items("/postings");

    // THEN: View Postings is active, the others are not
    assert_eq!(items.len(), 3);
    assert!(!items[0].active, "Home should not be active");
    assert!(!items[1].active, "Create Posting should not be active");
    assert!(items[2].active, "View Postings should be active");
}

/// **VALUE**: Verifies active matching is exact string equality.
///
/// **WHY THIS MATTERS**: "/" is a prefix of every path. Prefix matching would
/// light up Home everywhere, and detail pages would light up their list page.
///
/// **BUG THIS CATCHES**: Would catch `starts_with` creeping into the comparison.
#[test]
fn given_nested_path_when_rendered_then_nothing_is_active() {
    assert!(active_labels("/postings/123").is_empty());
    assert!(active_labels("/login").is_empty());
    assert!(active_labels("/create-posting?draft=1").is_empty());
}

#[test]
fn given_root_path_when_rendered_then_only_home_is_active() {
    assert_eq!(active_labels("/"), ["Home"]);
    assert_eq!(active_labels("/create-posting"), ["Create Posting"]);
}

// ============================================
// Actions
// ============================================

#[test]
fn given_destination_when_activated_then_navigates_without_guard() {
    // GIVEN: A logged-out session
    let nav_bar = NavBar::new(SessionContext::in_memory());
    let mut navigator = HistoryNavigator::default();

    // WHEN: Activating a protected destination
    nav_bar.activate(Route::CreatePosting, &mut navigator);

    // THEN: Navigation happens as requested
    assert_eq!(navigator.history(), [Route::CreatePosting]);
}

/// **VALUE**: Verifies logout clears the flag and lands on /login.
///
/// **BUG THIS CATCHES**: Would catch logout navigating before clearing, or
/// clearing a different key than the route guard reads.
#[test]
fn given_authenticated_session_when_logout_then_flag_cleared_and_navigates_to_login() {
    // GIVEN: An authenticated session
    let store = Arc::new(MemoryStore::default());
    let session = SessionContext::new(store.clone());
    session.mark_authenticated().unwrap();
    let nav_bar = NavBar::new(session.clone());
    let mut navigator = HistoryNavigator::default();

    // WHEN: Logging out
    nav_bar.logout(&mut navigator);

    // THEN: Flag gone, current route is /login
    assert_eq!(store.get(AUTH_FLAG_KEY).unwrap(), None);
    assert!(!session.is_authenticated().unwrap());
    assert_eq!(navigator.current(), Some(Route::Login));
}

#[test]
fn given_logged_out_session_when_logout_then_still_navigates_to_login() {
    let session = SessionContext::in_memory();
    let nav_bar = NavBar::new(session.clone());
    let mut navigator = HistoryNavigator::default();

    nav_bar.logout(&mut navigator);
    nav_bar.logout(&mut navigator);

    assert!(!session.is_authenticated().unwrap());
    assert_eq!(navigator.history(), [Route::Login, Route::Login]);
}

/// **VALUE**: Verifies logout has no failure path visible to the caller.
///
/// **WHY THIS MATTERS**: A user who clicks Logout must always end up on the
/// login screen, even if persisted storage is broken.
#[test]
fn given_failing_store_when_logout_then_still_navigates_to_login() {
    let nav_bar = NavBar::new(SessionContext::new(Arc::new(BrokenStore)));
    let mut navigator = HistoryNavigator::default();

    nav_bar.logout(&mut navigator);

    assert_eq!(navigator.current(), Some(Route::Login));
}

// ============================================
// Guard
// ============================================

#[test]
fn given_unauthenticated_session_when_guarding_protected_route_then_redirects_to_login() {
    let nav_bar = NavBar::new(SessionContext::in_memory());

    assert_eq!(nav_bar.guard(Route::Postings), Route::Login);
    assert_eq!(nav_bar.guard(Route::Home), Route::Login);
    assert_eq!(nav_bar.guard(Route::Login), Route::Login);
}

#[test]
fn given_authenticated_session_when_guarding_then_route_is_kept() {
    let session = SessionContext::in_memory();
    session.mark_authenticated().unwrap();
    let nav_bar = NavBar::new(session);

    assert_eq!(nav_bar.guard(Route::Postings), Route::Postings);
    assert_eq!(nav_bar.guard(Route::Login), Route::Login);
}

#[test]
fn given_failing_store_when_guarding_then_treated_as_logged_out() {
    let nav_bar = NavBar::new(SessionContext::new(Arc::new(BrokenStore)));

    assert_eq!(nav_bar.guard(Route::CreatePosting), Route::Login);
}
