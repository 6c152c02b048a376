// Unit tests for the navigation commands

use crate::commands::navigation::{login, logout, nav_json, render_nav};

use client_core::navigation::HistoryNavigator;
use client_core::{Route, SessionContext};

#[test]
fn given_postings_path_when_rendered_then_only_view_postings_is_marked() {
    let output = render_nav("/postings");
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("[ ] Home"));
    assert!(lines[1].starts_with("[ ] Create Posting"));
    assert!(lines[2].starts_with("[*] View Postings"));
    assert_eq!(lines[3], "[ ] Logout");
}

#[test]
fn given_nested_path_when_rendered_then_nothing_is_marked() {
    assert!(!render_nav("/postings/123").contains("[*]"));
}

#[test]
fn given_path_when_rendered_as_json_then_routes_serialize_as_paths() {
    let json: serde_json::Value = serde_json::from_str(&nav_json("/").unwrap()).unwrap();

    assert_eq!(json[0]["label"], "Home");
    assert_eq!(json[0]["route"], "/");
    assert_eq!(json[0]["active"], true);
    assert_eq!(json[2]["route"], "/postings");
    assert_eq!(json[2]["active"], false);
}

#[test]
fn given_login_then_logout_when_run_then_flag_follows_and_routes_are_home_then_login() {
    // GIVEN: A fresh in-memory session
    let session = SessionContext::in_memory();
    let mut navigator = HistoryNavigator::default();

    // WHEN: Logging in
    login(&session, &mut navigator).unwrap();

    // THEN: Authenticated, on home
    assert!(session.is_authenticated().unwrap());
    assert_eq!(navigator.current(), Some(Route::Home));

    // WHEN: Logging out
    logout(&session, &mut navigator);

    // THEN: Not authenticated, on login
    assert!(!session.is_authenticated().unwrap());
    assert_eq!(navigator.history(), [Route::Home, Route::Login]);
}
