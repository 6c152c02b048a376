use crate::error::TalentScoutError;

use client_core::error::CoreError;
use client_core::navigation::{LOGOUT_LABEL, NavBar, NavItem};
use client_core::{Navigator, Route, SessionContext};

use common::ErrorLocation;

use std::panic::Location;

use log::info;

const ACTIVE_MARKER: &str = "*";
const INACTIVE_MARKER: &str = " ";

/// One line per control, active item marked with `*`, logout last.
pub fn render_nav(current_path: &str) -> String {
    let mut lines: Vec<String> = NavBar::items(current_path)
        .iter()
        .map(|item| {
            let marker = if item.active { ACTIVE_MARKER } else { INACTIVE_MARKER };
            format!("[{marker}] {:<15} {}", item.label, item.route)
        })
        .collect();
    lines.push(format!("[{INACTIVE_MARKER}] {LOGOUT_LABEL}"));
    lines.join("\n")
}

pub fn nav_json(current_path: &str) -> Result<String, TalentScoutError> {
    let items: Vec<NavItem> = NavBar::items(current_path);

    serde_json::to_string_pretty(&items).map_err(|e| TalentScoutError::App {
        message: format!("Failed to serialize navigation items: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Set the flag, then land on the home route.
pub fn login(
    session: &SessionContext,
    navigator: &mut impl Navigator,
) -> Result<(), TalentScoutError> {
    session
        .mark_authenticated()
        .map_err(|e| TalentScoutError::from(CoreError::from(e)))?;

    NavBar::new(session.clone()).activate(Route::Home, navigator);
    Ok(())
}

/// Clear the flag, then land on the login route. Never fails.
pub fn logout(session: &SessionContext, navigator: &mut impl Navigator) {
    info!("Logging out");
    NavBar::new(session.clone()).logout(navigator);
}
