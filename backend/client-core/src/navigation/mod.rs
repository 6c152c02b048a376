//! Header navigation model.
//!
//! [`NavBar`] is a pure function of the current path plus the fixed
//! destination table, with one side-effecting action (logout). Rendering is
//! left to the host; routing is delegated to an injected [`Navigator`].

pub mod route;

pub use route::Route;

use crate::session::SessionContext;

use log::{debug, info, warn};
use serde::Serialize;

/// One entry of the header bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavDestination {
    pub label: &'static str,
    pub route: Route,
}

/// Header destinations, in display order.
pub const NAV_DESTINATIONS: [NavDestination; 3] = [
    NavDestination {
        label: "Home",
        route: Route::Home,
    },
    NavDestination {
        label: "Create Posting",
        route: Route::CreatePosting,
    },
    NavDestination {
        label: "View Postings",
        route: Route::Postings,
    },
];

pub const LOGOUT_LABEL: &str = "Logout";

/// A rendered control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
    pub active: bool,
}

/// Imperative route changes, owned by the host router.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// Navigator that only records where it was sent.
#[derive(Debug, Default, Clone)]
pub struct HistoryNavigator {
    history: Vec<Route>,
}

impl HistoryNavigator {
    pub fn history(&self) -> &[Route] {
        &self.history
    }

    pub fn current(&self) -> Option<Route> {
        self.history.last().copied()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&mut self, route: Route) {
        self.history.push(route);
    }
}

#[derive(Clone)]
pub struct NavBar {
    session: SessionContext,
}

impl NavBar {
    pub fn new(session: SessionContext) -> Self {
        Self { session }
    }

    /// Controls for `current_path`. An item is active iff its path equals
    /// `current_path` exactly.
    pub fn items(current_path: &str) -> Vec<NavItem> {
        NAV_DESTINATIONS
            .iter()
            .map(|destination| NavItem {
                label: destination.label,
                route: destination.route,
                active: destination.route.path() == current_path,
            })
            .collect()
    }

    /// Follow a header control. No guard or confirmation.
    pub fn activate(&self, route: Route, navigator: &mut impl Navigator) {
        debug!("Navigating to {route}");
        navigator.navigate(route);
    }

    /// Clear the authentication flag and go to the login route.
    ///
    /// Navigation happens even if the store fails to clear; the failure is
    /// only logged.
    pub fn logout(&self, navigator: &mut impl Navigator) {
        if let Err(e) = self.session.clear_authenticated() {
            warn!("Failed to clear authentication flag on logout: {}", e);
        }

        info!("Logged out");
        navigator.navigate(Route::Login);
    }

    /// Where a request for `route` should land given the session state.
    ///
    /// Protected routes redirect to [`Route::Login`] when the flag is not
    /// set. An unreadable store counts as logged out.
    pub fn guard(&self, route: Route) -> Route {
        if !route.requires_authentication() {
            return route;
        }

        match self.session.is_authenticated() {
            Ok(true) => route,
            Ok(false) => {
                debug!("Unauthenticated request for {route}, redirecting to login");
                Route::Login
            }
            Err(e) => {
                warn!("Failed to read authentication flag: {}", e);
                Route::Login
            }
        }
    }
}
