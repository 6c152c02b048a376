//! Fixed route table.

use serde::{Serialize, Serializer};

const HOME_PATH: &str = "/";
const CREATE_POSTING_PATH: &str = "/create-posting";
const POSTINGS_PATH: &str = "/postings";
const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    CreatePosting,
    Postings,
    Login,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::CreatePosting, Route::Postings, Route::Login];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => HOME_PATH,
            Route::CreatePosting => CREATE_POSTING_PATH,
            Route::Postings => POSTINGS_PATH,
            Route::Login => LOGIN_PATH,
        }
    }

    /// Exact match only. `/postings/123` and `/postings/` are not routes.
    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.path() == path)
    }

    pub fn requires_authentication(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Routes serialize as their path.
impl Serialize for Route {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.path())
    }
}
