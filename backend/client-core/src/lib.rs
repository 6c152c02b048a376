pub mod config;
pub mod error;
pub mod job_posting_client;
pub mod navigation;
pub mod session;

#[cfg(test)]
mod tests;

pub use config::ClientConfig;
pub use job_posting_client::JobPostingClient;
pub use navigation::{NavBar, Navigator, Route};
pub use session::SessionContext;

pub const API_SERVER_HOSTNAME: &str = "localhost";
pub const API_SERVER_PORT: u16 = 8000;
pub const DEFAULT_API_BASE_URL: &str =
    const_format::concatcp!("http://", API_SERVER_HOSTNAME, ":", API_SERVER_PORT);
