pub mod config;
pub mod job_posting_client;
pub mod session;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    JobPostingClient(#[from] job_posting_client::JobPostingClientError),

    #[error(transparent)]
    Session(#[from] session::SessionError),
}
