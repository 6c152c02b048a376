mod error;
mod job_posting_client;
mod session;
