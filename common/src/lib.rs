//! Shared building blocks for the Talent Scout client.
//!
//! This crate holds the small value types every other crate reports
//! errors with. It has no I/O and no business logic.
//!
//! ## Architecture
//!
//! - **common** (this crate): error location tracking, HTTP status codes
//! - **client-core**: API client, navigation model, session store
//! - **talent-scout**: command-line application wiring everything together

pub mod error;
pub mod http_status;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;
