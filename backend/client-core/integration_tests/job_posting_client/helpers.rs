//! Test helpers for API client integration tests.

use client_core::job_posting_client::{ApprovalRequest, JobPostingRequest};
use client_core::{ClientConfig, JobPostingClient};

use serde_json::json;
use wiremock::MockServer;

/// Client pointed at a fresh mock server.
pub async fn client_for_mock() -> (MockServer, JobPostingClient) {
    let server = MockServer::start().await;
    let config = ClientConfig::new(server.uri()).expect("mock server uri is a valid base url");
    let client = JobPostingClient::new(&config).expect("Failed to build client");
    (server, client)
}

pub fn sample_job_request() -> JobPostingRequest {
    JobPostingRequest::new("Data Engineer", "Senior", "Cairo", "Engineering")
        .with_key_skills("Rust, SQL")
}

pub fn sample_approval_request() -> ApprovalRequest {
    ApprovalRequest::new(
        "We are hiring a Senior Data Engineer...",
        r#"{"title": "Data Engineer", "skills": ["Rust", "SQL"]}"#,
        json!({
            "jobTitle": "Data Engineer",
            "careerLevel": "Senior",
            "location": "Cairo",
            "department": "Engineering",
            "keySkills": "Rust, SQL"
        }),
    )
}
