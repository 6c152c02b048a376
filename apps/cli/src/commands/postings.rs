use crate::error::TalentScoutError;

use client_core::JobPostingClient;
use client_core::error::CoreError;
use client_core::job_posting_client::{ApprovalRequest, JobPostingRequest};

use common::ErrorLocation;

use std::panic::Location;

use log::{debug, error, info};
use serde_json::Value;

/// Draft a posting.
///
/// # Returns
///
/// * `Ok(Value)` - The service's response body, unchanged
/// * `Err(TalentScoutError::Service)` - Non-success status, carrying the server's message
/// * `Err(TalentScoutError::Core)` - Transport or decoding failure
pub async fn generate(
    client: &JobPostingClient,
    request: JobPostingRequest,
) -> Result<Value, TalentScoutError> {
    debug!("Generating posting for '{}'", request.job_title);

    let response = client
        .generate_job_posting(&request)
        .await
        .map_err(|e| {
            error!("Generation failed: {}", e);
            TalentScoutError::from(CoreError::from(e))
        })?;

    info!("Posting generated for '{}'", request.job_title);
    Ok(response)
}

/// Persist a reviewed posting.
///
/// `original_input` is raw JSON from the command line; it must parse before
/// anything is sent.
pub async fn approve(
    client: &JobPostingClient,
    natural_posting: String,
    structured_data: String,
    original_input: &str,
) -> Result<Value, TalentScoutError> {
    let original_input: Value =
        serde_json::from_str(original_input).map_err(|e| TalentScoutError::InvalidInput {
            message: format!("--original-input is not valid JSON: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let request = ApprovalRequest::new(natural_posting, structured_data, original_input);

    let response = client.approve_posting(&request).await.map_err(|e| {
        error!("Approval failed: {}", e);
        TalentScoutError::from(CoreError::from(e))
    })?;

    info!("Posting approved");
    Ok(response)
}

pub async fn list(client: &JobPostingClient) -> Result<Value, TalentScoutError> {
    client.get_job_postings().await.map_err(|e| {
        error!("Listing postings failed: {}", e);
        TalentScoutError::from(CoreError::from(e))
    })
}

/// `"healthy"` or `"unreachable"`. Never fails.
pub async fn health(client: &JobPostingClient) -> &'static str {
    debug!("Checking health of {}", client.base_url());

    if client.check_health().await {
        "healthy"
    } else {
        "unreachable"
    }
}
