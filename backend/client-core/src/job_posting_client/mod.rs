pub mod endpoint;
pub mod error_body;
pub mod models;

pub use endpoint::Endpoint;
pub use models::{
    ApprovalRequest, ApprovedPosting, JobPostingList, JobPostingRequest, SimilarEmployee,
};

use crate::config::ClientConfig;
use crate::error::job_posting_client::JobPostingClientError;

use error_body::resolve_error_message;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;
use std::time::Duration;

use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use url::Url;

const JSON_CONTENT_TYPE: &str = "application/json";
const CHECK_HEALTH_DURATION: Duration = Duration::from_secs(3);

/// Client for the job-posting generation service.
///
/// Cheap to clone; clones share the underlying connection pool. Calls are
/// independent of each other: nothing is queued, deduplicated or retried.
#[derive(Debug, Clone)]
pub struct JobPostingClient {
    base_url: Url,
    client: Client,
    health_timeout: Duration,
}

impl JobPostingClient {
    pub fn new(config: &ClientConfig) -> Result<Self, JobPostingClientError> {
        let base_url = Url::parse(&config.base_url_for_join())?;
        let client = Client::builder().build()?;

        Ok(Self {
            base_url,
            client,
            health_timeout: CHECK_HEALTH_DURATION,
        })
    }

    /// Bound on the health check only. API operations are never timed out.
    pub fn with_health_timeout(mut self, timeout: Duration) -> Self {
        self.health_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn prepare_request(&self, endpoint: Endpoint) -> Result<RequestBuilder, JobPostingClientError> {
        let url = self.base_url.join(endpoint.path())?;

        Ok(self
            .client
            .request(endpoint.method(), url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE))
    }

    /// Ask the service to draft a posting from the given attributes.
    ///
    /// # Errors
    /// [`JobPostingClientError::Server`] on any non-2xx status, with the
    /// message taken from the body's `error` field when present.
    pub async fn generate_job_posting(
        &self,
        request: &JobPostingRequest,
    ) -> Result<Value, JobPostingClientError> {
        self.send_json(Endpoint::GenerateJobPosting, request).await
    }

    /// Persist a reviewed posting.
    ///
    /// # Errors
    /// [`JobPostingClientError::Server`] on any non-2xx status, with the
    /// message taken from `detail`, then `error`.
    pub async fn approve_posting(
        &self,
        request: &ApprovalRequest,
    ) -> Result<Value, JobPostingClientError> {
        self.send_json(Endpoint::ApprovePosting, request).await
    }

    /// Fetch stored postings. The service returns the whole set in one body.
    pub async fn get_job_postings(&self) -> Result<Value, JobPostingClientError> {
        let request = self.prepare_request(Endpoint::JobPostings)?;
        self.execute(Endpoint::JobPostings, request).await
    }

    /// `true` if the service answers its health check with a 2xx status
    /// within the health timeout.
    pub async fn check_health(&self) -> bool {
        let request = match self.prepare_request(Endpoint::Health) {
            Ok(request) => request,
            Err(e) => {
                warn!("Health check URL invalid: {}", e);
                return false;
            }
        };

        match request.timeout(self.health_timeout).send().await {
            Ok(response) => HttpStatusCode(response.status().as_u16()).is_success(),
            Err(e) => {
                debug!("Health check failed: {}", e);
                false
            }
        }
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<Value, JobPostingClientError> {
        let request = self.prepare_request(endpoint)?.json(body);
        self.execute(endpoint, request).await
    }

    async fn execute(
        &self,
        endpoint: Endpoint,
        request: RequestBuilder,
    ) -> Result<Value, JobPostingClientError> {
        debug!("Sending {endpoint}");

        let response = request.send().await?;
        let status = HttpStatusCode(response.status().as_u16());
        let reason = response.status().canonical_reason();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = resolve_error_message(&body, endpoint.error_fields(), status, reason);

            warn!("{endpoint} failed with {status}: {message}");

            return Err(JobPostingClientError::Server {
                status,
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body = response.text().await?;
        let json: Value = serde_json::from_str(&body)?;

        Ok(json)
    }
}
