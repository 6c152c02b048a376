//! Remote endpoints and the error-body fields each one is expected to populate.

use reqwest::Method;

const GENERATE_JOB_POSTING_PATH: &str = "api/generate-job-posting";
const APPROVE_POSTING_PATH: &str = "api/approve-posting";
const JOB_POSTINGS_PATH: &str = "api/job-postings";
const HEALTH_PATH: &str = "health";

/// Generation endpoint reports failures in a custom `error` field.
const GENERATION_ERROR_FIELDS: &[&str] = &["error"];

/// Framework-served endpoints report `detail`, with `error` as a fallback.
const FRAMEWORK_ERROR_FIELDS: &[&str] = &["detail", "error"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    GenerateJobPosting,
    ApprovePosting,
    JobPostings,
    Health,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::GenerateJobPosting | Endpoint::ApprovePosting => Method::POST,
            Endpoint::JobPostings | Endpoint::Health => Method::GET,
        }
    }

    /// Path relative to the base URL (no leading slash).
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::GenerateJobPosting => GENERATE_JOB_POSTING_PATH,
            Endpoint::ApprovePosting => APPROVE_POSTING_PATH,
            Endpoint::JobPostings => JOB_POSTINGS_PATH,
            Endpoint::Health => HEALTH_PATH,
        }
    }

    /// Body fields consulted, in order, for the failure message.
    pub fn error_fields(&self) -> &'static [&'static str] {
        match self {
            Endpoint::GenerateJobPosting => GENERATION_ERROR_FIELDS,
            Endpoint::ApprovePosting | Endpoint::JobPostings | Endpoint::Health => {
                FRAMEWORK_ERROR_FIELDS
            }
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} /{}", self.method(), self.path())
    }
}
