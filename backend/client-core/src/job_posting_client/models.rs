//! Request bodies and optional typed views over service responses.
//!
//! The client hands success bodies back as [`serde_json::Value`]. The view
//! types here decode a value on demand for callers that want field access.

use crate::error::job_posting_client::JobPostingClientError;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================
// REQUESTS
// ============================================

/// Attributes for a posting the service should draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostingRequest {
    pub job_title: String,
    pub career_level: String,
    pub location: String,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_skills: Option<String>,
}

impl JobPostingRequest {
    pub fn new(
        job_title: impl Into<String>,
        career_level: impl Into<String>,
        location: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            job_title: job_title.into(),
            career_level: career_level.into(),
            location: location.into(),
            department: department.into(),
            key_skills: None,
        }
    }

    pub fn with_key_skills(mut self, key_skills: impl Into<String>) -> Self {
        self.key_skills = Some(key_skills.into());
        self
    }
}

/// A reviewed draft to persist.
///
/// `structured_data` is itself a JSON document encoded as a string; the
/// server parses it. `original_input` is echoed back in whatever shape the
/// caller generated the draft from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRequest {
    pub natural_posting: String,
    pub structured_data: String,
    pub original_input: Value,
}

impl ApprovalRequest {
    pub fn new(
        natural_posting: impl Into<String>,
        structured_data: impl Into<String>,
        original_input: Value,
    ) -> Self {
        Self {
            natural_posting: natural_posting.into(),
            structured_data: structured_data.into(),
            original_input,
        }
    }
}

// ============================================
// RESPONSE VIEWS
// ============================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimilarEmployee {
    pub id: String,
    pub name: String,
    pub department: String,
    pub current_role: String,
    pub similarity_score: f64,
    pub promotion_probability: f64,
    pub email: String,
}

/// Body of a successful approval.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApprovedPosting {
    pub posting: Value,
    #[serde(rename = "similarEmployees", default)]
    pub similar_employees: Vec<SimilarEmployee>,
    #[serde(default)]
    pub qdrant_upload_success: bool,
}

impl ApprovedPosting {
    #[track_caller]
    pub fn from_value(value: Value) -> Result<Self, JobPostingClientError> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Body of the listing endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobPostingList {
    #[serde(default)]
    pub postings: Vec<Value>,
}

impl JobPostingList {
    #[track_caller]
    pub fn from_value(value: Value) -> Result<Self, JobPostingClientError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
