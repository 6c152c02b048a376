use super::helpers::{client_for_mock, sample_approval_request, sample_job_request};

use client_core::error::job_posting_client::JobPostingClientError;
use client_core::job_posting_client::{ApprovedPosting, JobPostingList, JobPostingRequest};
use client_core::{ClientConfig, JobPostingClient};

use common::HttpStatusCode;

use std::time::{Duration, Instant};

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

// ============================================================================
// Public API tests for the job-posting client
// Every call runs against a wiremock server standing in for the backend
// ============================================================================

fn server_message(err: &JobPostingClientError) -> &str {
    match err {
        JobPostingClientError::Server { message, .. } => message,
        other => panic!("expected Server error, got {other:?}"),
    }
}

// ----------------------------------------------------------------------------
// generate_job_posting()
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies the request shape the backend's pydantic model expects.
///
/// **WHY THIS MATTERS**: The server rejects snake_case keys with a 422. A serde
/// rename slip would break generation for every user.
///
/// **BUG THIS CATCHES**: Would catch a missing `rename_all = "camelCase"`, a
/// wrong path, a wrong method, or a dropped Content-Type header.
#[tokio::test]
async fn given_success_when_generate_job_posting_then_returns_body_verbatim() {
    // GIVEN: A backend that expects the camelCase body and answers 200
    let (server, client) = client_for_mock().await;
    let response_body = json!({
        "natural_posting": "We are hiring...",
        "structured_data": {"title": "Data Engineer", "skills": ["Rust", "SQL"]},
        "nested": [1, {"a": null}]
    });

    Mock::given(method("POST"))
        .and(path("/api/generate-job-posting"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "jobTitle": "Data Engineer",
            "careerLevel": "Senior",
            "location": "Cairo",
            "department": "Engineering",
            "keySkills": "Rust, SQL"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Generating a posting
    let result = client.generate_job_posting(&sample_job_request()).await;

    // THEN: The parsed body comes back unchanged
    assert_eq!(result.unwrap(), response_body);
}

#[tokio::test]
async fn given_no_key_skills_when_generate_job_posting_then_field_is_omitted() {
    let (server, client) = client_for_mock().await;

    Mock::given(method("POST"))
        .and(path("/api/generate-job-posting"))
        .and(body_json(json!({
            "jobTitle": "Recruiter",
            "careerLevel": "Junior",
            "location": "Remote",
            "department": "HR"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let request = JobPostingRequest::new("Recruiter", "Junior", "Remote", "HR");
    let result = client.generate_job_posting(&request).await.unwrap();

    assert_eq!(result, json!({"ok": true}));
}

#[tokio::test]
async fn given_error_body_when_generate_job_posting_then_raises_error_text() {
    let (server, client) = client_for_mock().await;

    Mock::given(method("POST"))
        .and(path("/api/generate-job-posting"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "bad input"})))
        .mount(&server)
        .await;

    let err = client
        .generate_job_posting(&sample_job_request())
        .await
        .unwrap_err();

    assert_eq!(server_message(&err), "bad input");
    assert_eq!(err.status(), Some(HttpStatusCode(400)));
}

/// **VALUE**: Verifies the generation endpoint does not consult `detail`.
///
/// **BUG THIS CATCHES**: Would catch the generation endpoint silently adopting
/// the other endpoints' precedence.
#[tokio::test]
async fn given_detail_only_body_when_generate_job_posting_then_falls_back_to_status() {
    let (server, client) = client_for_mock().await;

    Mock::given(method("POST"))
        .and(path("/api/generate-job-posting"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"detail": "Error generating posting"})),
        )
        .mount(&server)
        .await;

    let err = client
        .generate_job_posting(&sample_job_request())
        .await
        .unwrap_err();

    assert!(server_message(&err).contains("500"));
}

// ----------------------------------------------------------------------------
// approve_posting()
// ----------------------------------------------------------------------------

#[tokio::test]
async fn given_success_when_approve_posting_then_returns_body_and_decodes_view() {
    // GIVEN: A backend answering with the approval response shape
    let (server, client) = client_for_mock().await;
    let response_body = json!({
        "posting": {"id": "JOB_1234", "job_title": "Data Engineer"},
        "similarEmployees": [{
            "id": "E1",
            "name": "Mona",
            "department": "Engineering",
            "current_role": "Data Engineer II",
            "similarity_score": 0.91,
            "promotion_probability": 0.6,
            "email": "mona@example.com"
        }],
        "qdrant_upload_success": true
    });

    Mock::given(method("POST"))
        .and(path("/api/approve-posting"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "naturalPosting": "We are hiring a Senior Data Engineer...",
            "structuredData": r#"{"title": "Data Engineer", "skills": ["Rust", "SQL"]}"#,
            "originalInput": {
                "jobTitle": "Data Engineer",
                "careerLevel": "Senior",
                "location": "Cairo",
                "department": "Engineering",
                "keySkills": "Rust, SQL"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Approving
    let result = client
        .approve_posting(&sample_approval_request())
        .await
        .unwrap();

    // THEN: Verbatim body, and the typed view decodes it
    assert_eq!(result, response_body);
    let approved = ApprovedPosting::from_value(result).unwrap();
    assert!(approved.qdrant_upload_success);
    assert_eq!(approved.similar_employees.len(), 1);
    assert_eq!(approved.similar_employees[0].name, "Mona");
}

#[tokio::test]
async fn given_detail_body_when_approve_posting_then_raises_detail_text() {
    let (server, client) = client_for_mock().await;

    Mock::given(method("POST"))
        .and(path("/api/approve-posting"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({"detail": "validation failed", "error": "ignored"})),
        )
        .mount(&server)
        .await;

    let err = client
        .approve_posting(&sample_approval_request())
        .await
        .unwrap_err();

    assert_eq!(server_message(&err), "validation failed");
}

#[tokio::test]
async fn given_error_only_body_when_approve_posting_then_raises_error_text() {
    let (server, client) = client_for_mock().await;

    Mock::given(method("POST"))
        .and(path("/api/approve-posting"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "x"})))
        .mount(&server)
        .await;

    let err = client
        .approve_posting(&sample_approval_request())
        .await
        .unwrap_err();

    assert_eq!(server_message(&err), "x");
}

#[tokio::test]
async fn given_unparsable_body_when_approve_posting_then_message_contains_status_code() {
    let (server, client) = client_for_mock().await;

    Mock::given(method("POST"))
        .and(path("/api/approve-posting"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client
        .approve_posting(&sample_approval_request())
        .await
        .unwrap_err();

    assert!(server_message(&err).contains("502"));
    assert_eq!(err.status(), Some(HttpStatusCode(502)));
}

// ----------------------------------------------------------------------------
// get_job_postings()
// ----------------------------------------------------------------------------

#[tokio::test]
async fn given_success_when_get_job_postings_then_returns_body_verbatim() {
    let (server, client) = client_for_mock().await;
    let response_body = json!({"postings": [{"id": "JOB_1"}, {"id": "JOB_2"}]});

    Mock::given(method("GET"))
        .and(path("/api/job-postings"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.get_job_postings().await.unwrap();

    assert_eq!(result, response_body);
    assert_eq!(JobPostingList::from_value(result).unwrap().len(), 2);
}

/// **VALUE**: Verifies an empty 503 body still yields a useful message.
///
/// **WHY THIS MATTERS**: Load balancers return empty 503s while the backend
/// restarts. Users need to see the status, not a JSON parse error.
///
/// **BUG THIS CATCHES**: Would catch the error-body parse failure escaping as
/// a `Json` error instead of falling back to the status code.
#[tokio::test]
async fn given_empty_503_when_get_job_postings_then_message_contains_503() {
    // GIVEN: A backend answering 503 with no body
    let (server, client) = client_for_mock().await;

    Mock::given(method("GET"))
        .and(path("/api/job-postings"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    // WHEN: Listing postings
    let err = client.get_job_postings().await.unwrap_err();

    // THEN: Server error whose message carries the status
    assert!(server_message(&err).contains("503"), "{err}");
}

#[tokio::test]
async fn given_any_failure_status_when_called_then_always_raises() {
    for status in [400, 401, 404, 418, 500, 503] {
        let (server, client) = client_for_mock().await;

        Mock::given(method("GET"))
            .and(path("/api/job-postings"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({"postings": []})))
            .mount(&server)
            .await;

        let result = client.get_job_postings().await;

        assert!(result.is_err(), "status {status} must raise");
        assert_eq!(result.unwrap_err().status(), Some(HttpStatusCode(status)));
    }
}

#[tokio::test]
async fn given_non_json_success_body_when_called_then_returns_json_error() {
    let (server, client) = client_for_mock().await;

    Mock::given(method("GET"))
        .and(path("/api/job-postings"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client.get_job_postings().await.unwrap_err();

    assert!(matches!(err, JobPostingClientError::Json { .. }));
}

// ----------------------------------------------------------------------------
// Transport and base URL
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies network failures surface as transport errors.
///
/// **BUG THIS CATCHES**: Would catch connection failures being swallowed or
/// misreported as a server status.
#[tokio::test]
async fn given_unreachable_server_when_called_then_returns_http_error() {
    // GIVEN: A port that definitely has no server listening
    let config = ClientConfig::new("http://127.0.0.1:65534").unwrap();
    let client = JobPostingClient::new(&config).unwrap();

    // WHEN: Listing postings
    let err = client.get_job_postings().await.unwrap_err();

    // THEN: Transport error, no status
    assert!(matches!(err, JobPostingClientError::Http { .. }));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn given_base_url_with_path_prefix_when_called_then_prefix_is_kept() {
    let server = wiremock::MockServer::start().await;
    let config = ClientConfig::new(format!("{}/backend", server.uri())).unwrap();
    let client = JobPostingClient::new(&config).unwrap();

    Mock::given(method("GET"))
        .and(path("/backend/api/job-postings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client.get_job_postings().await.unwrap(), json!([]));
}

#[tokio::test]
async fn given_overlapping_calls_when_awaited_together_then_each_completes_independently() {
    let (server, client) = client_for_mock().await;

    Mock::given(method("GET"))
        .and(path("/api/job-postings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"postings": []})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/generate-job-posting"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "bad input"})))
        .mount(&server)
        .await;

    let job_request = sample_job_request();
    let (listed, generated) = tokio::join!(
        client.get_job_postings(),
        client.generate_job_posting(&job_request)
    );

    assert_eq!(listed.unwrap(), json!({"postings": []}));
    assert_eq!(server_message(&generated.unwrap_err()), "bad input");
}

// ----------------------------------------------------------------------------
// check_health()
// ----------------------------------------------------------------------------

#[tokio::test]
async fn given_healthy_server_when_check_health_then_returns_true() {
    let (server, client) = client_for_mock().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
        .mount(&server)
        .await;

    assert!(client.check_health().await);
}

#[tokio::test]
async fn given_failing_or_unreachable_server_when_check_health_then_returns_false() {
    let (server, client) = client_for_mock().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let unreachable =
        JobPostingClient::new(&ClientConfig::new("http://127.0.0.1:65534").unwrap()).unwrap();

    assert!(!client.check_health().await);
    assert!(!unreachable.check_health().await);
}

/// **VALUE**: Verifies the health check gives up on a server that never answers.
///
/// **WHY THIS MATTERS**: `talent-scout health` against a host that drops packets
/// must print "unreachable", not hang.
///
/// **BUG THIS CATCHES**: Would catch the timeout being dropped from the health check.
#[tokio::test]
async fn given_slow_server_when_check_health_then_returns_false_within_timeout() {
    // GIVEN: A health endpoint that answers far later than the health check waits
    let (server, client) = client_for_mock().await;
    let client = client.with_health_timeout(Duration::from_millis(100));

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    // WHEN: Probing health
    let started = Instant::now();
    let healthy = client.check_health().await;

    // THEN: Unhealthy, and well before the response would arrive
    assert!(!healthy);
    assert!(started.elapsed() < Duration::from_secs(4));
}
