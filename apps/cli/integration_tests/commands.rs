use talent_scout::commands::postings::{approve, generate, health, list};
use talent_scout::error::TalentScoutError;

use client_core::job_posting_client::JobPostingRequest;
use client_core::{ClientConfig, JobPostingClient};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> JobPostingClient {
    let config = ClientConfig::new(server.uri()).expect("mock uri is valid");
    JobPostingClient::new(&config).expect("Failed to build client")
}

/// **VALUE**: Verifies the generate command passes the response through.
#[tokio::test]
async fn given_service_success_when_generate_command_runs_then_returns_response() {
    // GIVEN: A backend that drafts postings
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate-job-posting"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"draft": "text"})))
        .mount(&server)
        .await;

    // WHEN: Running the command
    let request = JobPostingRequest::new("Analyst", "Mid", "Giza", "Finance");
    let result = generate(&client_for(&server).await, request).await;

    // THEN: Response unchanged
    assert_eq!(result.unwrap(), json!({"draft": "text"}));
}

/// **VALUE**: Verifies a server failure reaches the CLI as a Service error
/// with the server's own message.
#[tokio::test]
async fn given_service_failure_when_list_command_runs_then_returns_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/job-postings"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"detail": "Error fetching job postings: timeout"})),
        )
        .mount(&server)
        .await;

    let err = list(&client_for(&server).await).await.unwrap_err();

    match err {
        TalentScoutError::Service {
            status, message, ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Error fetching job postings: timeout");
        }
        other => panic!("expected Service, got {other:?}"),
    }
}

/// **VALUE**: Verifies bad `--original-input` is rejected before any request.
///
/// **BUG THIS CATCHES**: Would catch invalid JSON being sent as a string, which
/// the backend would reject with a confusing 422.
#[tokio::test]
async fn given_invalid_original_input_when_approve_command_runs_then_nothing_is_sent() {
    // GIVEN: A backend that must not be called
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/approve-posting"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    // WHEN: Approving with malformed JSON input
    let result = approve(
        &client_for(&server).await,
        String::from("posting"),
        String::from("{}"),
        "{not json",
    )
    .await;

    // THEN: InvalidInput error
    assert!(matches!(result, Err(TalentScoutError::InvalidInput { .. })));
}

#[tokio::test]
async fn given_health_endpoint_states_when_health_command_runs_then_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
        .mount(&server)
        .await;

    let unreachable =
        JobPostingClient::new(&ClientConfig::new("http://127.0.0.1:65534").unwrap()).unwrap();

    assert_eq!(health(&client_for(&server).await).await, "healthy");
    assert_eq!(health(&unreachable).await, "unreachable");
}
