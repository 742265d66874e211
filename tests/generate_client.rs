//! Client tests against a mock generation backend.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use slidedraft::backend::{GenerateError, GenerateRequest, GenerationClient};

fn sample_request() -> GenerateRequest {
    GenerateRequest {
        topic: "Introduction to Quantum Computing".to_string(),
        audience: "University Students (CS Major)".to_string(),
        length_minutes: 15,
    }
}

#[tokio::test]
async fn success_response_yields_draft() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::draft("Slide 1: ...")).await;

    let client = GenerationClient::new(mock.base_url()).unwrap();
    let result = client.generate(&sample_request()).await.unwrap();
    assert_eq!(result.draft, "Slide 1: ...");
}

#[tokio::test]
async fn extra_fields_in_success_body_are_ignored() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(
        200,
        r#"{"draft": "Slide 1: Intro", "model": "gemini", "tokens": 512}"#,
    ))
    .await;

    let client = GenerationClient::new(mock.base_url()).unwrap();
    let result = client.generate(&sample_request()).await.unwrap();
    assert_eq!(result.draft, "Slide 1: Intro");
}

#[tokio::test]
async fn error_body_message_is_surfaced() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(500, "rate limited")).await;

    let client = GenerationClient::new(mock.base_url()).unwrap();
    let err = client.generate(&sample_request()).await.unwrap_err();
    match &err {
        GenerateError::Backend { status, message } => {
            assert_eq!(*status, 500);
            assert_eq!(message.as_deref(), Some("rate limited"));
        }
        other => panic!("expected Backend error, got {:?}", other),
    }
    assert_eq!(err.user_message(), "rate limited");
}

#[tokio::test]
async fn unparsable_error_body_falls_back_to_status_code() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::garbage(500)).await;

    let client = GenerationClient::new(mock.base_url()).unwrap();
    let err = client.generate(&sample_request()).await.unwrap_err();
    assert!(err.user_message().contains("500"));
}

#[tokio::test]
async fn error_body_without_error_field_falls_back_to_status_code() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(502, r#"{"detail": "bad gateway"}"#))
        .await;

    let client = GenerationClient::new(mock.base_url()).unwrap();
    let err = client.generate(&sample_request()).await.unwrap_err();
    assert!(err.user_message().contains("502"));
}

#[tokio::test]
async fn connection_refused_is_a_network_error_with_message() {
    // Grab an ephemeral port, then release it so nothing listens there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GenerationClient::new(format!("http://{}", addr)).unwrap();
    let err = client.generate(&sample_request()).await.unwrap_err();
    assert!(matches!(err, GenerateError::Network(_)));
    assert!(!err.user_message().is_empty());
}

#[tokio::test]
async fn success_body_without_draft_is_invalid_response() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(200, r#"{"ok": true}"#)).await;

    let client = GenerationClient::new(mock.base_url()).unwrap();
    let err = client.generate(&sample_request()).await.unwrap_err();
    assert!(matches!(err, GenerateError::InvalidResponse(_)));
}

#[tokio::test]
async fn request_uses_wire_contract() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::draft("ok")).await;

    let client = GenerationClient::new(mock.base_url()).unwrap();
    client.generate(&sample_request()).await.unwrap();

    let requests = mock.requests().await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/api/generate");
    assert!(request
        .header("content-type")
        .unwrap_or_default()
        .starts_with("application/json"));

    let body: serde_json::Value = serde_json::from_str(&request.body_str()).unwrap();
    assert_eq!(body["topic"], "Introduction to Quantum Computing");
    assert_eq!(body["audience"], "University Students (CS Major)");
    assert_eq!(body["lengthMinutes"], 15);
}
