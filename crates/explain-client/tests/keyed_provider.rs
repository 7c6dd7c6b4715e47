//! Integration tests for KeyedProvider.
//!
//! Uses wiremock for HTTP mocking.

use explain_client::{ErrorCategory, ExplanationProvider, KeyedProvider};
use explain_config::AppConfig;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/v1/models/gemini-2.0-flash:generateContent";

fn create_provider(mock_server: &MockServer) -> KeyedProvider {
    let config = AppConfig {
        keyed_base_url: mock_server.uri(),
        ..AppConfig::default()
    };
    KeyedProvider::from_config(&config)
}

fn candidate_response(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]
    })
}

#[tokio::test]
async fn test_explain_success() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(query_param("key", "user-key"))
        .and(body_partial_json(json!({
            "contents": [{"parts": [{"text": "Explain this"}]}],
            "generationConfig": {"maxOutputTokens": 512}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(candidate_response("  Renames a field.\n")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let text = create_provider(&mock_server)
        .explain("Explain this", Some(" user-key "))
        .await
        .expect("explain failed");

    assert_eq!(text, "Renames a field.");
}

#[tokio::test]
async fn test_missing_credential_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_response("never")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = create_provider(&mock_server)
        .explain("prompt", None)
        .await
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::MissingCredential);
}

#[tokio::test]
async fn test_invalid_key_surfaces_remote_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT"}
        })))
        .mount(&mock_server)
        .await;

    let err = create_provider(&mock_server)
        .explain("prompt", Some("bad-key"))
        .await
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::TransportError);
    assert_eq!(
        err.message(),
        "API key not valid. Please pass a valid API key."
    );
}

#[tokio::test]
async fn test_server_error_without_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let err = create_provider(&mock_server)
        .explain("prompt", Some("key"))
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Gemini error: 500");
}

#[tokio::test]
async fn test_no_candidates_is_empty_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"promptFeedback": {"blockReason": "SAFETY"}})),
        )
        .mount(&mock_server)
        .await;

    let err = create_provider(&mock_server)
        .explain("prompt", Some("key"))
        .await
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::EmptyResponse);
}

#[tokio::test]
async fn test_unterminated_reasoning_is_reasoning_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(candidate_response("<thinking>the user wants")),
        )
        .mount(&mock_server)
        .await;

    let err = create_provider(&mock_server)
        .explain("prompt", Some("key"))
        .await
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::ReasoningOnly);
}
