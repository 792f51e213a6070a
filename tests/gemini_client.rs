use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tenant_drafting_service::model::{GeminiClient, GenerationRequest, ProviderError, TextGenerator};

fn request<'a>(prompt: &'a str) -> GenerationRequest<'a> {
    GenerationRequest {
        api_key: "test-key",
        model: "gemini-2.5-flash",
        prompt,
    }
}

#[tokio::test]
async fn returns_generated_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{ "role": "user", "parts": [{ "text": "Draft something" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Dear [Landlord's Name]," }] },
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(server.uri());
    let text = client.generate(&request("Draft something")).await.unwrap();

    assert_eq!(text, "Dear [Landlord's Name],");

    let received = server.received_requests().await.unwrap();
    assert!(received[0].url.query().is_none());
}

#[tokio::test]
async fn non_success_status_is_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let client = GeminiClient::new(server.uri());
    let err = client.generate(&request("Draft something")).await.unwrap_err();

    match err {
        ProviderError::Api { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "API key not valid");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn response_without_text_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::new(server.uri());
    let err = client.generate(&request("Draft something")).await.unwrap_err();

    assert!(matches!(err, ProviderError::EmptyResponse));
}

#[tokio::test]
async fn garbage_body_is_an_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = GeminiClient::new(server.uri());
    let err = client.generate(&request("Draft something")).await.unwrap_err();

    assert!(matches!(err, ProviderError::InvalidResponse(_)));
}

#[tokio::test]
async fn unreachable_provider_is_a_network_error() {
    // Nothing listens on the discard port
    let client = GeminiClient::new("http://127.0.0.1:9");
    let err = client.generate(&request("Draft something")).await.unwrap_err();

    assert!(matches!(err, ProviderError::Network(_)));
}

#[tokio::test]
async fn network_error_message_does_not_leak_the_key() {
    let client = GeminiClient::new("http://127.0.0.1:9");
    let err = client
        .generate(&GenerationRequest {
            api_key: "SUPER-SECRET-KEY",
            model: "gemini-2.5-flash",
            prompt: "Draft something",
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Network(_)));
    let message = err.to_string();
    assert!(!message.contains("SUPER-SECRET-KEY"), "{message}");
}
