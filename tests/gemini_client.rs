use karte_backend::llm::{GeminiClient, GenerationError, PromptPayload, SamplingConfig, TextGenerator};
use karte_backend::{create_app, AppConfig, AppState};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{any, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

fn client(api_key: &str, server: &MockServer) -> GeminiClient {
    GeminiClient::new(
        api_key,
        server.uri(),
        "gemini-2.0-flash",
        SamplingConfig::default(),
        Duration::from_secs(5),
    )
    .unwrap()
}

fn candidate(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn sends_two_parts_and_sampling_config() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{ "role": "user", "parts": [{ "text": "SYSTEM" }, { "text": "USER" }] }],
            "generationConfig": { "temperature": 0.7, "topP": 0.95, "maxOutputTokens": 2048 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate("{\"karte_text\":\"a\"}")))
        .expect(1)
        .mount(&server)
        .await;

    let raw = client("test-key", &server)
        .generate(&PromptPayload::new("SYSTEM", "USER"))
        .await
        .unwrap();
    assert_eq!(raw, "{\"karte_text\":\"a\"}");
}

#[tokio::test]
async fn missing_credential_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client("", &server)
        .generate(&PromptPayload::new("s", "u"))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::MissingCredential));
}

#[tokio::test]
async fn quota_error_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(429).set_body_string("RESOURCE_EXHAUSTED"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client("k", &server)
        .generate(&PromptPayload::new("s", "u"))
        .await
        .unwrap_err();
    match err {
        GenerationError::Api { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "RESOURCE_EXHAUSTED");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn blocked_prompt_is_generation_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "promptFeedback": { "blockReason": "SAFETY" } })),
        )
        .mount(&server)
        .await;

    let err = client("k", &server)
        .generate(&PromptPayload::new("s", "u"))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::Blocked(reason) if reason == "SAFETY"));
}

#[tokio::test]
async fn empty_candidate_is_generation_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "finishReason": "MAX_TOKENS" }]
        })))
        .mount(&server)
        .await;

    let err = client("k", &server)
        .generate(&PromptPayload::new("s", "u"))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::EmptyResponse(reason) if reason == "MAX_TOKENS"));
}

#[tokio::test]
async fn end_to_end_generate_through_router() {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    let server = MockServer::start().await;
    let model_text = "```json\n{\n  \"karte_text\": \"・カット\\n・カラー（明るめブラウン）\\n・毛先スクエアカット\",\n  \"sns_text\": \"明るめブラウンで春らしく🌸 #美容室 #ヘアカラー\"\n}\n```";
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate(model_text)))
        .expect(1)
        .mount(&server)
        .await;

    let config = AppConfig {
        api_key: "k".to_string(),
        base_url: server.uri(),
        ..AppConfig::default()
    };
    let app = create_app(Arc::new(AppState::from_config(config).unwrap()));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/generate")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({
                        "menus": ["カット", "カラー"],
                        "memo": "明るめのブラウン、毛先squarecut"
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(!body["karte_text"].as_str().unwrap().is_empty());
    assert!(!body["sns_text"].as_str().unwrap().is_empty());
}
