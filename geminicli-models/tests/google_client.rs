use futures::StreamExt;
use geminicli_models::google::{GoogleGenAi, GoogleGenAiOptions, HttpOptions};
use geminicli_models::{
    Content, ContentGenerator, CountTokensRequest, EmbedContentRequest, GenerateContentRequest,
    ModelError,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USER_AGENT: &str = "GeminiCLI/9.9.9 (test; test)";

fn client_for(server: &MockServer, vertex: Option<bool>) -> GoogleGenAi {
    let mut options = GoogleGenAiOptions::new()
        .with_api_key("test-key")
        .with_base_url(server.uri())
        .with_http_options(HttpOptions::with_user_agent(USER_AGENT));
    options.vertexai = vertex;
    GoogleGenAi::new(options).expect("client")
}

#[tokio::test]
async fn generate_content_hits_custom_endpoint_with_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-pro:generateContent"))
        .and(header("user-agent", USER_AGENT))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "Hello"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Hi!"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {
                "promptTokenCount": 1,
                "candidatesTokenCount": 1,
                "totalTokenCount": 2
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let response = client
        .generate_content("gemini-pro", &GenerateContentRequest::prompt("Hello"))
        .await
        .unwrap();

    assert_eq!(response.text().as_deref(), Some("Hi!"));
}

#[tokio::test]
async fn vertex_requests_use_publisher_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(
            "/v1beta1/publishers/google/models/gemini-pro:countTokens",
        ))
        .and(header("user-agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"totalTokens": 7})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some(true));
    let count = client
        .count_tokens(
            "gemini-pro",
            &CountTokensRequest::new(vec![Content::user("count me")]),
        )
        .await
        .unwrap();

    assert_eq!(count.total_tokens, 7);
}

#[tokio::test]
async fn stream_yields_each_sse_event() {
    let server = MockServer::start().await;
    let body = concat!(
        r#"data: {"candidates":[{"content":{"role":"model","parts":[{"text":"Hel"}]}}]}"#,
        "\r\n\r\n",
        r#"data: {"candidates":[{"content":{"role":"model","parts":[{"text":"lo"}]},"#,
        r#""finishReason":"STOP"}]}"#,
        "\r\n\r\n",
    );
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-pro:streamGenerateContent"))
        .and(query_param("alt", "sse"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let stream = client
        .generate_content_stream("gemini-pro", &GenerateContentRequest::prompt("Hello"))
        .await
        .unwrap();
    let text: String = stream
        .map(|chunk| chunk.unwrap().text().unwrap_or_default())
        .collect::<Vec<_>>()
        .await
        .concat();

    assert_eq!(text, "Hello");
}

#[tokio::test]
async fn embed_content_returns_values() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-embedding-001:embedContent"))
        .and(body_partial_json(json!({"taskType": "RETRIEVAL_QUERY"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"embedding": {"values": [0.1, 0.2]}})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let embed = client
        .embed_content(
            "gemini-embedding-001",
            &EmbedContentRequest::text("query").with_task_type("RETRIEVAL_QUERY"),
        )
        .await
        .unwrap();

    assert_eq!(embed.embedding.values, vec![0.1, 0.2]);
}

#[tokio::test]
async fn api_errors_are_mapped() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client
        .generate_content("gemini-pro", &GenerateContentRequest::prompt("Hello"))
        .await
        .unwrap_err();

    match err {
        ModelError::Authentication(message) => assert_eq!(message, "API key not valid"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn timeout_reports_configured_duration() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let options = GoogleGenAiOptions::new()
        .with_api_key("test-key")
        .with_base_url(server.uri())
        .with_http_options(
            HttpOptions::with_user_agent(USER_AGENT).with_timeout(Duration::from_millis(200)),
        );
    let client = GoogleGenAi::new(options).unwrap();
    let err = client
        .generate_content("gemini-pro", &GenerateContentRequest::prompt("Hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, ModelError::Timeout(Some(d)) if d == Duration::from_millis(200)));
    assert_eq!(err.to_string(), "Request timed out after 200ms");
}

#[tokio::test]
async fn rate_limit_reads_retry_after_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client
        .generate_content("gemini-pro", &GenerateContentRequest::prompt("Hello"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ModelError::RateLimited { retry_after: Some(d) } if d == Duration::from_secs(30)
    ));
}
