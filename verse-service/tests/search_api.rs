//! Integration tests for the search endpoint.
//!
//! Each test spawns the application with a mock provider and drives it
//! over HTTP. Run with: cargo test -p verse-service --test search_api

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};
use verse_service::config::VerseConfig;
use verse_service::services::providers::mock::MockTextProvider;
use verse_service::services::providers::TextProvider;
use verse_service::startup::Application;

/// Spawn the application on a random port and return the port number.
async fn spawn_app(provider: Arc<dyn TextProvider>) -> u16 {
    std::env::set_var("APP__PORT", "0"); // Random port

    let config = VerseConfig::load().expect("Failed to load config");
    let app = Application::build(config, provider)
        .await
        .expect("Failed to build application");

    let port = app.port();

    // Spawn the server in the background
    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}

async fn post_search(client: &Client, port: u16, body: Value) -> reqwest::Response {
    client
        .post(format!("http://localhost:{}/api/search", port))
        .json(&body)
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request")
}

#[tokio::test]
async fn returns_the_object_embedded_in_model_output() {
    let provider = Arc::new(MockTextProvider::with_response(
        r#"Here you go: {"verse": "詩篇23:1 耶和華是我的牧者", "prayer": "主啊，求你賜我平安。"}"#,
    ));
    let port = spawn_app(provider).await;
    let client = Client::new();

    let response = post_search(&client, port, json!({ "text": "錢能買到快樂" })).await;

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["verse"], "詩篇23:1 耶和華是我的牧者");
    assert_eq!(body["prayer"], "主啊，求你賜我平安。");
}

#[tokio::test]
async fn relays_the_parsed_object_without_schema_checks() {
    // The model ignored the requested keys; the endpoint relays whatever
    // parsed, verbatim.
    let provider = Arc::new(MockTextProvider::with_response(
        r#"{"scripture": "John 3:16", "note": "keys differ"}"#,
    ));
    let port = spawn_app(provider).await;
    let client = Client::new();

    let response = post_search(&client, port, json!({ "text": "nothing matters" })).await;

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["scripture"], "John 3:16");
    assert_eq!(body["note"], "keys differ");
}

#[tokio::test]
async fn prompt_embeds_the_submitted_text_verbatim() {
    let provider = Arc::new(MockTextProvider::with_response(r#"{"verse": "v", "prayer": "p"}"#));
    let port = spawn_app(provider.clone()).await;
    let client = Client::new();

    let response = post_search(&client, port, json!({ "text": "我一文不值" })).await;
    assert_eq!(response.status(), 200);

    let prompt = provider.last_prompt().expect("Provider was not called");
    assert!(prompt.contains("我一文不值"));
}

#[tokio::test]
async fn missing_text_field_defaults_to_empty_statement() {
    let provider = Arc::new(MockTextProvider::with_response(r#"{"verse": "v", "prayer": "p"}"#));
    let port = spawn_app(provider.clone()).await;
    let client = Client::new();

    let response = post_search(&client, port, json!({})).await;
    assert_eq!(response.status(), 200);

    let prompt = provider.last_prompt().expect("Provider was not called");
    assert!(prompt.contains("「」"));
}

#[tokio::test]
async fn reports_extraction_failure_with_the_raw_response() {
    let raw = "抱歉，我無法以 JSON 回答這個問題。";
    let provider = Arc::new(MockTextProvider::with_response(raw));
    let port = spawn_app(provider).await;
    let client = Client::new();

    let response = post_search(&client, port, json!({ "text": "hello" })).await;

    assert_eq!(response.status(), 500);

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    assert_eq!(body["raw_response"], raw);
}

#[tokio::test]
async fn reports_parse_failure_with_the_extracted_span() {
    // Trailing comma: a span exists but strict JSON parsing rejects it.
    let provider = Arc::new(MockTextProvider::with_response(
        r#"Result: {"verse": "詩篇23:1", "prayer": "平安",}"#,
    ));
    let port = spawn_app(provider).await;
    let client = Client::new();

    let response = post_search(&client, port, json!({ "text": "hello" })).await;

    assert_eq!(response.status(), 500);

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    assert_eq!(body["raw_json"], r#"{"verse": "詩篇23:1", "prayer": "平安",}"#);
}

#[tokio::test]
async fn greedy_extraction_spans_multiple_objects() {
    // Two objects in one response: the span runs from the first `{` to the
    // last `}`, which is not valid JSON, so the caller sees a parse error
    // carrying the whole greedy span.
    let provider = Arc::new(MockTextProvider::with_response(
        r#"{"verse": "a"} or maybe {"verse": "b"}"#,
    ));
    let port = spawn_app(provider).await;
    let client = Client::new();

    let response = post_search(&client, port, json!({ "text": "hello" })).await;

    assert_eq!(response.status(), 500);

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["raw_json"], r#"{"verse": "a"} or maybe {"verse": "b"}"#);
}

#[tokio::test]
async fn upstream_failure_is_isolated_to_the_request() {
    let provider = Arc::new(MockTextProvider::failing("connection refused"));
    let port = spawn_app(provider).await;
    let client = Client::new();

    let response = post_search(&client, port, json!({ "text": "hello" })).await;

    assert_eq!(response.status(), 500);

    let body: Value = response.json().await.expect("Failed to parse JSON");
    let message = body["error"].as_str().expect("error field missing");
    assert!(message.contains("connection refused"));
    assert!(body.get("raw_response").is_none());
    assert!(body.get("raw_json").is_none());

    // The process keeps serving after an upstream failure.
    let health = client
        .get(format!("http://localhost:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(health.status(), 200);
}

#[tokio::test]
async fn search_endpoint_allows_any_origin() {
    let provider = Arc::new(MockTextProvider::with_response(r#"{"verse": "v", "prayer": "p"}"#));
    let port = spawn_app(provider).await;
    let client = Client::new();

    let response = client
        .post(format!("http://localhost:{}/api/search", port))
        .header("Origin", "https://example.com")
        .json(&json!({ "text": "hello" }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
