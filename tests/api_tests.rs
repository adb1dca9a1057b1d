use axum::Router;
use axum::http::StatusCode;
use axum_test::TestServer;
use rstest::rstest;
use serde_json::json;
use std::sync::Arc;

use apothecare::{
    AppState,
    api::handlers::chatbot::{EMPTY_REPLY_FALLBACK, NOT_CONFIGURED_REPLY},
    api::routes::create_router,
    llm::CompletionClient,
    types::{AppError, ChatbotReply, Result, COMPLETION_ERROR_REPLY},
    utils::config::{BackendConfig, ChatbotConfig, Config, ServerConfig, UiConfig},
};
use async_trait::async_trait;

// ============= Mock Completion Clients =============

/// Mock completion client with a fixed reply or a forced failure.
struct MockCompletionClient {
    reply: String,
    should_fail: bool,
}

impl MockCompletionClient {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            should_fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            reply: String::new(),
            should_fail: true,
        }
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, _system: &str, _message: &str) -> Result<String> {
        if self.should_fail {
            return Err(AppError::Completion("mock upstream failure".to_string()));
        }
        Ok(self.reply.clone())
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

// ============= Test Server Setup =============

fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        chatbot: ChatbotConfig {
            api_key: None,
            api_base: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
        },
        backend: BackendConfig {
            product_api_url: "http://localhost:8000".to_string(),
        },
        ui: UiConfig {
            dist_dir: "ui/dist".to_string(),
        },
    }
}

fn test_server(completions: Option<Arc<dyn CompletionClient>>) -> TestServer {
    let state = AppState {
        config: Arc::new(test_config()),
        completions,
    };
    let app: Router = Router::new().nest("/api", create_router()).with_state(state);
    TestServer::new(app).expect("test server")
}

// ============= Chatbot Proxy =============

#[tokio::test]
async fn chatbot_without_credential_soft_fails_with_200() {
    let server = test_server(None);

    let resp = server.post("/api/chatbot").json(&json!({"message": "hi"})).await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    let reply: ChatbotReply = resp.json();
    assert!(reply.reply.contains("not configured"));
    assert_eq!(reply.reply, NOT_CONFIGURED_REPLY);
}

#[rstest]
#[case::empty_body(None)]
#[case::missing_field(Some(json!({"text": "hi"})))]
#[case::blank_message(Some(json!({"message": ""})))]
#[case::whitespace_message(Some(json!({"message": "   "})))]
#[case::non_string_message(Some(json!({"message": 42})))]
#[tokio::test]
async fn chatbot_rejects_missing_message_with_400(#[case] body: Option<serde_json::Value>) {
    let server = test_server(Some(Arc::new(MockCompletionClient::new("unused"))));

    let req = server.post("/api/chatbot");
    let resp = match body {
        Some(body) => req.json(&body).await,
        None => req.await,
    };

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json();
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn chatbot_forwards_message_and_returns_reply() {
    let server = test_server(Some(Arc::new(MockCompletionClient::new(
        "Paracetamol ships within two days.",
    ))));

    let resp = server
        .post("/api/chatbot")
        .json(&json!({"message": "When does paracetamol ship?"}))
        .await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    let reply: ChatbotReply = resp.json();
    assert_eq!(reply.reply, "Paracetamol ships within two days.");
}

#[tokio::test]
async fn chatbot_substitutes_fallback_for_empty_upstream_reply() {
    let server = test_server(Some(Arc::new(MockCompletionClient::new("  "))));

    let resp = server.post("/api/chatbot").json(&json!({"message": "hi"})).await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    let reply: ChatbotReply = resp.json();
    assert_eq!(reply.reply, EMPTY_REPLY_FALLBACK);
}

#[tokio::test]
async fn chatbot_upstream_failure_returns_generic_500() {
    let server = test_server(Some(Arc::new(MockCompletionClient::failing())));

    let resp = server.post("/api/chatbot").json(&json!({"message": "hi"})).await;

    assert_eq!(resp.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = resp.json();
    let error = body["error"].as_str().expect("error field");
    assert_eq!(error, COMPLETION_ERROR_REPLY);
    // Upstream detail stays in the logs
    assert!(!error.contains("mock upstream failure"));
}

// ============= Test Endpoint =============

#[tokio::test]
async fn test_get_returns_ok_with_rfc3339_timestamp() {
    let server = test_server(None);

    let resp = server.get("/api/test").await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    let body: serde_json::Value = resp.json();
    assert_eq!(body["status"], "ok");
    let timestamp = body["timestamp"].as_str().expect("timestamp field");
    chrono::DateTime::parse_from_rfc3339(timestamp).expect("valid RFC 3339 timestamp");
}

#[tokio::test]
async fn test_post_echoes_payload() {
    let server = test_server(None);
    let payload = json!({"sku": "APC-1042", "qty": 3, "nested": {"note": "echo me"}});

    let resp = server.post("/api/test").json(&payload).await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    let body: serde_json::Value = resp.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["received"], payload);
}

#[tokio::test]
async fn test_post_rejects_malformed_json_with_400() {
    let server = test_server(None);

    let resp = server
        .post("/api/test")
        .text("{ not json")
        .content_type("application/json")
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json();
    assert!(body.get("error").is_some());
}

// ============= Health =============

#[tokio::test]
async fn health_reports_ok_and_version() {
    let server = test_server(None);

    let resp = server.get("/api/health").await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    let body: serde_json::Value = resp.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
