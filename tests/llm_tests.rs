use apothecare::llm::{CompletionClient, OpenAiCompletionClient};
use apothecare::types::AppError;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion_body(content: serde_json::Value) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1754300000,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 24, "completion_tokens": 9, "total_tokens": 33}
    })
}

#[tokio::test]
async fn returns_first_choice_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "messages": [
                {"role": "system", "content": "be helpful"},
                {"role": "user", "content": "Do you stock ibuprofen?"}
            ]
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body(json!("Yes, ibuprofen 200mg is in stock."))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client =
        OpenAiCompletionClient::new("sk-test".to_string(), server.uri(), "gpt-4o-mini".to_string());

    let reply = client
        .complete("be helpful", "Do you stock ibuprofen?")
        .await
        .expect("completion");

    assert_eq!(reply, "Yes, ibuprofen 200mg is in stock.");
}

#[tokio::test]
async fn empty_content_is_ok_and_empty() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(json!(null))))
        .mount(&server)
        .await;

    let client =
        OpenAiCompletionClient::new("sk-test".to_string(), server.uri(), "gpt-4o-mini".to_string());

    let reply = client.complete("be helpful", "hello").await.expect("completion");

    assert!(reply.is_empty());
}

#[tokio::test]
async fn upstream_error_maps_to_completion_error() {
    let server = MockServer::start().await;

    // 401 is terminal for the client; no retry loop to wait out
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "message": "Incorrect API key provided",
                "type": "invalid_request_error",
                "param": null,
                "code": "invalid_api_key"
            }
        })))
        .mount(&server)
        .await;

    let client =
        OpenAiCompletionClient::new("sk-bad".to_string(), server.uri(), "gpt-4o-mini".to_string());

    let err = client
        .complete("be helpful", "hello")
        .await
        .expect_err("should fail");

    assert!(matches!(err, AppError::Completion(_)));
}
