//! HTTP adapter tests against a local mock of each provider's API.

use std::time::Duration;

use anyhow::Result;
use golden::llm_client::{AnthropicClient, LlmError, LlmSettings, OpenAiClient, TextGenerator};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(server: &MockServer, max_attempts: u32) -> LlmSettings {
    LlmSettings {
        api_key: "test-key".to_string(),
        model: "test-model".to_string(),
        base_url: Some(server.uri()),
        timeout: Duration::from_secs(5),
        max_attempts,
    }
}

fn anthropic_reply(text: &str) -> Value {
    json!({
        "content": [{"type": "text", "text": text}],
        "usage": {"input_tokens": 10, "output_tokens": 5}
    })
}

fn openai_reply(text: &str) -> Value {
    json!({
        "choices": [{"message": {"role": "assistant", "content": text}}],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5}
    })
}

#[tokio::test]
async fn test_anthropic_returns_first_text_block() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(json!({"model": "test-model", "system": "sys"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(anthropic_reply("{\"ok\": true}")))
        .expect(1)
        .mount(&server)
        .await;

    let client = AnthropicClient::new(settings(&server, 1))?;
    let value = client.generate("sys", "prompt", &Value::Null).await?;
    assert_eq!(value, json!({"ok": true}));
    Ok(())
}

#[tokio::test]
async fn test_anthropic_error_message_is_surfaced() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"error": {"type": "invalid_request_error", "message": "bad prompt"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = AnthropicClient::new(settings(&server, 3))?;
    let err = client.complete("sys", "prompt", &Value::Null).await.unwrap_err();
    match err {
        LlmError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "bad prompt");
        }
        other => panic!("unexpected error: {other}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_single_attempt_does_not_retry_server_errors() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let client = AnthropicClient::new(settings(&server, 1))?;
    let err = client.complete("sys", "prompt", &Value::Null).await.unwrap_err();
    assert!(matches!(err, LlmError::Api { status: 503, .. }));
    Ok(())
}

#[tokio::test]
async fn test_extra_attempts_retry_rate_limits() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(anthropic_reply("{}")))
        .expect(1)
        .mount(&server)
        .await;

    let client = AnthropicClient::new(settings(&server, 2))?;
    let text = client.complete("sys", "prompt", &Value::Null).await?;
    assert_eq!(text, "{}");
    Ok(())
}

#[tokio::test]
async fn test_anthropic_without_text_block_is_empty_content() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [],
            "usage": {"input_tokens": 1, "output_tokens": 0}
        })))
        .mount(&server)
        .await;

    let client = AnthropicClient::new(settings(&server, 1))?;
    let err = client.complete("sys", "prompt", &Value::Null).await.unwrap_err();
    assert!(matches!(err, LlmError::EmptyContent));
    Ok(())
}

#[tokio::test]
async fn test_openai_sends_schema_as_response_format() -> Result<()> {
    let server = MockServer::start().await;
    let schema = json!({"type": "object", "required": ["profile_id"]});
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "response_format": {"type": "json_schema", "json_schema": {"schema": schema}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_reply("{\"profile_id\": \"p1\"}")))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiClient::new(settings(&server, 1))?;
    let value = client.generate("sys", "prompt", &schema).await?;
    assert_eq!(value["profile_id"], "p1");
    Ok(())
}

#[tokio::test]
async fn test_openai_sends_system_and_user_messages() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [
                {"role": "system", "content": "sys"},
                {"role": "user", "content": "prompt"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_reply("{}")))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiClient::new(settings(&server, 1))?;
    client.complete("sys", "prompt", &Value::Null).await?;
    Ok(())
}

#[tokio::test]
async fn test_openai_null_content_is_empty_content() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        })))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(settings(&server, 1))?;
    let err = client.complete("sys", "prompt", &Value::Null).await.unwrap_err();
    assert!(matches!(err, LlmError::EmptyContent));
    Ok(())
}
