//! OpenAI Chat Completions adapter.
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use super::{endpoint, http_client, send_with_retries, LlmError, LlmSettings, TextGenerator};

const OPENAI_API_BASE: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4o";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: Value,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

/// Chat Completions in JSON mode. A non-null schema is passed as a
/// non-strict `json_schema` response format; otherwise plain `json_object`.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    url: String,
    api_key: String,
    model: String,
    max_attempts: u32,
}

impl OpenAiClient {
    pub fn new(settings: LlmSettings) -> Result<Self, LlmError> {
        Ok(Self {
            client: http_client(settings.timeout)?,
            url: endpoint(settings.base_url.as_deref(), OPENAI_API_BASE, "/v1/chat/completions"),
            api_key: settings.api_key,
            model: settings.model,
            max_attempts: settings.max_attempts,
        })
    }
}

fn response_format(schema: &Value) -> Value {
    if schema.is_null() {
        return json!({"type": "json_object"});
    }
    json!({
        "type": "json_schema",
        "json_schema": {
            "name": "structured_output",
            "schema": schema,
            "strict": false
        }
    })
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, system: &str, prompt: &str, schema: &Value) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            response_format: response_format(schema),
        };
        let auth = format!("Bearer {}", self.api_key.trim());

        let response = send_with_retries(self.max_attempts, || {
            self.client
                .post(&self.url)
                .header(AUTHORIZATION, &auth)
                .json(&request_body)
        })
        .await?;

        let body: ChatResponse = response.json().await?;

        if let Some(usage) = &body.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        body.choices
            .into_iter()
            .find_map(|choice| choice.message.content)
            .ok_or(LlmError::EmptyContent)
    }
}
