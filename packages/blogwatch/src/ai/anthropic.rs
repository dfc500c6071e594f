//! Anthropic-backed summarizer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AiError, AiResult};
use crate::traits::Summarizer;
use crate::types::RankedRecord;

use super::prompts;
use super::tags::parse_summary_response;

/// Default generation model.
pub const DEFAULT_MODEL: &str = "claude-3-opus-20240229";

const BASE_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

const SUMMARY_MAX_TOKENS: u32 = 1000;
const DIGEST_MAX_TOKENS: u32 = 2000;

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

/// Summarizer backed by the Anthropic Messages API.
pub struct AnthropicSummarizer {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl AnthropicSummarizer {
    /// Create a summarizer for the default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Use a different model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the endpoint URL (tests point this at a local mock).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// One prompt/response exchange.
    async fn complete(&self, prompt: &str, max_tokens: u32, temperature: f32) -> AiResult<String> {
        let response = self
            .client
            .post(&self.base_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&MessagesRequest {
                model: &self.model,
                max_tokens,
                temperature,
                messages: vec![Message {
                    role: "user",
                    content: prompt,
                }],
            })
            .send()
            .await
            .map_err(|e| AiError::Http(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|e| AiError::Http(Box::new(e)))?;
        let text: String = body.content.into_iter().map(|block| block.text).collect();
        if text.is_empty() {
            return Err(AiError::EmptyResponse);
        }
        Ok(text)
    }
}

#[async_trait]
impl Summarizer for AnthropicSummarizer {
    async fn summarize_article(&self, content: &str, title: &str, url: &str) -> AiResult<String> {
        debug!(url = %url, model = %self.model, "requesting article summary");
        let prompt = prompts::format_summarize_prompt(content, title, url);
        let response = self.complete(&prompt, SUMMARY_MAX_TOKENS, 0.0).await?;
        Ok(parse_summary_response(&response))
    }

    async fn compose_digest(&self, query: &str, records: &[RankedRecord]) -> AiResult<String> {
        debug!(query = %query, posts = records.len(), model = %self.model, "requesting digest");
        let prompt = prompts::format_digest_prompt(query, records);
        self.complete(&prompt, DIGEST_MAX_TOKENS, 0.2).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_summarize_parses_tagged_response() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/messages")
                    .header("x-api-key", "test-key")
                    .header("anthropic-version", API_VERSION);
                then.status(200).json_body(serde_json::json!({
                    "content": [
                        {"type": "text", "text": "<THINKING>...</THINKING><SUMMARY>Release notes.</SUMMARY>"}
                    ]
                }));
            })
            .await;

        let summarizer =
            AnthropicSummarizer::new("test-key").with_base_url(server.url("/v1/messages"));
        let summary = summarizer
            .summarize_article("body", "Title", "https://x.example/p")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(summary, "Release notes.");
    }

    #[tokio::test]
    async fn test_api_error_is_typed() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/messages");
                then.status(500).body("overloaded");
            })
            .await;

        let summarizer = AnthropicSummarizer::new("k").with_base_url(server.url("/v1/messages"));
        let err = summarizer
            .summarize_article("body", "Title", "https://x.example/p")
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_empty_content_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/messages");
                then.status(200).json_body(serde_json::json!({"content": []}));
            })
            .await;

        let summarizer = AnthropicSummarizer::new("k").with_base_url(server.url("/v1/messages"));
        let err = summarizer.compose_digest("q", &[]).await.unwrap_err();
        assert!(matches!(err, AiError::EmptyResponse));
    }
}
