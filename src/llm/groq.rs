// ABOUTME: Groq LLM provider implementation over the OpenAI-compatible chat completions API
// ABOUTME: Single bounded request per call with upstream failures mapped to AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Server Contributors

//! # Groq Provider
//!
//! Implementation of the `LlmProvider` trait for Groq's inference API.
//!
//! ## Configuration
//!
//! Set the `GROQ_API_KEY` environment variable with your API key from
//! Groq Console: <https://console.groq.com/keys>. `GROQ_API_BASE_URL` overrides
//! the endpoint, which is how tests point the provider at a mock server.
//!
//! ## Failure handling
//!
//! Requests are sent exactly once and bounded by the configured timeout.
//! Transport errors, timeouts and non-2xx statuses become `AppError`s carrying
//! whatever detail the upstream returned. A 2xx body that does not follow the
//! chat-completion shape is not an error: its text is handed back as content.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, instrument, warn};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmProvider, TokenUsage};
use crate::config::AiConfig;
use crate::constants::{env_keys, groq};
use crate::errors::AppError;

/// Service label used in error messages
const SERVICE: &str = "Groq";

/// Longest slice of a non-JSON error body kept in error details
const MAX_ERROR_BODY_CHARS: usize = 500;

// ============================================================================
// API Request/Response Types (OpenAI-compatible format)
// ============================================================================

/// Groq API request structure
#[derive(Debug, Serialize)]
struct GroqRequest {
    model: String,
    messages: Vec<GroqMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// Message structure for Groq API
#[derive(Debug, Clone, Serialize)]
struct GroqMessage {
    role: String,
    content: String,
}

impl From<&ChatMessage> for GroqMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str().to_owned(),
            content: msg.content.clone(),
        }
    }
}

/// Diagnostic metadata of a Groq response
///
/// Read separately from the reply text, so a malformed field here never hides
/// the content.
#[derive(Debug, Default, Deserialize)]
struct GroqMetadata {
    #[serde(default)]
    choices: Vec<GroqChoice>,
    #[serde(default)]
    usage: Option<GroqUsage>,
    #[serde(default)]
    model: Option<String>,
}

/// Choice in Groq response
#[derive(Debug, Default, Deserialize)]
struct GroqChoice {
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Usage statistics in Groq response
#[derive(Debug, Default, Deserialize)]
struct GroqUsage {
    #[serde(default, rename = "prompt_tokens")]
    prompt: Option<u32>,
    #[serde(default, rename = "completion_tokens")]
    completion: Option<u32>,
    #[serde(default, rename = "total_tokens")]
    total: Option<u32>,
}

impl From<GroqUsage> for TokenUsage {
    fn from(usage: GroqUsage) -> Self {
        let prompt_tokens = usage.prompt.unwrap_or_default();
        let completion_tokens = usage.completion.unwrap_or_default();
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: usage
                .total
                .unwrap_or_else(|| prompt_tokens.saturating_add(completion_tokens)),
        }
    }
}

/// Groq API error response
#[derive(Debug, Deserialize)]
struct GroqErrorResponse {
    error: GroqErrorDetail,
}

/// Error detail structure
#[derive(Debug, Deserialize)]
struct GroqErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Groq LLM provider
pub struct GroqProvider {
    client: Client,
    api_key: String,
    base_url: String,
    default_model: String,
}

impl GroqProvider {
    /// Create a provider with an explicit endpoint, model and timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        default_model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(groq::CONNECT_TIMEOUT_SECS).min(timeout))
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
            default_model: default_model.into(),
        })
    }

    /// Create a provider from AI configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no API key is configured
    pub fn from_config(config: &AiConfig) -> Result<Self, AppError> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            AppError::config(format!(
                "{} not configured. Get your API key from {}",
                env_keys::GROQ_API_KEY,
                groq::KEYS_URL
            ))
        })?;

        Self::new(
            api_key,
            config.base_url.clone(),
            config.model.clone(),
            config.timeout(),
        )
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.base_url.trim_end_matches('/'))
    }

    /// Map a transport-level failure
    fn transport_error(context: &str, e: &reqwest::Error) -> AppError {
        let detail = serde_json::json!({ "message": e.to_string() });
        if e.is_timeout() {
            AppError::external_timeout(SERVICE, format!("{context}: request timed out"))
                .with_details(detail)
        } else {
            AppError::external_service(SERVICE, format!("{context}: {e}")).with_details(detail)
        }
    }

    /// Parse error response from Groq API
    fn parse_error_response(status: reqwest::StatusCode, body: &str) -> AppError {
        if let Ok(error_response) = serde_json::from_str::<GroqErrorResponse>(body) {
            let error_type = error_response
                .error
                .error_type
                .unwrap_or_else(|| "unknown".to_owned());

            let details = serde_json::from_str::<Value>(body).unwrap_or(Value::Null);
            let message = match status.as_u16() {
                401 => format!("authentication failed: {}", error_response.error.message),
                429 => format!("rate limit exceeded: {}", error_response.error.message),
                _ => format!(
                    "API error ({status}): {error_type} - {}",
                    error_response.error.message
                ),
            };

            AppError::external_service(SERVICE, message).with_details(details)
        } else {
            let details = serde_json::from_str::<Value>(body).unwrap_or_else(|_| {
                Value::String(body.chars().take(MAX_ERROR_BODY_CHARS).collect())
            });

            AppError::external_service(SERVICE, format!("API error ({status})"))
                .with_details(details)
        }
    }

    /// Extract the reply text, falling back to `text` and then to the raw body
    ///
    /// Metadata is returned only when the body is JSON; its fields are optional.
    fn extract_content(body: &str) -> (String, Option<GroqMetadata>) {
        let Ok(value) = serde_json::from_str::<Value>(body) else {
            warn!("Groq response is not JSON, using raw body");
            return (body.to_owned(), None);
        };

        let content = value
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .filter(|content| !content.is_empty())
            .or_else(|| {
                value
                    .get("text")
                    .and_then(Value::as_str)
                    .filter(|t| !t.is_empty())
            })
            .map_or_else(
                || {
                    warn!("Groq response had no message content, using raw body");
                    body.to_owned()
                },
                str::to_owned,
            );

        let metadata = serde_json::from_value::<GroqMetadata>(value).unwrap_or_else(|e| {
            debug!("Ignoring unreadable Groq response metadata: {e}");
            GroqMetadata::default()
        });

        (content, Some(metadata))
    }
}

#[async_trait]
impl LlmProvider for GroqProvider {
    fn name(&self) -> &'static str {
        "groq"
    }

    #[instrument(skip(self, request), fields(model = %self.default_model))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        debug!("Sending chat completion request to Groq");

        let groq_request = GroqRequest {
            model: self.default_model.clone(),
            messages: request.messages.iter().map(GroqMessage::from).collect(),
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .bearer_auth(&self.api_key)
            .json(&groq_request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to Groq API: {}", e);
                Self::transport_error("Failed to connect", &e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read Groq API response: {}", e);
            Self::transport_error("Failed to read response", &e)
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &body));
        }

        let (content, parsed) = Self::extract_content(&body);

        let metadata = parsed.unwrap_or_default();
        let usage = metadata.usage.map(TokenUsage::from);
        let finish_reason = metadata
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.finish_reason);
        let model = metadata
            .model
            .unwrap_or_else(|| self.default_model.clone());

        debug!("Received response from Groq: {} chars", content.len());

        Ok(ChatResponse {
            content,
            model,
            usage,
            finish_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_extract_content_prefers_first_choice() {
        let body = r#"{"model":"groq/compound","choices":[{"message":{"content":"hello"},"finish_reason":"stop"}]}"#;
        let (content, parsed) = GroqProvider::extract_content(body);
        assert_eq!(content, "hello");
        assert!(parsed.is_some());
    }

    #[test]
    fn test_extract_content_survives_partial_usage_block() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"hello"},"finish_reason":"stop"}],"usage":{"prompt_tokens":10,"completion_tokens":5}}"#;
        let (content, metadata) = GroqProvider::extract_content(body);
        assert_eq!(content, "hello");

        let usage = TokenUsage::from(metadata.unwrap().usage.unwrap());
        assert_eq!(usage.prompt_tokens, 10);
        assert_eq!(usage.total_tokens, 15);
    }

    #[test]
    fn test_extract_content_ignores_malformed_metadata() {
        let body = r#"{"choices":[{"message":{"content":"hello"},"finish_reason":7}],"usage":"n/a","model":null}"#;
        let (content, metadata) = GroqProvider::extract_content(body);
        assert_eq!(content, "hello");
        assert!(metadata.unwrap().usage.is_none());
    }

    #[test]
    fn test_extract_content_falls_back_to_text_then_body() {
        let (content, _) = GroqProvider::extract_content(r#"{"text":"plain"}"#);
        assert_eq!(content, "plain");

        let body = r#"{"choices":[]}"#;
        let (content, _) = GroqProvider::extract_content(body);
        assert_eq!(content, body);

        let (content, parsed) = GroqProvider::extract_content("not json at all");
        assert_eq!(content, "not json at all");
        assert!(parsed.is_none());
    }

    #[test]
    fn test_parse_error_response_keeps_upstream_body() {
        let body = r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error"}}"#;
        let err = GroqProvider::parse_error_response(reqwest::StatusCode::UNAUTHORIZED, body);

        assert_eq!(err.code, ErrorCode::ExternalServiceError);
        assert!(err.message.contains("Invalid API Key"));
        assert_eq!(err.details["error"]["type"], "invalid_request_error");
    }

    #[test]
    fn test_parse_error_response_plain_text_body() {
        let err = GroqProvider::parse_error_response(
            reqwest::StatusCode::BAD_GATEWAY,
            "upstream exploded",
        );
        assert!(err.message.contains("502"));
        assert_eq!(err.details, Value::String("upstream exploded".to_owned()));
    }

    #[test]
    fn test_from_config_requires_api_key() {
        let Err(err) = GroqProvider::from_config(&AiConfig::default()) else {
            panic!("expected configuration error");
        };
        assert_eq!(err.code, ErrorCode::ConfigMissing);
        assert!(err.message.contains("GROQ_API_KEY"));
    }

    #[test]
    fn test_api_url_trims_trailing_slash() {
        let provider = GroqProvider::new(
            "key",
            "http://localhost:9999/v1/",
            "groq/compound",
            Duration::from_secs(30),
        )
        .unwrap();
        assert_eq!(
            provider.api_url("chat/completions"),
            "http://localhost:9999/v1/chat/completions"
        );
    }
}
