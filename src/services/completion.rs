//! Chat-completions client for the external model API.
//!
//! Built fresh per request; the handler holds no connection state across
//! invocations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AppConfig;

// Sampling is fixed; only the model name comes from configuration.
const TEMPERATURE: f32 = 1.0;
const MAX_TOKENS: u32 = 1200;

/// Stand-in reply when the model returns nothing usable.
pub const EMPTY_REPLY_FALLBACK: &str = "Sorry, I didn't catch that.";

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion API key is not configured")]
    MissingKey,
    #[error("completion API rejected our credentials ({status}): {body}")]
    Unauthorized { status: u16, body: String },
    #[error("completion API rate limit hit ({status}): {body}")]
    RateLimited { status: u16, body: String },
    #[error("completion API error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// A single turn in the conversation sent to the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

pub struct CompletionClient {
    http: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl CompletionClient {
    /// Build a client for one request. Fails when no API key is configured.
    pub fn new(config: &AppConfig) -> Result<Self, CompletionError> {
        let api_key = config.api_key.clone().ok_or(CompletionError::MissingKey)?;
        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            api_base: config.api_base.clone(),
            model: config.model.clone(),
        })
    }

    /// Run one chat completion and return the reply text, with the blank
    /// fallback already applied.
    pub async fn complete(&self, messages: Vec<Message>) -> Result<String, CompletionError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: &messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => CompletionError::Unauthorized {
                    status: status.as_u16(),
                    body,
                },
                429 => CompletionError::RateLimited {
                    status: status.as_u16(),
                    body,
                },
                code => CompletionError::Api { status: code, body },
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        Ok(extract_reply(&completion))
    }
}

/// First choice's text, trimmed. Blank or missing content becomes the fixed
/// fallback so the client always has something to show.
pub fn extract_reply(completion: &ChatCompletionResponse) -> String {
    completion
        .choices
        .first()
        .and_then(|choice| choice.message.content.as_deref())
        .map(str::trim)
        .filter(|content| !content.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| EMPTY_REPLY_FALLBACK.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_from(json: &str) -> ChatCompletionResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn reply_is_trimmed() {
        let completion = response_from(
            r#"{"choices":[{"message":{"role":"assistant","content":"  Pack a raincoat.  "}}]}"#,
        );
        assert_eq!(extract_reply(&completion), "Pack a raincoat.");
    }

    #[test]
    fn blank_content_falls_back() {
        let completion =
            response_from(r#"{"choices":[{"message":{"role":"assistant","content":" \n\t"}}]}"#);
        assert_eq!(extract_reply(&completion), EMPTY_REPLY_FALLBACK);
    }

    #[test]
    fn null_content_falls_back() {
        let completion =
            response_from(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#);
        assert_eq!(extract_reply(&completion), EMPTY_REPLY_FALLBACK);
    }

    #[test]
    fn missing_choices_fall_back() {
        let completion = response_from(r#"{"choices":[]}"#);
        assert_eq!(extract_reply(&completion), EMPTY_REPLY_FALLBACK);

        let completion = response_from(r#"{}"#);
        assert_eq!(extract_reply(&completion), EMPTY_REPLY_FALLBACK);
    }
}
