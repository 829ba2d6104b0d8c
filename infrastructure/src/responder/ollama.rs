//! Ollama chat responder
//!
//! Sends each prompt to `{base_url}/api/chat` as a non-streaming chat
//! request. Segments map to chat roles in order:
//!
//! | Segment       | Chat role   |
//! |---------------|-------------|
//! | `System`      | `system`    |
//! | `Opponent`    | `user`      |
//! | `Own`         | `assistant` |
//! | `Instruction` | `user`      |

use arena_application::ports::responder::{Responder, ResponderError};
use arena_domain::{Participant, PromptRequest, SegmentKind};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::config::{DEFAULT_BASE_URL, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_SECONDS, FileResponderConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<usize>,
    pub temperature: f64,
}

/// Body of a `POST /api/chat` request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
    pub options: ChatOptions,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ChatMessage,
}

/// Responder backed by a local Ollama server
pub struct OllamaResponder {
    client: reqwest::Client,
    base_url: String,
    temperature: f64,
}

impl OllamaResponder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn from_config(config: &FileResponderConfig) -> Self {
        Self::with_timeout(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
        .with_temperature(config.temperature)
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Translate a prompt into the chat request body sent for `model`
    pub fn build_request(&self, model: &str, request: &PromptRequest) -> ChatRequest {
        let messages = request
            .segments
            .iter()
            .map(|segment| ChatMessage {
                role: chat_role(segment.kind).to_string(),
                content: segment.content.clone(),
            })
            .collect();

        ChatRequest {
            model: model.to_string(),
            messages,
            stream: false,
            options: ChatOptions {
                num_predict: request.max_units,
                temperature: self.temperature,
            },
        }
    }
}

impl Default for OllamaResponder {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn chat_role(kind: SegmentKind) -> &'static str {
    match kind {
        SegmentKind::System => "system",
        SegmentKind::Own => "assistant",
        SegmentKind::Opponent | SegmentKind::Instruction => "user",
    }
}

fn map_send_error(error: reqwest::Error) -> ResponderError {
    if error.is_timeout() {
        ResponderError::Timeout
    } else if error.is_connect() {
        ResponderError::ConnectionError(error.to_string())
    } else {
        ResponderError::RequestFailed(error.to_string())
    }
}

#[async_trait]
impl Responder for OllamaResponder {
    async fn respond(
        &self,
        participant: &Participant,
        request: &PromptRequest,
    ) -> Result<String, ResponderError> {
        let body = self.build_request(&participant.model, request);
        let url = format!("{}/api/chat", self.base_url);
        debug!(
            "POST {} for {} ({}, {} messages)",
            url,
            participant.name,
            participant.model,
            body.messages.len()
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ResponderError::ModelNotAvailable(participant.model.clone()));
        }
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ResponderError::RequestFailed(format!(
                "HTTP {}: {}",
                status,
                detail.trim()
            )));
        }

        let reply: ChatResponse = response
            .json()
            .await
            .map_err(|e| ResponderError::InvalidResponse(e.to_string()))?;
        Ok(reply.message.content)
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_domain::PromptSegment;

    #[test]
    fn test_segments_map_to_chat_roles() {
        let request = PromptRequest::new()
            .with_segment(PromptSegment::system("persona"))
            .with_segment(PromptSegment::opponent("Advocate: first"))
            .with_segment(PromptSegment::own("Challenger: reply"))
            .with_segment(PromptSegment::instruction("Continue."))
            .with_max_units(400);

        let body = OllamaResponder::default().build_request("llama3:latest", &request);
        let roles: Vec<&str> = body.messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, vec!["system", "user", "assistant", "user"]);
        assert_eq!(body.options.num_predict, Some(400));
        assert!(!body.stream);
    }

    #[test]
    fn test_request_body_shape() {
        let responder = OllamaResponder::new("http://localhost:11434/").with_temperature(0.2);
        assert_eq!(responder.base_url(), "http://localhost:11434");

        let body = responder.build_request("mistral", &PromptRequest::instruction("Score it."));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "mistral");
        assert_eq!(json["stream"], false);
        assert_eq!(json["options"]["temperature"], 0.2);
        assert!(json["options"].get("num_predict").is_none());
        assert_eq!(json["messages"][0]["content"], "Score it.");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_connection_error() {
        // Port 9 (discard) is closed on test machines
        let responder =
            OllamaResponder::with_timeout("http://127.0.0.1:9", Duration::from_secs(2));
        let participant = Participant::challenger("Judge", "persona");
        let err = responder
            .respond(&participant, &PromptRequest::instruction("hi"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ResponderError::ConnectionError(_) | ResponderError::Timeout | ResponderError::RequestFailed(_)
        ));
    }
}
