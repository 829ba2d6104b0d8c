//! Responder port
//!
//! Defines the interface for obtaining a statement or an evaluation from the
//! model behind a participant.

use arena_domain::{Participant, PromptRequest};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while asking a responder for text
///
/// The orchestrator never propagates these: a failed turn becomes a
/// placeholder statement and a failed evaluation becomes a neutral one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponderError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Produces text for a participant
///
/// `participant.model` is the routing handle; `request.max_units` is a
/// length hint the implementation may pass on to the model. Implementations
/// (adapters) live in the infrastructure layer.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(
        &self,
        participant: &Participant,
        request: &PromptRequest,
    ) -> Result<String, ResponderError>;

    /// Short name used in logs
    fn name(&self) -> &str {
        "responder"
    }
}
