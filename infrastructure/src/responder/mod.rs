//! Responder adapters
//!
//! - [`OllamaResponder`]: chat requests against a local Ollama server
//!   (feature `ollama`, on by default)
//! - [`CannedResponder`]: deterministic offline replies for dry runs

mod canned;
#[cfg(feature = "ollama")]
mod ollama;

pub use canned::CannedResponder;
#[cfg(feature = "ollama")]
pub use ollama::{ChatMessage, ChatOptions, ChatRequest, OllamaResponder};
