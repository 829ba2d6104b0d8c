//! Infrastructure layer for debate-arena
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod logging;
pub mod responder;
pub mod transcript;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, DebatePreset, FileConfig, FileDebateConfig, FileOutputConfig,
    FileParticipantConfig, FileResponderConfig,
};
pub use logging::JsonlConversationLogger;
pub use responder::CannedResponder;
#[cfg(feature = "ollama")]
pub use responder::OllamaResponder;
pub use transcript::{JsonTranscriptStore, transcript_file_name};
