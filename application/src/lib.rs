//! Application layer for debate-arena
//!
//! This crate contains the debate orchestration use case and the port
//! definitions its adapters implement. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    progress::{DebateProgressNotifier, NoProgress},
    responder::{Responder, ResponderError},
    transcript_store::{TranscriptStore, TranscriptStoreError},
};
pub use use_cases::run_debate::{
    DebateOrchestrator, DebateState, RotationController, RotationOutcome, RunDebateError,
};
