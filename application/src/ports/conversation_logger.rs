//! Port for structured debate logging.
//!
//! Defines the [`ConversationLogger`] trait for recording debate events
//! (statements, judge evaluations, tallies, rotations) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures every
//! exchange in a machine-readable format (JSONL).

use serde_json::{Value, json};

/// Event type identifiers written by the orchestrator.
pub mod events {
    pub const STATEMENT: &str = "statement";
    pub const STATEMENT_FAILED: &str = "statement_failed";
    pub const EVALUATION: &str = "evaluation";
    pub const EVALUATION_FAILED: &str = "evaluation_failed";
    pub const VOTING: &str = "voting";
    pub const ROTATION: &str = "rotation";
}

/// A structured debate event for logging.
///
/// Each event has a type string and a JSON payload containing event-specific
/// fields. The adapter adds the timestamp when it writes the record.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationEvent {
    /// One of the [`events`] identifiers.
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// A statement that made it into the transcript
    pub fn statement(round: u32, speaker: &str, text: &str, truncated: bool) -> Self {
        Self::new(
            events::STATEMENT,
            json!({
                "round": round,
                "speaker": speaker,
                "text": text,
                "truncated": truncated,
            }),
        )
    }

    /// A responder failure replaced by the placeholder statement
    pub fn statement_failed(round: u32, speaker: &str, error: &str) -> Self {
        Self::new(
            events::STATEMENT_FAILED,
            json!({ "round": round, "speaker": speaker, "error": error }),
        )
    }
}

/// Port for logging debate events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL line).
/// The `log` method is synchronous and non-fallible so that a broken log
/// never stops a debate; logging failures are silently ignored.
pub trait ConversationLogger: Send + Sync {
    /// Record a debate event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_event_payload() {
        let event = ConversationEvent::statement(2, "Alice", "Taxes work.", true);
        assert_eq!(event.event_type, "statement");
        assert_eq!(event.payload["round"], 2);
        assert_eq!(event.payload["speaker"], "Alice");
        assert_eq!(event.payload["truncated"], true);
    }

    #[test]
    fn test_statement_failed_payload() {
        let event = ConversationEvent::statement_failed(1, "Bob", "Timeout");
        assert_eq!(event.event_type, events::STATEMENT_FAILED);
        assert_eq!(event.payload["error"], "Timeout");
    }
}
