//! Prompt domain
//!
//! Segments handed to the responder and the templates that fill them for
//! debate turns and judge evaluations.

mod segment;
mod template;

pub use segment::{PromptRequest, PromptSegment, SegmentKind, TurnPosition};
pub use template::{DebatePromptTemplate, HISTORY_WINDOW, PLACEHOLDER_STATEMENT};
