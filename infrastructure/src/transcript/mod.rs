//! Transcript persistence
//!
//! [`JsonTranscriptStore`] implements the
//! [`TranscriptStore`](arena_application::TranscriptStore) port by writing
//! the wire record as pretty-printed JSON.

mod json_store;

pub use json_store::{JsonTranscriptStore, transcript_file_name};
