//! Transcript persistence port

use arena_domain::DebateRecord;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranscriptStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Saves a finished debate somewhere durable
pub trait TranscriptStore: Send + Sync {
    /// Persist the record, returning where it was written
    fn save(&self, record: &DebateRecord) -> Result<PathBuf, TranscriptStoreError>;
}
