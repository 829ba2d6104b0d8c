//! JSON file writer for finished debates

use arena_application::ports::transcript_store::{TranscriptStore, TranscriptStoreError};
use arena_domain::DebateRecord;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::info;

const TOPIC_CHARS: usize = 30;

/// Writes each transcript to its own timestamped file under `dir`.
#[derive(Debug, Clone)]
pub struct JsonTranscriptStore {
    dir: PathBuf,
}

impl JsonTranscriptStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// `debate_<topic>_<YYYYMMDD_HHMMSS>.json`
///
/// Non-alphanumeric characters in the topic become `_` and the topic part is
/// cut to 30 characters; an empty topic yields `debate_<timestamp>.json`.
///
/// ```
/// use arena_infrastructure::transcript_file_name;
///
/// let at = chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
///     .unwrap()
///     .and_hms_opt(9, 30, 0)
///     .unwrap()
///     .and_local_timezone(chrono::Local)
///     .unwrap();
/// assert_eq!(
///     transcript_file_name("Does God exist?", &at),
///     "debate_Does_God_exist__20240501_093000.json"
/// );
/// ```
pub fn transcript_file_name(topic: &str, at: &DateTime<Local>) -> String {
    let sanitized: String = topic
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .take(TOPIC_CHARS)
        .collect();
    let stamp = at.format("%Y%m%d_%H%M%S");
    if sanitized.is_empty() {
        format!("debate_{}.json", stamp)
    } else {
        format!("debate_{}_{}.json", sanitized, stamp)
    }
}

impl TranscriptStore for JsonTranscriptStore {
    fn save(&self, record: &DebateRecord) -> Result<PathBuf, TranscriptStoreError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self
            .dir
            .join(transcript_file_name(&record.topic, &Local::now()));

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| TranscriptStoreError::Serialization(e.to_string()))?;
        std::fs::write(&path, json)?;

        info!("Transcript saved to {}", path.display());
        Ok(path)
    }
}
