//! Responder settings from TOML (`[responder]` section)

use arena_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 120;

/// Raw responder configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResponderConfig {
    /// Ollama server address
    pub base_url: String,
    pub temperature: f64,
    /// Per-request timeout
    pub timeout_seconds: u64,
}

impl Default for FileResponderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl FileResponderConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.base_url.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::MissingField {
                    field: "responder.base_url".to_string(),
                },
                "responder.base_url cannot be empty",
            ));
        }
        if self.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "responder.timeout_seconds".to_string(),
                },
                "responder.timeout_seconds cannot be 0",
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "responder.temperature".to_string(),
                },
                format!(
                    "responder.temperature {} is outside 0.0..=2.0",
                    self.temperature
                ),
            ));
        }
        issues
    }
}
