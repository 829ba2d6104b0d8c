//! Configuration error type

use arena_domain::{ConfigIssue, DomainError};
use thiserror::Error;

/// Errors raised while loading, converting, or writing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {}", summarize(.0))]
    Invalid(Vec<ConfigIssue>),

    #[error("Invalid debate setup: {0}")]
    Setup(#[from] DomainError),

    #[error("Failed to write configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown preset {0} (valid: 1-3)")]
    UnknownPreset(u8),
}

impl ConfigError {
    /// Issues attached to an [`ConfigError::Invalid`] error
    pub fn issues(&self) -> &[ConfigIssue] {
        match self {
            ConfigError::Invalid(issues) => issues,
            _ => &[],
        }
    }
}

fn summarize(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .filter(|i| i.is_error())
        .map(|i| i.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
