//! Raw TOML configuration data types
//!
//! These structs mirror the configuration file exactly and are deserialized
//! directly. Every section uses `#[serde(default)]`, so a partial file only
//! overrides what it names.
//!
//! ```toml
//! topic = "Does God exist?"
//!
//! [advocate]
//! name = "Atheist Advocate"
//! role_description = "You are representing the Atheist position..."
//!
//! [[challengers]]
//! name = "Theist Expert 1"
//! role_description = "You are representing the Theist position..."
//! model = "llama3:latest"
//!
//! [debate]
//! rounds = 6
//! starting_position = "advocate"
//! rotation_limit = 3
//! response_style = "standard"
//!
//! [output]
//! dir = "output"
//! ```

mod debate;
mod output;
mod participants;
mod responder;

pub use debate::FileDebateConfig;
pub use output::FileOutputConfig;
pub use participants::FileParticipantConfig;
pub use responder::{
    DEFAULT_BASE_URL, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_SECONDS, FileResponderConfig,
};

use super::error::ConfigError;
use arena_domain::debate::MIN_CHALLENGERS;
use arena_domain::{ConfigIssue, ConfigIssueCode, DebateSetup, Role};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Debate motion
    pub topic: String,
    /// The fixed side
    pub advocate: FileParticipantConfig,
    /// The rotating pool; the first entry debates first
    pub challengers: Vec<FileParticipantConfig>,
    pub debate: FileDebateConfig,
    pub output: FileOutputConfig,
    pub responder: FileResponderConfig,
}

impl FileConfig {
    /// Whether the file describes a debate at all.
    ///
    /// An empty configuration lets the CLI fall back to a built-in preset.
    pub fn has_debate(&self) -> bool {
        !self.topic.trim().is_empty()
            || !self.advocate.name.trim().is_empty()
            || !self.challengers.is_empty()
    }

    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Issues with [`Severity::Error`](arena_domain::Severity::Error) make
    /// [`to_setup`](Self::to_setup) fail; warnings fall back to defaults.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Required fields
        if self.topic.trim().is_empty() {
            issues.push(missing("topic"));
        }
        if self.advocate.name.trim().is_empty() {
            issues.push(missing("advocate.name"));
        }
        for (i, challenger) in self.challengers.iter().enumerate() {
            if challenger.name.trim().is_empty() {
                issues.push(missing(&format!("challengers[{}].name", i)));
            }
        }

        // 2. Pool size
        if self.challengers.len() < MIN_CHALLENGERS {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::TooFewChallengers {
                    required: MIN_CHALLENGERS,
                    actual: self.challengers.len(),
                },
                format!(
                    "challengers: need at least {}, found {}",
                    MIN_CHALLENGERS,
                    self.challengers.len()
                ),
            ));
        }

        // 3. Unique names across both sides
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let names = std::iter::once(&self.advocate)
            .chain(&self.challengers)
            .map(|p| p.name.trim())
            .filter(|name| !name.is_empty());
        for name in names {
            if !seen.insert(name) && reported.insert(name) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::DuplicateName {
                        name: name.to_string(),
                    },
                    format!("participant name '{}' is used more than once", name),
                ));
            }
        }

        // 4. Debate settings and responder
        issues.extend(self.debate.to_settings().1);
        issues.extend(self.responder.validate());

        issues
    }

    /// Convert into a validated domain setup.
    ///
    /// Warnings are logged and their defaults used; any error-level issue
    /// aborts the conversion with every issue attached.
    pub fn to_setup(&self) -> Result<DebateSetup, ConfigError> {
        let issues = self.validate();
        if issues.iter().any(ConfigIssue::is_error) {
            return Err(ConfigError::Invalid(issues));
        }
        for issue in &issues {
            warn!("{}", issue);
        }

        let (settings, _) = self.debate.to_settings();
        let setup = DebateSetup::new(
            self.topic.trim(),
            self.advocate.to_participant(Role::Advocate),
            self.challengers
                .iter()
                .map(|c| c.to_participant(Role::Challenger))
                .collect(),
        )
        .with_settings(settings);

        setup.validate()?;
        Ok(setup)
    }
}

fn missing(field: &str) -> ConfigIssue {
    ConfigIssue::error(
        ConfigIssueCode::MissingField {
            field: field.to_string(),
        },
        format!("{} is required", field),
    )
}
