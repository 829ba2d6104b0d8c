//! Debate settings from TOML (`[debate]` section)

use arena_domain::budget::DEFAULT_TIME_LIMIT_SECONDS;
use arena_domain::debate::{DEFAULT_ROTATION_LIMIT, DEFAULT_ROUNDS};
use arena_domain::{
    ConfigIssue, ConfigIssueCode, DebateSettings, ResponseStyle, Role, SpeakingOrder,
};
use serde::{Deserialize, Serialize};

/// Raw debate settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    pub rounds: u32,
    /// Side that speaks first: "advocate" or "challenger" ("x"/"y" accepted)
    pub starting_position: String,
    pub rotation_limit: u32,
    /// "brief", "concise", "standard" or "detailed"
    pub response_style: String,
    pub time_limit_seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_seed: Option<u64>,
}

impl Default for FileDebateConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            starting_position: "advocate".to_string(),
            rotation_limit: DEFAULT_ROTATION_LIMIT,
            response_style: ResponseStyle::default().as_str().to_string(),
            time_limit_seconds: DEFAULT_TIME_LIMIT_SECONDS,
            rotation_seed: None,
        }
    }
}

impl FileDebateConfig {
    /// Parse the starting side, falling back to the Advocate.
    pub fn parse_starting_position(&self) -> (Role, Vec<ConfigIssue>) {
        match self.starting_position.parse::<Role>() {
            Ok(role) => (role, Vec::new()),
            Err(_) => (
                Role::Advocate,
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "debate.starting_position".to_string(),
                        value: self.starting_position.clone(),
                        valid_values: vec!["advocate".to_string(), "challenger".to_string()],
                    },
                    format!(
                        "debate.starting_position: unknown value '{}', falling back to 'advocate'",
                        self.starting_position
                    ),
                )],
            ),
        }
    }

    /// Parse the response style, falling back to `standard`.
    pub fn parse_response_style(&self) -> (ResponseStyle, Vec<ConfigIssue>) {
        match self.response_style.parse::<ResponseStyle>() {
            Ok(style) => (style, Vec::new()),
            Err(_) => (
                ResponseStyle::default(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "debate.response_style".to_string(),
                        value: self.response_style.clone(),
                        valid_values: ResponseStyle::ALL
                            .iter()
                            .map(|s| s.as_str().to_string())
                            .collect(),
                    },
                    format!(
                        "debate.response_style: unknown value '{}', falling back to '{}'",
                        self.response_style,
                        ResponseStyle::default()
                    ),
                )],
            ),
        }
    }

    /// Convert into domain settings, collecting every issue found.
    pub fn to_settings(&self) -> (DebateSettings, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let (first, order_issues) = self.parse_starting_position();
        issues.extend(order_issues);
        let (style, style_issues) = self.parse_response_style();
        issues.extend(style_issues);

        if self.rounds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "debate.rounds".to_string(),
                },
                "debate.rounds must be at least 1",
            ));
        }

        let time_limit = if self.time_limit_seconds.is_finite() && self.time_limit_seconds > 0.0 {
            self.time_limit_seconds
        } else {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "debate.time_limit_seconds".to_string(),
                },
                format!(
                    "debate.time_limit_seconds must be positive, falling back to {}",
                    DEFAULT_TIME_LIMIT_SECONDS
                ),
            ));
            DEFAULT_TIME_LIMIT_SECONDS
        };

        let mut settings = DebateSettings::default()
            .with_rounds(self.rounds)
            .with_speaking_order(SpeakingOrder::starting_with(first))
            .with_rotation_limit(self.rotation_limit)
            .with_response_style(style)
            .with_time_limit(time_limit);
        if let Some(seed) = self.rotation_seed {
            settings = settings.with_rotation_seed(seed);
        }

        (settings, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_domain::Severity;

    #[test]
    fn test_defaults_match_domain() {
        let (settings, issues) = FileDebateConfig::default().to_settings();
        assert!(issues.is_empty());
        assert_eq!(settings, DebateSettings::default());
    }

    #[test]
    fn test_legacy_position_names() {
        let config = FileDebateConfig {
            starting_position: "Y".to_string(),
            ..Default::default()
        };
        let (settings, issues) = config.to_settings();
        assert!(issues.is_empty());
        assert_eq!(settings.speaking_order.first(), Role::Challenger);
    }

    #[test]
    fn test_unknown_style_warns_and_falls_back() {
        let config = FileDebateConfig {
            response_style: "verbose".to_string(),
            ..Default::default()
        };
        let (settings, issues) = config.to_settings();
        assert_eq!(settings.response_style, ResponseStyle::Standard);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_zero_rounds_is_error() {
        let config = FileDebateConfig {
            rounds: 0,
            ..Default::default()
        };
        let (_, issues) = config.to_settings();
        assert!(issues.iter().any(|i| i.is_error()));
    }

    #[test]
    fn test_non_positive_time_limit_warns() {
        let config = FileDebateConfig {
            time_limit_seconds: 0.0,
            ..Default::default()
        };
        let (settings, issues) = config.to_settings();
        assert_eq!(settings.time_limit_seconds, DEFAULT_TIME_LIMIT_SECONDS);
        assert!(!issues[0].is_error());
    }
}
