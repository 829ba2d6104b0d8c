//! Validated debate configuration

use super::pool::Pool;
use super::style::ResponseStyle;
use crate::budget::DEFAULT_TIME_LIMIT_SECONDS;
use crate::core::error::DomainError;
use crate::participant::{Participant, Role, SpeakingOrder};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROUNDS: u32 = 6;
pub const DEFAULT_ROTATION_LIMIT: u32 = 3;

/// Tunable parameters of a debate run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateSettings {
    pub rounds: u32,
    pub speaking_order: SpeakingOrder,
    pub rotation_limit: u32,
    pub response_style: ResponseStyle,
    pub time_limit_seconds: f64,
    /// Seed for replacement selection; `None` draws from entropy
    pub rotation_seed: Option<u64>,
}

impl Default for DebateSettings {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            speaking_order: SpeakingOrder::default(),
            rotation_limit: DEFAULT_ROTATION_LIMIT,
            response_style: ResponseStyle::default(),
            time_limit_seconds: DEFAULT_TIME_LIMIT_SECONDS,
            rotation_seed: None,
        }
    }
}

impl DebateSettings {
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_speaking_order(mut self, order: SpeakingOrder) -> Self {
        self.speaking_order = order;
        self
    }

    pub fn with_rotation_limit(mut self, limit: u32) -> Self {
        self.rotation_limit = limit;
        self
    }

    pub fn with_response_style(mut self, style: ResponseStyle) -> Self {
        self.response_style = style;
        self
    }

    pub fn with_time_limit(mut self, seconds: f64) -> Self {
        self.time_limit_seconds = seconds;
        self
    }

    pub fn with_rotation_seed(mut self, seed: u64) -> Self {
        self.rotation_seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.rounds == 0 {
            return Err(DomainError::InvalidRoundCount);
        }
        Ok(())
    }
}

/// Everything needed to start a debate.
///
/// # Example
///
/// ```
/// use arena_domain::{DebateSetup, Participant};
///
/// let challengers = (1..=4)
///     .map(|i| Participant::challenger(format!("C{i}"), "persona"))
///     .collect();
/// let setup = DebateSetup::new("Is free will real?", Participant::advocate("A", "persona"), challengers);
/// assert!(setup.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateSetup {
    pub topic: String,
    pub advocate: Participant,
    pub challengers: Vec<Participant>,
    pub settings: DebateSettings,
}

impl DebateSetup {
    pub fn new(
        topic: impl Into<String>,
        advocate: Participant,
        challengers: Vec<Participant>,
    ) -> Self {
        Self {
            topic: topic.into(),
            advocate,
            challengers,
            settings: DebateSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: DebateSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Check the topic, roles, names, and settings.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.topic.trim().is_empty() {
            return Err(DomainError::EmptyTopic);
        }
        self.settings.validate()?;
        validate_roster(&self.advocate, &self.challengers)
    }
}

/// Advocate must be an Advocate and share no name with the challengers;
/// the challengers must form a valid pool.
pub fn validate_roster(
    advocate: &Participant,
    challengers: &[Participant],
) -> Result<(), DomainError> {
    if advocate.role != Role::Advocate {
        return Err(DomainError::WrongRole {
            name: advocate.name.clone(),
            expected: Role::Advocate.label().to_string(),
        });
    }
    Pool::new(challengers.to_vec())?;
    if challengers.iter().any(|c| c.name == advocate.name) {
        return Err(DomainError::DuplicateParticipant(advocate.name.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn challengers() -> Vec<Participant> {
        (1..=4)
            .map(|i| Participant::challenger(format!("C{i}"), "persona"))
            .collect()
    }

    fn setup() -> DebateSetup {
        DebateSetup::new("Topic", Participant::advocate("A", "persona"), challengers())
    }

    #[test]
    fn test_defaults() {
        let settings = DebateSettings::default();
        assert_eq!(settings.rounds, 6);
        assert_eq!(settings.rotation_limit, 3);
        assert_eq!(settings.response_style, ResponseStyle::Standard);
        assert_eq!(settings.speaking_order.first(), Role::Advocate);
        assert_eq!(settings.time_limit_seconds, 300.0);
        assert!(settings.rotation_seed.is_none());
    }

    #[test]
    fn test_valid_setup() {
        assert!(setup().validate().is_ok());
    }

    #[test]
    fn test_empty_topic() {
        let mut s = setup();
        s.topic = "   ".to_string();
        assert_eq!(s.validate().unwrap_err(), DomainError::EmptyTopic);
    }

    #[test]
    fn test_zero_rounds() {
        let s = setup().with_settings(DebateSettings::default().with_rounds(0));
        assert_eq!(s.validate().unwrap_err(), DomainError::InvalidRoundCount);
    }

    #[test]
    fn test_advocate_name_clash() {
        let mut s = setup();
        s.advocate.name = "C2".to_string();
        assert_eq!(
            s.validate().unwrap_err(),
            DomainError::DuplicateParticipant("C2".to_string())
        );
    }

    #[test]
    fn test_advocate_wrong_role() {
        let mut s = setup();
        s.advocate.role = Role::Challenger;
        assert!(matches!(s.validate().unwrap_err(), DomainError::WrongRole { .. }));
    }

    #[test]
    fn test_too_few_challengers() {
        let mut s = setup();
        s.challengers.pop();
        assert!(matches!(
            s.validate().unwrap_err(),
            DomainError::TooFewChallengers { .. }
        ));
    }
}
