//! Domain error types

use thiserror::Error;

/// Setup and programming errors.
///
/// These are fatal: they surface before any round runs (or on an invalid
/// `evaluate` call) and are never recovered silently. Responder failures and
/// unparsable judge replies are not represented here because they degrade
/// locally instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Need at least {required} challengers, got {actual}")]
    TooFewChallengers { required: usize, actual: usize },

    #[error("Participant name '{0}' is used more than once")]
    DuplicateParticipant(String),

    #[error("Participant '{name}' must have the {expected} role")]
    WrongRole { name: String, expected: String },

    #[error("Round count must be at least 1")]
    InvalidRoundCount,

    #[error("Topic cannot be empty")]
    EmptyTopic,

    #[error("'{0}' is not one of the current judges")]
    NotAJudge(String),

    #[error("'{0}' is not a member of the challenger pool")]
    UnknownParticipant(String),

    #[error("Rotation limit of {0} already reached")]
    RotationLimitReached(u32),
}
