//! Participant entity

use super::role::Role;
use serde::{Deserialize, Serialize};

/// Responder model used when a participant descriptor names none
pub const DEFAULT_MODEL: &str = "llama3:latest";

/// A named debate participant.
///
/// The `model` field is an opaque handle: the core never interprets it, it is
/// passed back to the responder adapter, which routes on it.
///
/// # Example
///
/// ```
/// use arena_domain::{Participant, Role};
///
/// let p = Participant::challenger("Theist Expert 1", "You argue for theism.");
/// assert_eq!(p.role, Role::Challenger);
/// assert_eq!(p.model, "llama3:latest");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique within a debate
    pub name: String,
    pub role: Role,
    /// Persona preamble consumed verbatim in the system prompt
    pub role_description: String,
    /// Responder handle (e.g. an Ollama model tag)
    pub model: String,
}

impl Participant {
    pub fn new(name: impl Into<String>, role: Role, role_description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role,
            role_description: role_description.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn advocate(name: impl Into<String>, role_description: impl Into<String>) -> Self {
        Self::new(name, Role::Advocate, role_description)
    }

    pub fn challenger(name: impl Into<String>, role_description: impl Into<String>) -> Self {
        Self::new(name, Role::Challenger, role_description)
    }

    /// Set the responder model handle
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn is_advocate(&self) -> bool {
        self.role == Role::Advocate
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
