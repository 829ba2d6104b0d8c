//! Participant descriptors from TOML (`[advocate]` and `[[challengers]]`)

use arena_domain::participant::entities::DEFAULT_MODEL;
use arena_domain::{Participant, Role};
use serde::{Deserialize, Serialize};

/// Raw participant entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileParticipantConfig {
    pub name: String,
    /// Persona preamble given to the model
    pub role_description: String,
    /// Responder model handle
    pub model: String,
}

impl Default for FileParticipantConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            role_description: String::new(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl FileParticipantConfig {
    pub fn new(name: impl Into<String>, role_description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role_description: role_description.into(),
            ..Self::default()
        }
    }

    /// Build the domain participant for the given side.
    ///
    /// A blank model falls back to the default handle.
    pub fn to_participant(&self, role: Role) -> Participant {
        let participant = Participant::new(self.name.trim(), role, self.role_description.clone());
        if self.model.trim().is_empty() {
            participant
        } else {
            participant.with_model(self.model.trim())
        }
    }
}

impl From<&Participant> for FileParticipantConfig {
    fn from(participant: &Participant) -> Self {
        Self {
            name: participant.name.clone(),
            role_description: participant.role_description.clone(),
            model: participant.model.clone(),
        }
    }
}
