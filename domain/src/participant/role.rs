//! Debate sides and speaking order

use serde::{Deserialize, Serialize};

/// The side a participant argues for.
///
/// # Example
///
/// ```
/// use arena_domain::Role;
///
/// assert_eq!(Role::Advocate.opponent(), Role::Challenger);
/// assert_eq!("challenger".parse::<Role>().ok(), Some(Role::Challenger));
/// assert_eq!("x".parse::<Role>().ok(), Some(Role::Advocate));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Defends the initial position; fixed for the whole debate
    Advocate,
    /// Member of the rotating opposing pool
    Challenger,
}

impl Role {
    /// The other side
    pub fn opponent(&self) -> Role {
        match self {
            Role::Advocate => Role::Challenger,
            Role::Challenger => Role::Advocate,
        }
    }

    /// Short label used in transcripts and summaries
    pub fn label(&self) -> &'static str {
        match self {
            Role::Advocate => "Advocate",
            Role::Challenger => "Challenger",
        }
    }

    /// How the side is described to the model
    pub fn stance(&self) -> &'static str {
        match self {
            Role::Advocate => "advocating",
            Role::Challenger => "challenging",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    /// Accepts `advocate`/`challenger` and the legacy `x`/`y` position names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "advocate" | "x" => Ok(Role::Advocate),
            "challenger" | "y" => Ok(Role::Challenger),
            other => Err(format!(
                "Unknown role: {}. Valid: advocate, challenger",
                other
            )),
        }
    }
}

/// Order in which the two sides speak within one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakingOrder {
    first: Role,
}

impl SpeakingOrder {
    /// Speaking order starting with the given side
    pub fn starting_with(first: Role) -> Self {
        Self { first }
    }

    pub fn first(&self) -> Role {
        self.first
    }

    pub fn second(&self) -> Role {
        self.first.opponent()
    }

    /// Both sides in speaking order
    pub fn sides(&self) -> [Role; 2] {
        [self.first(), self.second()]
    }
}

impl Default for SpeakingOrder {
    fn default() -> Self {
        Self::starting_with(Role::Advocate)
    }
}
