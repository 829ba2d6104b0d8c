//! Raw round history kept by each participant

use crate::participant::Role;
use serde::{Deserialize, Serialize};

/// The statements of one round, as a participant witnessed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundMemory {
    pub round_number: u32,
    pub advocate_statement: String,
    pub challenger_statement: String,
}

impl RoundMemory {
    pub fn new(
        round_number: u32,
        advocate_statement: impl Into<String>,
        challenger_statement: impl Into<String>,
    ) -> Self {
        Self {
            round_number,
            advocate_statement: advocate_statement.into(),
            challenger_statement: challenger_statement.into(),
        }
    }

    /// Statement made by the given side
    pub fn statement_of(&self, role: Role) -> &str {
        match role {
            Role::Advocate => &self.advocate_statement,
            Role::Challenger => &self.challenger_statement,
        }
    }
}

/// Append-only memory of one participant.
///
/// Own and opponent points are split by the owner's [`Role`]: a judge is a
/// Challenger, so the Challenger's statements count as its own side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySummary {
    role: Role,
    history: Vec<RoundMemory>,
    own_points: Vec<String>,
    opponent_points: Vec<String>,
}

impl MemorySummary {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            history: Vec::new(),
            own_points: Vec::new(),
            opponent_points: Vec::new(),
        }
    }

    /// Record a completed round. Blank statements add no key point.
    pub fn record(&mut self, round: RoundMemory) {
        let own = round.statement_of(self.role);
        if !own.trim().is_empty() {
            self.own_points.push(own.to_string());
        }
        let opponent = round.statement_of(self.role.opponent());
        if !opponent.trim().is_empty() {
            self.opponent_points.push(opponent.to_string());
        }
        self.history.push(round);
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.own_points.clear();
        self.opponent_points.clear();
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn history(&self) -> &[RoundMemory] {
        &self.history
    }

    pub fn own_points(&self) -> &[String] {
        &self.own_points
    }

    pub fn opponent_points(&self) -> &[String] {
        &self.opponent_points
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn rounds_recorded(&self) -> usize {
        self.history.len()
    }
}
