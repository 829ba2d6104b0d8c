//! Final output of a debate

use super::round::Round;
use serde::{Deserialize, Serialize};

/// Summary and full transcript of a finished debate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateResult {
    pub topic: String,
    pub advocate_name: String,
    /// Every Challenger who debated at some point, in pool order
    pub challenger_names: Vec<String>,
    pub total_rounds: u32,
    pub total_rotations: u32,
    pub transcript: Vec<Round>,
}

impl DebateResult {
    /// Rounds that were judged (all but the last)
    pub fn judged_rounds(&self) -> impl Iterator<Item = &Round> {
        self.transcript.iter().filter(|r| r.is_judged())
    }

    /// Rounds where the panel voted to replace the debater
    pub fn replace_decisions(&self) -> usize {
        self.judged_rounds()
            .filter(|r| r.voting.as_ref().is_some_and(|v| !v.decision.is_continue()))
            .count()
    }
}
