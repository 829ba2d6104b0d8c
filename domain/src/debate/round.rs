//! A completed debate round

use crate::judging::VotingOutcome;
use crate::memory::RoundMemory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based
    pub number: u32,
    pub advocate_name: String,
    pub challenger_name: String,
    pub advocate_statement: String,
    pub challenger_statement: String,
    /// Absent on the final round, which is never judged
    pub voting: Option<VotingOutcome>,
}

impl Round {
    pub fn new(
        number: u32,
        advocate_name: impl Into<String>,
        challenger_name: impl Into<String>,
    ) -> Self {
        Self {
            number,
            advocate_name: advocate_name.into(),
            challenger_name: challenger_name.into(),
            advocate_statement: String::new(),
            challenger_statement: String::new(),
            voting: None,
        }
    }

    pub fn with_statements(
        mut self,
        advocate_statement: impl Into<String>,
        challenger_statement: impl Into<String>,
    ) -> Self {
        self.advocate_statement = advocate_statement.into();
        self.challenger_statement = challenger_statement.into();
        self
    }

    pub fn is_judged(&self) -> bool {
        self.voting.is_some()
    }

    /// Snapshot handed to each participant's memory
    pub fn to_memory(&self) -> RoundMemory {
        RoundMemory::new(
            self.number,
            self.advocate_statement.clone(),
            self.challenger_statement.clone(),
        )
    }
}
