//! Persisted transcript format.
//!
//! These structs fix the JSON keys of a saved debate. They are built from a
//! [`DebateResult`] and never fed back into the engine.

use super::result::DebateResult;
use super::round::Round;
use crate::judging::{Evaluation, Verdict, VotingOutcome};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateRecord {
    pub topic: String,
    pub advocate_name: String,
    pub challenger_names: Vec<String>,
    pub total_rounds: u32,
    pub total_rotations: u32,
    pub rounds: Vec<RoundRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub advocate_name: String,
    pub challenger_name: String,
    pub advocate_statement: String,
    pub challenger_statement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voting_results: Option<VotingRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VotingRecord {
    #[serde(rename = "continue")]
    pub keep: bool,
    pub continue_votes: usize,
    pub replace_votes: usize,
    pub evaluations: Vec<EvaluationRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub judge_name: String,
    pub total_score: f64,
    pub vote: Verdict,
    pub comments: String,
    pub criteria_scores: CriteriaScores,
}

/// `{criterion: score}` map that keeps criteria-set order on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaScores(pub Vec<(String, u8)>);

impl CriteriaScores {
    pub fn get(&self, criterion: &str) -> Option<u8> {
        self.0
            .iter()
            .find(|(key, _)| key == criterion)
            .map(|(_, score)| *score)
    }
}

impl Serialize for CriteriaScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (criterion, score) in &self.0 {
            map.serialize_entry(criterion, score)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CriteriaScores {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScoresVisitor;

        impl<'de> Visitor<'de> for ScoresVisitor {
            type Value = CriteriaScores;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of criterion names to scores")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, u8>()? {
                    entries.push((key, value));
                }
                Ok(CriteriaScores(entries))
            }
        }

        deserializer.deserialize_map(ScoresVisitor)
    }
}

impl From<&Evaluation> for EvaluationRecord {
    fn from(evaluation: &Evaluation) -> Self {
        Self {
            judge_name: evaluation.judge_name.clone(),
            total_score: evaluation.total_score,
            vote: evaluation.vote,
            comments: evaluation.comments.clone(),
            criteria_scores: CriteriaScores(
                evaluation
                    .scores
                    .iter()
                    .map(|s| (s.criterion().to_string(), s.score()))
                    .collect(),
            ),
        }
    }
}

impl From<&VotingOutcome> for VotingRecord {
    fn from(outcome: &VotingOutcome) -> Self {
        Self {
            keep: outcome.decision.is_continue(),
            continue_votes: outcome.continue_votes,
            replace_votes: outcome.replace_votes,
            evaluations: outcome.evaluations.iter().map(EvaluationRecord::from).collect(),
        }
    }
}

impl From<&Round> for RoundRecord {
    fn from(round: &Round) -> Self {
        Self {
            round: round.number,
            advocate_name: round.advocate_name.clone(),
            challenger_name: round.challenger_name.clone(),
            advocate_statement: round.advocate_statement.clone(),
            challenger_statement: round.challenger_statement.clone(),
            voting_results: round.voting.as_ref().map(VotingRecord::from),
        }
    }
}

impl From<&DebateResult> for DebateRecord {
    fn from(result: &DebateResult) -> Self {
        Self {
            topic: result.topic.clone(),
            advocate_name: result.advocate_name.clone(),
            challenger_names: result.challenger_names.clone(),
            total_rounds: result.total_rounds,
            total_rotations: result.total_rotations,
            rounds: result.transcript.iter().map(RoundRecord::from).collect(),
        }
    }
}
