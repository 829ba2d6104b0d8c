//! Per-judge verdicts and the panel tally

use super::evaluation::{CONTINUE_THRESHOLD, Evaluation};
use serde::{Deserialize, Serialize};

/// Keep the active Challenger, or replace them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Continue,
    Replace,
}

impl Verdict {
    /// Verdict a single judge gives for a weighted total
    pub fn from_score(total_score: f64) -> Self {
        if total_score >= CONTINUE_THRESHOLD {
            Verdict::Continue
        } else {
            Verdict::Replace
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Continue => "CONTINUE",
            Verdict::Replace => "REPLACE",
        }
    }

    pub fn is_continue(&self) -> bool {
        matches!(self, Verdict::Continue)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aggregated result of one round of judging.
///
/// # Example
///
/// ```
/// use arena_domain::{CriteriaSet, Evaluation, Verdict, VotingOutcome};
///
/// let criteria = CriteriaSet::default();
/// let evaluations = vec![
///     Evaluation::neutral("b", 1, &criteria),
///     Evaluation::neutral("c", 1, &criteria),
/// ];
/// let outcome = VotingOutcome::tally(evaluations);
/// assert_eq!(outcome.decision, Verdict::Continue);
/// assert_eq!(outcome.vote_summary(), "[●●]");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VotingOutcome {
    pub decision: Verdict,
    pub continue_votes: usize,
    pub replace_votes: usize,
    /// In judge-list order
    pub evaluations: Vec<Evaluation>,
}

impl VotingOutcome {
    /// Tally evaluations: `Continue` iff at least half the judges say so.
    ///
    /// Ties keep the incumbent. An empty panel continues.
    pub fn tally(evaluations: Vec<Evaluation>) -> Self {
        let continue_votes = evaluations.iter().filter(|e| e.vote.is_continue()).count();
        let replace_votes = evaluations.len() - continue_votes;

        // continue_votes >= len / 2 in real arithmetic
        let decision = if continue_votes * 2 >= evaluations.len() {
            Verdict::Continue
        } else {
            Verdict::Replace
        };

        Self {
            decision,
            continue_votes,
            replace_votes,
            evaluations,
        }
    }

    pub fn judge_count(&self) -> usize {
        self.evaluations.len()
    }

    pub fn is_unanimous(&self) -> bool {
        self.continue_votes == self.judge_count() || self.replace_votes == self.judge_count()
    }

    /// Mean of the judges' weighted totals
    pub fn average_score(&self) -> f64 {
        if self.evaluations.is_empty() {
            0.0
        } else {
            self.evaluations.iter().map(|e| e.total_score).sum::<f64>()
                / self.evaluations.len() as f64
        }
    }

    /// Visual vote summary, e.g. "[●●○]" (● = continue)
    pub fn vote_summary(&self) -> String {
        let mut summary = String::from("[");
        for evaluation in &self.evaluations {
            summary.push(if evaluation.vote.is_continue() { '●' } else { '○' });
        }
        summary.push(']');
        summary
    }
}
