//! Per-judge evaluation of the active Challenger

use super::criteria::{CriteriaSet, MIDPOINT_SCORE};
use super::parsing::ParsedEvaluation;
use super::vote::Verdict;
use serde::{Deserialize, Serialize};

/// A judge votes `Continue` iff the weighted total reaches this score
pub const CONTINUE_THRESHOLD: f64 = 4.0;

/// Commentary attached to an evaluation the judge could not produce
pub const UNAVAILABLE_COMMENTS: &str =
    "Unable to complete evaluation due to technical difficulties.";

/// Score for a single criterion, tagged with where it came from.
///
/// `Default` lets callers tell a genuine 3 from a reply that could not be
/// read for that criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum CriterionScore {
    /// Read from the judge's reply and within range
    Parsed { criterion: String, score: u8 },
    /// Missing, unreadable, or out of range in the reply
    Default { criterion: String },
}

impl CriterionScore {
    pub fn criterion(&self) -> &str {
        match self {
            CriterionScore::Parsed { criterion, .. } | CriterionScore::Default { criterion } => {
                criterion
            }
        }
    }

    /// Effective score; defaulted criteria count as the midpoint
    pub fn score(&self) -> u8 {
        match self {
            CriterionScore::Parsed { score, .. } => *score,
            CriterionScore::Default { .. } => MIDPOINT_SCORE,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, CriterionScore::Default { .. })
    }
}

/// Weighted mean of the scores, rounded to two decimal places.
///
/// Falls back to the unweighted mean when the weights sum to zero.
///
/// # Example
///
/// ```
/// use arena_domain::{CriteriaSet, CriterionScore};
/// use arena_domain::judging::weighted_total;
///
/// let scores: Vec<_> = [("argument_strength", 5), ("relevance", 3), ("persuasiveness", 1), ("clarity", 5)]
///     .into_iter()
///     .map(|(c, s)| CriterionScore::Parsed { criterion: c.to_string(), score: s })
///     .collect();
/// assert_eq!(weighted_total(&scores, &CriteriaSet::default()), 3.4);
/// ```
pub fn weighted_total(scores: &[CriterionScore], criteria: &CriteriaSet) -> f64 {
    if scores.is_empty() {
        return MIDPOINT_SCORE as f64;
    }

    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    for entry in scores {
        let weight = criteria
            .get(entry.criterion())
            .map(|c| c.weight)
            .unwrap_or(0.0);
        weighted_sum += entry.score() as f64 * weight;
        total_weight += weight;
    }

    let total = if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        scores.iter().map(|s| s.score() as f64).sum::<f64>() / scores.len() as f64
    };

    round2(total)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One judge's scoring of one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub judge_name: String,
    pub round_number: u32,
    /// One entry per criterion, in criteria-set order
    pub scores: Vec<CriterionScore>,
    pub total_score: f64,
    pub comments: String,
    pub vote: Verdict,
}

impl Evaluation {
    /// Build an evaluation from a parsed reply, deriving total and vote
    pub fn from_parsed(
        judge_name: impl Into<String>,
        round_number: u32,
        parsed: ParsedEvaluation,
        criteria: &CriteriaSet,
    ) -> Self {
        let total_score = weighted_total(&parsed.scores, criteria);
        Self {
            judge_name: judge_name.into(),
            round_number,
            scores: parsed.scores,
            total_score,
            comments: parsed.comments,
            vote: Verdict::from_score(total_score),
        }
    }

    /// Stand-in used when the judge could not be consulted at all.
    ///
    /// Every criterion sits at the midpoint and the vote is `Continue`, so a
    /// failing judge never pushes the incumbent out.
    pub fn neutral(judge_name: impl Into<String>, round_number: u32, criteria: &CriteriaSet) -> Self {
        Self {
            judge_name: judge_name.into(),
            round_number,
            scores: criteria
                .iter()
                .map(|c| CriterionScore::Default {
                    criterion: c.key.clone(),
                })
                .collect(),
            total_score: MIDPOINT_SCORE as f64,
            comments: UNAVAILABLE_COMMENTS.to_string(),
            vote: Verdict::Continue,
        }
    }

    /// Number of criteria that fell back to the midpoint
    pub fn defaulted_count(&self) -> usize {
        self.scores.iter().filter(|s| s.is_default()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judging::criteria::Criterion;

    fn parsed(criterion: &str, score: u8) -> CriterionScore {
        CriterionScore::Parsed {
            criterion: criterion.to_string(),
            score,
        }
    }

    #[test]
    fn test_weighted_total_example() {
        let scores = vec![
            parsed("argument_strength", 5),
            parsed("relevance", 3),
            parsed("persuasiveness", 1),
            parsed("clarity", 5),
        ];
        assert_eq!(weighted_total(&scores, &CriteriaSet::default()), 3.4);
    }

    #[test]
    fn test_weighted_total_rounds_to_two_places() {
        let criteria = CriteriaSet::new(vec![
            Criterion::new("a", 1.0),
            Criterion::new("b", 1.0),
            Criterion::new("c", 1.0),
        ]);
        let scores = vec![parsed("a", 4), parsed("b", 4), parsed("c", 5)];
        assert_eq!(weighted_total(&scores, &criteria), 4.33);
    }

    #[test]
    fn test_zero_weights_fall_back_to_mean() {
        let criteria = CriteriaSet::new(vec![Criterion::new("a", 0.0), Criterion::new("b", 0.0)]);
        let scores = vec![parsed("a", 5), parsed("b", 2)];
        assert_eq!(weighted_total(&scores, &criteria), 3.5);
    }

    #[test]
    fn test_default_scores_count_as_midpoint() {
        let scores = vec![
            CriterionScore::Default {
                criterion: "argument_strength".to_string(),
            },
            parsed("relevance", 3),
            parsed("persuasiveness", 3),
            parsed("clarity", 3),
        ];
        assert_eq!(weighted_total(&scores, &CriteriaSet::default()), 3.0);
    }

    #[test]
    fn test_vote_threshold() {
        let criteria = CriteriaSet::default();
        let exactly_four = ParsedEvaluation {
            scores: criteria.iter().map(|c| parsed(&c.key, 4)).collect(),
            comments: String::new(),
        };
        let eval = Evaluation::from_parsed("judge", 1, exactly_four, &criteria);
        assert_eq!(eval.total_score, 4.0);
        assert_eq!(eval.vote, Verdict::Continue);

        let low = ParsedEvaluation {
            scores: criteria.iter().map(|c| parsed(&c.key, 3)).collect(),
            comments: String::new(),
        };
        let eval = Evaluation::from_parsed("judge", 1, low, &criteria);
        assert_eq!(eval.vote, Verdict::Replace);
    }

    #[test]
    fn test_neutral_evaluation() {
        let eval = Evaluation::neutral("judge", 2, &CriteriaSet::default());
        assert_eq!(eval.total_score, 3.0);
        assert_eq!(eval.vote, Verdict::Continue);
        assert_eq!(eval.defaulted_count(), 4);
        assert!(eval.scores.iter().all(|s| s.score() == 3));
        assert_eq!(eval.comments, UNAVAILABLE_COMMENTS);
    }
}
