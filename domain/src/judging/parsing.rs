//! Judge reply parsing.
//!
//! Judges are asked to answer in a fixed line format:
//!
//! ```text
//! Argument Strength: 4
//! Relevance: 3
//! Persuasiveness: 5
//! Clarity: 4
//!
//! Comments: Solid rebuttal, thin evidence.
//! ```
//!
//! Parsing is best-effort and never fails. A criterion that is missing,
//! unreadable, or outside `MIN_SCORE..=MAX_SCORE` becomes
//! [`CriterionScore::Default`].

use super::criteria::{CriteriaSet, MAX_SCORE, MIN_SCORE};
use super::evaluation::CriterionScore;

/// Scores and commentary read from a judge's reply.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedEvaluation {
    /// One entry per criterion, in criteria-set order
    pub scores: Vec<CriterionScore>,
    pub comments: String,
}

impl ParsedEvaluation {
    pub fn parsed_count(&self) -> usize {
        self.scores.iter().filter(|s| !s.is_default()).count()
    }
}

/// Parse a free-text judge reply against the criteria set.
///
/// Lines are trimmed and matched case-insensitively against each
/// criterion's label. The value is the first integer after the first `:`
/// (or after the label when there is no colon). When several lines match
/// the same criterion, the last one wins. A line starting with `comments`
/// supplies the commentary, with its original casing kept.
///
/// # Examples
///
/// ```
/// use arena_domain::{CriteriaSet, parse_evaluation};
///
/// let reply = "Argument Strength: 4\nRelevance: 9\nComments: Fair.";
/// let parsed = parse_evaluation(reply, &CriteriaSet::default());
/// assert_eq!(parsed.scores[0].score(), 4);
/// assert!(parsed.scores[1].is_default()); // out of range
/// assert!(parsed.scores[2].is_default()); // missing
/// assert_eq!(parsed.comments, "Fair.");
/// ```
pub fn parse_evaluation(reply: &str, criteria: &CriteriaSet) -> ParsedEvaluation {
    let labels: Vec<String> = criteria.iter().map(|c| c.label()).collect();
    let mut found: Vec<Option<CriterionScore>> = vec![None; labels.len()];
    let mut comments = String::new();

    for raw in reply.lines() {
        let line = raw.trim();
        let lowered = line.to_lowercase();

        for (idx, (criterion, label)) in criteria.iter().zip(&labels).enumerate() {
            if !lowered.starts_with(label.as_str()) {
                continue;
            }
            let value = match lowered.split_once(':') {
                Some((_, rest)) => rest,
                None => &lowered[label.len()..],
            };
            found[idx] = Some(match first_integer(value) {
                Some(score) if (MIN_SCORE as u32..=MAX_SCORE as u32).contains(&score) => {
                    CriterionScore::Parsed {
                        criterion: criterion.key.clone(),
                        score: score as u8,
                    }
                }
                _ => CriterionScore::Default {
                    criterion: criterion.key.clone(),
                },
            });
        }

        if lowered.starts_with("comments")
            && let Some((_, rest)) = line.split_once(':')
        {
            comments = rest.trim().to_string();
        }
    }

    let scores = criteria
        .iter()
        .zip(found)
        .map(|(criterion, score)| {
            score.unwrap_or_else(|| CriterionScore::Default {
                criterion: criterion.key.clone(),
            })
        })
        .collect();

    ParsedEvaluation { scores, comments }
}

/// First run of ASCII digits in `text`, saturating on overflow.
fn first_integer(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    Some(digits.parse().unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(parsed: &ParsedEvaluation) -> Vec<u8> {
        parsed.scores.iter().map(CriterionScore::score).collect()
    }

    #[test]
    fn test_parse_well_formed_reply() {
        let reply = "Argument Strength: 5\nRelevance: 3\nPersuasiveness: 1\nClarity: 5\n\nComments: Strong opening, weak close.";
        let parsed = parse_evaluation(reply, &CriteriaSet::default());
        assert_eq!(scores(&parsed), vec![5, 3, 1, 5]);
        assert_eq!(parsed.parsed_count(), 4);
        assert_eq!(parsed.comments, "Strong opening, weak close.");
    }

    #[test]
    fn test_parse_tolerates_decoration() {
        let reply = "  ARGUMENT STRENGTH: [4/5]\nrelevance : score 2\n**Clarity**: 5";
        let parsed = parse_evaluation(reply, &CriteriaSet::default());
        assert_eq!(parsed.scores[0].score(), 4);
        assert_eq!(parsed.scores[1].score(), 2);
        // Leading markdown hides the label
        assert!(parsed.scores[3].is_default());
    }

    #[test]
    fn test_parse_without_colon() {
        let parsed = parse_evaluation("Persuasiveness 4", &CriteriaSet::default());
        assert_eq!(parsed.scores[2].score(), 4);
        assert!(!parsed.scores[2].is_default());
    }

    #[test]
    fn test_out_of_range_and_garbage_default() {
        let reply = "Argument Strength: 0\nRelevance: 12\nPersuasiveness: high\nClarity: 99999999999999";
        let parsed = parse_evaluation(reply, &CriteriaSet::default());
        assert!(parsed.scores.iter().all(CriterionScore::is_default));
        assert_eq!(scores(&parsed), vec![3, 3, 3, 3]);
    }

    #[test]
    fn test_empty_reply() {
        let parsed = parse_evaluation("", &CriteriaSet::default());
        assert_eq!(parsed.scores.len(), 4);
        assert_eq!(parsed.parsed_count(), 0);
        assert!(parsed.comments.is_empty());
    }

    #[test]
    fn test_last_matching_line_wins() {
        let reply = "Clarity: 2\nClarity: 4";
        let parsed = parse_evaluation(reply, &CriteriaSet::default());
        assert_eq!(parsed.scores[3].score(), 4);
    }

    #[test]
    fn test_comments_keep_case_and_colons() {
        let parsed = parse_evaluation(
            "Comments: See Point A: it fails.",
            &CriteriaSet::default(),
        );
        assert_eq!(parsed.comments, "See Point A: it fails.");
    }
}
