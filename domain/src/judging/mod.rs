//! Judge panel scoring and vote aggregation
//!
//! # Flow
//!
//! ```text
//! judge reply (free text)
//!     │  parse_evaluation()       best-effort, never fails
//!     ▼
//! ParsedEvaluation { scores: [Parsed | Default], comments }
//!     │  Evaluation::from_parsed()  weighted total, per-judge Verdict
//!     ▼
//! Evaluation × judges
//!     │  VotingOutcome::tally()   continue iff continue_votes ≥ judges / 2
//!     ▼
//! VotingOutcome { decision, continue_votes, replace_votes, evaluations }
//! ```

pub mod criteria;
pub mod evaluation;
pub mod parsing;
pub mod vote;

pub use criteria::{CriteriaSet, Criterion, MAX_SCORE, MIDPOINT_SCORE, MIN_SCORE};
pub use evaluation::{CONTINUE_THRESHOLD, CriterionScore, Evaluation, weighted_total};
pub use parsing::{ParsedEvaluation, parse_evaluation};
pub use vote::{Verdict, VotingOutcome};
