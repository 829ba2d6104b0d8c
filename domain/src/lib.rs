//! Domain layer for debate-arena
//!
//! This crate contains the rules of the debate: who may speak, who may judge,
//! how a judge's reply becomes a score, and how much history each participant
//! carries into its next prompt. It has no I/O and no async code.
//!
//! # Core Concepts
//!
//! ## Advocate and Challengers
//!
//! - **Advocate**: the single participant defending the initial position
//! - **Challenger pool**: at least four participants partitioned into one
//!   active debater and the judges
//!
//! ## Judging and Rotation
//!
//! - Judges score the active Challenger each round (except the last)
//! - A `Replace` majority swaps in a Challenger who has never debated,
//!   bounded by the rotation limit recorded in the [`RotationLedger`]

pub mod budget;
pub mod config;
pub mod core;
pub mod debate;
pub mod judging;
pub mod memory;
pub mod participant;
pub mod prompt;

// Re-export commonly used types
pub use budget::{LimitedResponse, ResponseLimiter};
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::error::DomainError;
pub use debate::{
    DebateResult, DebateSettings, DebateSetup, Pool, ResponseStyle, RotationLedger, Round,
    record::{CriteriaScores, DebateRecord, EvaluationRecord, RoundRecord, VotingRecord},
};
pub use judging::{
    CriteriaSet, Criterion, CriterionScore, Evaluation, ParsedEvaluation, Verdict, VotingOutcome,
    parse_evaluation,
};
pub use memory::{ContextCompactor, MemorySummary, RoundMemory};
pub use participant::{Participant, Role, SpeakingOrder};
pub use prompt::{
    DebatePromptTemplate, PLACEHOLDER_STATEMENT, PromptRequest, PromptSegment, SegmentKind,
    TurnPosition,
};
