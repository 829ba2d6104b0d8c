//! Progress notification port
//!
//! Defines the interface for reporting progress while a debate runs.

use crate::ports::responder::ResponderError;
use crate::use_cases::run_debate::RotationOutcome;
use arena_domain::{DebateResult, Evaluation, LimitedResponse, Participant, VotingOutcome};

/// Callback for progress updates during a debate
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, web UI, etc.)
pub trait DebateProgressNotifier: Send + Sync {
    /// Called when a round starts
    fn on_round_start(&self, round: u32, total_rounds: u32);

    /// Called after a speaker's statement has been limited
    fn on_statement(&self, speaker: &Participant, statement: &LimitedResponse);

    /// Called when the panel's votes have been tallied
    fn on_voting_complete(&self, outcome: &VotingOutcome, debater: &str);

    // ==================== Optional Callbacks ====================

    /// Called once before round 1
    fn on_debate_start(&self, _topic: &str, _advocate: &str, _challenger: &str, _judges: &[&str]) {
    }

    /// Called before a speaker is asked for a statement
    fn on_turn_start(&self, _speaker: &Participant) {}

    /// Called when the responder failed and a fallback was used
    fn on_responder_failure(&self, _participant: &Participant, _error: &ResponderError) {}

    /// Called before judges are consulted
    fn on_voting_start(&self, _round: u32, _judge_count: usize) {}

    /// Called for each judge, in judge-list order
    fn on_evaluation(&self, _evaluation: &Evaluation, _degraded: bool) {}

    /// Called after a `Replace` decision has been acted on
    fn on_rotation(&self, _outcome: &RotationOutcome, _judges: &[&str]) {}

    /// Called once after the final round
    fn on_debate_complete(&self, _result: &DebateResult) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl DebateProgressNotifier for NoProgress {
    fn on_round_start(&self, _round: u32, _total_rounds: u32) {}
    fn on_statement(&self, _speaker: &Participant, _statement: &LimitedResponse) {}
    fn on_voting_complete(&self, _outcome: &VotingOutcome, _debater: &str) {}
}
