//! Run Debate use case
//!
//! Drives a debate from round 1 to round N.
//!
//! # Flow
//!
//! ```text
//! for round in 1..=N
//!   ├─ ResponseLimiter::reset
//!   ├─ TurnScheduler::run_round      (both speakers, memories updated)
//!   └─ round < N ?
//!        ├─ VotingAggregator::collect (judges in parallel, tallied in order)
//!        └─ Replace ? RotationController::rotate
//! ```
//!
//! The engine has no retries of its own. Responder failures degrade to
//! placeholder statements or neutral evaluations; only setup errors and
//! invalid vote requests surface as [`RunDebateError`].

mod rotation;
mod scheduler;
mod state;
mod voting;

pub use rotation::{RotationController, RotationOutcome};
pub use scheduler::TurnScheduler;
pub use state::DebateState;
pub use voting::{JudgeReport, VotingAggregator};

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger, events,
};
use crate::ports::progress::{DebateProgressNotifier, NoProgress};
use crate::ports::responder::Responder;
use arena_domain::{
    ContextCompactor, CriteriaSet, DebateResult, DebateSetup, DomainError, Participant,
    ResponseLimiter, Verdict,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can stop a debate
#[derive(Error, Debug)]
pub enum RunDebateError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] DomainError),

    #[error("Debate already finished; switch topic or participants to run again")]
    AlreadyFinished,
}

/// Use case for running a debate
pub struct DebateOrchestrator<R: Responder + ?Sized + 'static> {
    responder: Arc<R>,
    state: DebateState,
    limiter: ResponseLimiter,
    compactor: ContextCompactor,
    criteria: CriteriaSet,
    rotation: RotationController,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<R: Responder + ?Sized + 'static> DebateOrchestrator<R> {
    /// Validate the setup and prepare a debate that has not started yet
    pub fn new(responder: Arc<R>, setup: DebateSetup) -> Result<Self, RunDebateError> {
        let limiter = ResponseLimiter::new(setup.settings.time_limit_seconds);
        let rotation = RotationController::new(setup.settings.rotation_seed);
        let state = DebateState::new(setup)?;

        Ok(Self {
            responder,
            state,
            limiter,
            compactor: ContextCompactor::default(),
            criteria: CriteriaSet::default(),
            rotation,
            conversation_logger: Arc::new(NoConversationLogger),
        })
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn state(&self) -> &DebateState {
        &self.state
    }

    /// Run every round with default (no-op) progress
    pub async fn run(&mut self) -> Result<DebateResult, RunDebateError> {
        self.run_with_progress(&NoProgress).await
    }

    /// Run every round with progress callbacks
    pub async fn run_with_progress(
        &mut self,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<DebateResult, RunDebateError> {
        if self.state.is_finished() || !self.state.transcript.is_empty() {
            return Err(RunDebateError::AlreadyFinished);
        }

        let total = self.state.total_rounds();
        info!(
            "Starting debate on '{}': {} vs {} ({} rounds)",
            self.state.topic,
            self.state.advocate.name,
            self.state.pool.active().name,
            total
        );
        progress.on_debate_start(
            &self.state.topic,
            &self.state.advocate.name,
            &self.state.pool.active().name,
            &self.state.pool.judge_names(),
        );

        let scheduler = TurnScheduler::new(
            self.responder.as_ref(),
            &self.compactor,
            self.conversation_logger.as_ref(),
        );
        let aggregator = VotingAggregator::new(
            self.responder.as_ref(),
            &self.criteria,
            self.conversation_logger.as_ref(),
        );

        for round_number in 1..=total {
            progress.on_round_start(round_number, total);
            self.limiter.reset();

            let mut round = scheduler
                .run_round(&mut self.state, &mut self.limiter, round_number, progress)
                .await;

            if round_number < total {
                let outcome = aggregator.collect(&self.state, &round, progress).await?;
                let decision = outcome.decision;
                round.voting = Some(outcome);
                self.state.transcript.push(round);

                if decision == Verdict::Replace {
                    let rotation = self
                        .rotation
                        .rotate(&mut self.state.pool, &mut self.state.ledger)?;
                    self.conversation_logger.log(ConversationEvent::new(
                        events::ROTATION,
                        json!({ "round": round_number, "result": rotation }),
                    ));
                    progress.on_rotation(&rotation, &self.state.pool.judge_names());
                }
            } else {
                self.state.transcript.push(round);
            }
        }

        let result = self.state.to_result();
        info!(
            "Debate concluded: {} rounds, {} rotations",
            result.total_rounds, result.total_rotations
        );
        progress.on_debate_complete(&result);
        Ok(result)
    }

    /// Start over on a new topic with the same participants.
    ///
    /// Clears the transcript, rotation counter, ledger and memories. The
    /// current active debater stays active.
    pub fn switch_topic(&mut self, topic: impl Into<String>) -> Result<(), RunDebateError> {
        let topic = topic.into();
        info!("Switching topic to '{}'", topic);
        self.state.reset_for_topic(topic)?;
        Ok(())
    }

    /// Replace every participant, validated like a new debate.
    pub fn switch_participants(
        &mut self,
        advocate: Participant,
        challengers: Vec<Participant>,
    ) -> Result<(), RunDebateError> {
        info!(
            "Switching participants: {} vs {} challengers",
            advocate.name,
            challengers.len()
        );
        self.state.replace_participants(advocate, challengers)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::responder::ResponderError;
    use arena_domain::{
        DebateSettings, LimitedResponse, PLACEHOLDER_STATEMENT, PromptRequest, Role, SegmentKind,
        SpeakingOrder, VotingOutcome,
    };
    use async_trait::async_trait;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    const HIGH: &str = "Argument Strength: 5\nRelevance: 5\nPersuasiveness: 5\nClarity: 5\nComments: Excellent.";
    const LOW: &str = "Argument Strength: 1\nRelevance: 1\nPersuasiveness: 1\nClarity: 1\nComments: Weak.";

    /// Statements answer with the speaker's name; judges answer with a fixed
    /// verdict unless a per-name script says otherwise.
    struct ScriptedResponder {
        judge_reply: &'static str,
        scripts: Mutex<HashMap<String, VecDeque<Result<String, ResponderError>>>>,
        requests: Mutex<Vec<(String, PromptRequest)>>,
    }

    impl ScriptedResponder {
        fn judging(judge_reply: &'static str) -> Self {
            Self {
                judge_reply,
                scripts: Mutex::new(HashMap::new()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn script(self, name: &str, replies: Vec<Result<String, ResponderError>>) -> Self {
            self.scripts
                .lock()
                .unwrap()
                .insert(name.to_string(), VecDeque::from(replies));
            self
        }

        fn requests_for(&self, name: &str) -> Vec<PromptRequest> {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .filter(|(n, _)| n == name)
                .map(|(_, r)| r.clone())
                .collect()
        }

        fn evaluation_requests(&self) -> usize {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .filter(|(_, r)| r.len() == 1)
                .count()
        }
    }

    #[async_trait]
    impl Responder for ScriptedResponder {
        async fn respond(
            &self,
            participant: &Participant,
            request: &PromptRequest,
        ) -> Result<String, ResponderError> {
            self.requests
                .lock()
                .unwrap()
                .push((participant.name.clone(), request.clone()));

            if let Some(queue) = self.scripts.lock().unwrap().get_mut(&participant.name)
                && let Some(reply) = queue.pop_front()
            {
                return reply;
            }

            let is_evaluation =
                request.len() == 1 && request.segments[0].kind == SegmentKind::Instruction;
            if is_evaluation {
                Ok(self.judge_reply.to_string())
            } else {
                Ok(format!("{} argues in earnest", participant.name))
            }
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        statements: Mutex<Vec<String>>,
        failures: Mutex<usize>,
        degraded: Mutex<usize>,
        rotations: Mutex<Vec<RotationOutcome>>,
    }

    impl DebateProgressNotifier for RecordingProgress {
        fn on_round_start(&self, _round: u32, _total_rounds: u32) {}

        fn on_statement(&self, speaker: &Participant, _statement: &LimitedResponse) {
            self.statements.lock().unwrap().push(speaker.name.clone());
        }

        fn on_voting_complete(&self, _outcome: &VotingOutcome, _debater: &str) {}

        fn on_responder_failure(&self, _participant: &Participant, _error: &ResponderError) {
            *self.failures.lock().unwrap() += 1;
        }

        fn on_evaluation(&self, _evaluation: &arena_domain::Evaluation, degraded: bool) {
            if degraded {
                *self.degraded.lock().unwrap() += 1;
            }
        }

        fn on_rotation(&self, outcome: &RotationOutcome, _judges: &[&str]) {
            self.rotations.lock().unwrap().push(outcome.clone());
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    fn challengers(n: usize) -> Vec<Participant> {
        (1..=n)
            .map(|i| Participant::challenger(format!("C{i}"), "You challenge."))
            .collect()
    }

    fn setup(rounds: u32, rotation_limit: u32) -> DebateSetup {
        DebateSetup::new(
            "Universal healthcare",
            Participant::advocate("Advocate", "You advocate."),
            challengers(4),
        )
        .with_settings(
            DebateSettings::default()
                .with_rounds(rounds)
                .with_rotation_limit(rotation_limit)
                .with_rotation_seed(5),
        )
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_three_rounds_two_rotations() {
        let responder = Arc::new(ScriptedResponder::judging(LOW));
        let mut orchestrator = DebateOrchestrator::new(responder, setup(3, 3)).unwrap();

        let result = orchestrator.run().await.unwrap();

        assert_eq!(result.total_rounds, 3);
        assert_eq!(result.transcript.len(), 3);
        assert_eq!(result.total_rotations, 2);
        assert_eq!(result.challenger_names.len(), 3);
        assert!(result.challenger_names.contains(&"C1".to_string()));

        let debaters: Vec<_> = result.transcript.iter().map(|r| r.challenger_name.clone()).collect();
        assert_eq!(debaters[0], "C1");
        assert_ne!(debaters[1], debaters[0]);
        assert_ne!(debaters[2], debaters[1]);
    }

    #[tokio::test]
    async fn test_final_round_is_not_judged() {
        let responder = Arc::new(ScriptedResponder::judging(HIGH));
        let mut orchestrator = DebateOrchestrator::new(responder.clone(), setup(3, 3)).unwrap();

        let result = orchestrator.run().await.unwrap();

        assert!(result.transcript[0].voting.is_some());
        assert!(result.transcript[1].voting.is_some());
        assert!(result.transcript[2].voting.is_none());
        // Two judged rounds, three judges each
        assert_eq!(responder.evaluation_requests(), 6);
    }

    #[tokio::test]
    async fn test_continue_keeps_debater() {
        let responder = Arc::new(ScriptedResponder::judging(HIGH));
        let mut orchestrator = DebateOrchestrator::new(responder, setup(4, 3)).unwrap();

        let result = orchestrator.run().await.unwrap();

        assert_eq!(result.total_rotations, 0);
        assert_eq!(result.challenger_names, vec!["C1"]);
        assert!(result.transcript.iter().all(|r| r.challenger_name == "C1"));
        let voting = result.transcript[0].voting.as_ref().unwrap();
        assert_eq!(voting.continue_votes, 3);
        assert_eq!(voting.evaluations[0].judge_name, "C2");
    }

    #[tokio::test]
    async fn test_exhaustion_is_not_counted() {
        // Limit allows more rotations than there are fresh judges
        let responder = Arc::new(ScriptedResponder::judging(LOW));
        let progress = RecordingProgress::default();
        let mut orchestrator = DebateOrchestrator::new(responder, setup(6, 10)).unwrap();

        let result = orchestrator.run_with_progress(&progress).await.unwrap();

        assert_eq!(result.total_rotations, 3);
        assert_eq!(result.challenger_names, vec!["C1", "C2", "C3", "C4"]);
        let rotations = progress.rotations.lock().unwrap();
        assert_eq!(rotations.len(), 5);
        assert_eq!(rotations[3], RotationOutcome::NoEligibleReplacement);
        assert_eq!(result.transcript[4].challenger_name, result.transcript[5].challenger_name);
    }

    #[tokio::test]
    async fn test_rotation_limit_caps_rotations() {
        let responder = Arc::new(ScriptedResponder::judging(LOW));
        let progress = RecordingProgress::default();
        let mut orchestrator = DebateOrchestrator::new(responder, setup(5, 1)).unwrap();

        let result = orchestrator.run_with_progress(&progress).await.unwrap();

        assert_eq!(result.total_rotations, 1);
        assert_eq!(result.challenger_names.len(), 2);
        let rotations = progress.rotations.lock().unwrap();
        assert!(rotations[1..].iter().all(|r| *r == RotationOutcome::LimitReached));
    }

    #[tokio::test]
    async fn test_responder_failure_uses_placeholder() {
        let responder = Arc::new(
            ScriptedResponder::judging(HIGH)
                .script("Advocate", vec![Err(ResponderError::Timeout)]),
        );
        let progress = RecordingProgress::default();
        let logger = Arc::new(RecordingLogger::default());
        let mut orchestrator = DebateOrchestrator::new(responder, setup(2, 3))
            .unwrap()
            .with_conversation_logger(logger.clone());

        let result = orchestrator.run_with_progress(&progress).await.unwrap();

        assert_eq!(result.transcript[0].advocate_statement, PLACEHOLDER_STATEMENT);
        assert_eq!(result.transcript[1].advocate_statement, "Advocate argues in earnest");
        assert_eq!(*progress.failures.lock().unwrap(), 1);
        assert!(logger.events.lock().unwrap().contains(&"statement_failed"));
    }

    #[tokio::test]
    async fn test_judge_failure_is_neutral_continue() {
        // C2 fails; C3 and C4 vote replace. 1 of 3 continue → replace.
        let responder = Arc::new(
            ScriptedResponder::judging(LOW).script("C2", vec![Err(ResponderError::Timeout)]),
        );
        let progress = RecordingProgress::default();
        let mut orchestrator = DebateOrchestrator::new(responder, setup(2, 3)).unwrap();

        let result = orchestrator.run_with_progress(&progress).await.unwrap();

        let voting = result.transcript[0].voting.as_ref().unwrap();
        assert_eq!(voting.evaluations[0].judge_name, "C2");
        assert_eq!(voting.evaluations[0].total_score, 3.0);
        assert_eq!(voting.evaluations[0].vote, Verdict::Continue);
        assert_eq!(voting.continue_votes, 1);
        assert_eq!(voting.decision, Verdict::Replace);
        assert_eq!(*progress.degraded.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_truncation_applied_to_statements() {
        let long = (0..900).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        let responder =
            Arc::new(ScriptedResponder::judging(HIGH).script("C1", vec![Ok(long)]));
        let mut orchestrator = DebateOrchestrator::new(responder, setup(1, 3)).unwrap();

        let result = orchestrator.run().await.unwrap();

        let statement = &result.transcript[0].challenger_statement;
        assert!(statement.ends_with("\n[Time limit reached]"));
        assert_eq!(statement.split_whitespace().count(), 800 + 3);
    }

    #[tokio::test]
    async fn test_challenger_sees_advocate_statement() {
        let responder = Arc::new(ScriptedResponder::judging(HIGH));
        let mut orchestrator = DebateOrchestrator::new(responder.clone(), setup(2, 3)).unwrap();
        orchestrator.run().await.unwrap();

        let requests = responder.requests_for("C1");
        let turn = requests.iter().find(|r| r.len() > 1).unwrap();
        let instruction = turn.last_instruction().unwrap();
        assert!(instruction.contains("\n\nAdvocate's statement: Advocate argues in earnest"));
        assert_eq!(turn.max_units, Some(800));
    }

    #[tokio::test]
    async fn test_challenger_first_order() {
        let responder = Arc::new(ScriptedResponder::judging(HIGH));
        let setup = setup(1, 3).with_settings(
            DebateSettings::default()
                .with_rounds(1)
                .with_speaking_order(SpeakingOrder::starting_with(Role::Challenger)),
        );
        let progress = RecordingProgress::default();
        let mut orchestrator = DebateOrchestrator::new(responder.clone(), setup).unwrap();
        orchestrator.run_with_progress(&progress).await.unwrap();

        assert_eq!(*progress.statements.lock().unwrap(), vec!["C1", "Advocate"]);
        let advocate_turn = &responder.requests_for("Advocate")[0];
        assert!(advocate_turn
            .last_instruction()
            .unwrap()
            .contains("Challenger's statement: C1 argues in earnest"));
    }

    #[tokio::test]
    async fn test_memory_reaches_later_prompts() {
        let responder = Arc::new(ScriptedResponder::judging(HIGH));
        let mut orchestrator = DebateOrchestrator::new(responder.clone(), setup(2, 3)).unwrap();
        orchestrator.run().await.unwrap();

        let advocate_turns = responder.requests_for("Advocate");
        let has_memory = |r: &PromptRequest| {
            r.segments
                .iter()
                .any(|s| s.content.starts_with("Previous debate context: Debate History Summary:"))
        };
        assert!(!has_memory(&advocate_turns[0]));
        assert!(has_memory(&advocate_turns[1]));

        // Judges witnessed round 1 too
        let judge_memory = orchestrator.state().memory("C3").unwrap();
        assert_eq!(judge_memory.rounds_recorded(), 2);
    }

    #[tokio::test]
    async fn test_pool_invariant_holds_after_run() {
        let responder = Arc::new(ScriptedResponder::judging(LOW));
        let mut orchestrator = DebateOrchestrator::new(responder, setup(4, 3)).unwrap();
        orchestrator.run().await.unwrap();

        let pool = orchestrator.state().pool();
        let mut names: Vec<&str> = pool.judge_names();
        names.push(&pool.active().name);
        names.sort_unstable();
        assert_eq!(names, vec!["C1", "C2", "C3", "C4"]);
        assert_eq!(pool.judge_count(), 3);
    }

    #[tokio::test]
    async fn test_run_twice_requires_reset() {
        let responder = Arc::new(ScriptedResponder::judging(LOW));
        let mut orchestrator = DebateOrchestrator::new(responder, setup(2, 3)).unwrap();
        orchestrator.run().await.unwrap();

        assert!(matches!(
            orchestrator.run().await,
            Err(RunDebateError::AlreadyFinished)
        ));

        let active = orchestrator.state().pool().active().name.clone();
        orchestrator.switch_topic("Free will").unwrap();
        assert_eq!(orchestrator.state().topic(), "Free will");
        assert_eq!(orchestrator.state().ledger().rotation_count(), 0);
        assert_eq!(orchestrator.state().ledger().ever_active_names(), vec![active]);
        assert!(orchestrator.state().memory("C2").unwrap().is_empty());

        let result = orchestrator.run().await.unwrap();
        assert_eq!(result.topic, "Free will");
        assert_eq!(result.transcript.len(), 2);
    }

    #[tokio::test]
    async fn test_switch_participants_validates() {
        let responder = Arc::new(ScriptedResponder::judging(HIGH));
        let mut orchestrator = DebateOrchestrator::new(responder, setup(1, 3)).unwrap();

        let err = orchestrator
            .switch_participants(Participant::advocate("New", "persona"), challengers(3))
            .unwrap_err();
        assert!(matches!(
            err,
            RunDebateError::Configuration(DomainError::TooFewChallengers { .. })
        ));

        let fresh: Vec<_> = (1..=5)
            .map(|i| Participant::challenger(format!("N{i}"), "persona"))
            .collect();
        orchestrator
            .switch_participants(Participant::advocate("New", "persona"), fresh)
            .unwrap();
        assert_eq!(orchestrator.state().advocate().name, "New");
        assert_eq!(orchestrator.state().pool().active().name, "N1");
        assert_eq!(orchestrator.state().pool().judge_count(), 4);
    }

    #[tokio::test]
    async fn test_evaluate_rejects_non_judge() {
        let responder = ScriptedResponder::judging(HIGH);
        let state = DebateState::new(setup(2, 3)).unwrap();
        let criteria = CriteriaSet::default();
        let aggregator = VotingAggregator::new(&responder, &criteria, &NoConversationLogger);
        let round = arena_domain::Round::new(1, "Advocate", "C1");

        let active = state.pool().active().clone();
        let err = aggregator.evaluate(&state, &active, &round).await.unwrap_err();
        assert_eq!(err, DomainError::NotAJudge("C1".to_string()));
    }

    #[test]
    fn test_invalid_setup_rejected() {
        let responder = Arc::new(ScriptedResponder::judging(HIGH));
        let bad = setup(0, 3);
        assert!(matches!(
            DebateOrchestrator::new(responder, bad),
            Err(RunDebateError::Configuration(DomainError::InvalidRoundCount))
        ));
    }
}
