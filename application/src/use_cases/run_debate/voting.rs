//! Judge panel evaluation and tally

use super::state::DebateState;
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger, events};
use crate::ports::progress::DebateProgressNotifier;
use crate::ports::responder::{Responder, ResponderError};
use arena_domain::{
    CriteriaSet, DebatePromptTemplate, DomainError, Evaluation, Participant, PromptRequest, Round,
    VotingOutcome, parse_evaluation,
};
use futures::future::join_all;
use serde_json::json;
use tracing::{debug, info, warn};

/// One judge's evaluation, with the failure that forced a neutral one.
#[derive(Debug, Clone)]
pub struct JudgeReport {
    pub evaluation: Evaluation,
    pub failure: Option<ResponderError>,
}

impl JudgeReport {
    pub fn is_degraded(&self) -> bool {
        self.failure.is_some()
    }
}

/// Collects one evaluation per current judge and tallies them.
pub struct VotingAggregator<'a, R: Responder + ?Sized> {
    responder: &'a R,
    criteria: &'a CriteriaSet,
    logger: &'a dyn ConversationLogger,
}

impl<'a, R: Responder + ?Sized> VotingAggregator<'a, R> {
    pub fn new(
        responder: &'a R,
        criteria: &'a CriteriaSet,
        logger: &'a dyn ConversationLogger,
    ) -> Self {
        Self {
            responder,
            criteria,
            logger,
        }
    }

    /// Ask one judge to score `round`.
    ///
    /// Fails only when `judge` is not currently on the panel. A responder
    /// failure yields [`Evaluation::neutral`].
    pub async fn evaluate(
        &self,
        state: &DebateState,
        judge: &Participant,
        round: &Round,
    ) -> Result<JudgeReport, DomainError> {
        if !state.pool().is_judge(&judge.name) {
            return Err(DomainError::NotAJudge(judge.name.clone()));
        }

        let prompt = DebatePromptTemplate::evaluation_prompt(state.topic(), round, self.criteria);
        let request = PromptRequest::instruction(prompt);

        match self.responder.respond(judge, &request).await {
            Ok(reply) => {
                let parsed = parse_evaluation(&reply, self.criteria);
                if parsed.parsed_count() < self.criteria.len() {
                    debug!(
                        "Judge {} reply had {} of {} scores",
                        judge.name,
                        parsed.parsed_count(),
                        self.criteria.len()
                    );
                }
                Ok(JudgeReport {
                    evaluation: Evaluation::from_parsed(
                        judge.name.clone(),
                        round.number,
                        parsed,
                        self.criteria,
                    ),
                    failure: None,
                })
            }
            Err(e) => {
                warn!("Judge {} failed to evaluate round {}: {}", judge.name, round.number, e);
                Ok(JudgeReport {
                    evaluation: Evaluation::neutral(judge.name.clone(), round.number, self.criteria),
                    failure: Some(e),
                })
            }
        }
    }

    /// Evaluate `round` with every current judge concurrently.
    ///
    /// Results are reported and tallied in judge-list order.
    pub async fn collect(
        &self,
        state: &DebateState,
        round: &Round,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<VotingOutcome, DomainError> {
        let judges: Vec<&Participant> = state.pool().judges().collect();
        info!("Round {}: collecting {} evaluations", round.number, judges.len());
        progress.on_voting_start(round.number, judges.len());

        let futures = judges.iter().map(|judge| self.evaluate(state, judge, round));
        let results = join_all(futures).await;

        let mut evaluations = Vec::with_capacity(results.len());
        for result in results {
            let report = result?;
            self.log_report(&report);
            progress.on_evaluation(&report.evaluation, report.is_degraded());
            evaluations.push(report.evaluation);
        }

        let outcome = VotingOutcome::tally(evaluations);
        let debater = state.pool().active().name.as_str();
        info!(
            "Round {}: {} for {} ({} continue / {} replace)",
            round.number, outcome.decision, debater, outcome.continue_votes, outcome.replace_votes
        );
        self.logger.log(ConversationEvent::new(
            events::VOTING,
            json!({
                "round": round.number,
                "debater": debater,
                "decision": outcome.decision.as_str(),
                "continue_votes": outcome.continue_votes,
                "replace_votes": outcome.replace_votes,
            }),
        ));
        progress.on_voting_complete(&outcome, debater);
        Ok(outcome)
    }

    fn log_report(&self, report: &JudgeReport) {
        let evaluation = &report.evaluation;
        match &report.failure {
            None => self.logger.log(ConversationEvent::new(
                events::EVALUATION,
                json!({
                    "round": evaluation.round_number,
                    "judge": evaluation.judge_name,
                    "total_score": evaluation.total_score,
                    "vote": evaluation.vote.as_str(),
                    "comments": evaluation.comments,
                    "defaulted": evaluation.defaulted_count(),
                }),
            )),
            Some(error) => self.logger.log(ConversationEvent::new(
                events::EVALUATION_FAILED,
                json!({
                    "round": evaluation.round_number,
                    "judge": evaluation.judge_name,
                    "error": error.to_string(),
                }),
            )),
        }
    }
}
