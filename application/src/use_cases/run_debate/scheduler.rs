//! One round of speaking turns

use super::state::DebateState;
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::progress::DebateProgressNotifier;
use crate::ports::responder::Responder;
use arena_domain::{
    ContextCompactor, DebatePromptTemplate, LimitedResponse, PLACEHOLDER_STATEMENT, Participant,
    ResponseLimiter, Role, Round, TurnPosition,
};
use tracing::{debug, warn};

/// Runs both turns of a round in the configured speaking order.
pub struct TurnScheduler<'a, R: Responder + ?Sized> {
    responder: &'a R,
    compactor: &'a ContextCompactor,
    logger: &'a dyn ConversationLogger,
}

impl<'a, R: Responder + ?Sized> TurnScheduler<'a, R> {
    pub fn new(
        responder: &'a R,
        compactor: &'a ContextCompactor,
        logger: &'a dyn ConversationLogger,
    ) -> Self {
        Self {
            responder,
            compactor,
            logger,
        }
    }

    /// Produce round `round_number` and record it in every memory.
    ///
    /// The second speaker's instruction carries the first speaker's limited
    /// statement. Responder failures become the placeholder statement.
    pub async fn run_round(
        &self,
        state: &mut DebateState,
        limiter: &mut ResponseLimiter,
        round_number: u32,
        progress: &dyn DebateProgressNotifier,
    ) -> Round {
        let advocate = state.advocate().clone();
        let challenger = state.pool().active().clone();
        let mut round = Round::new(round_number, &advocate.name, &challenger.name);

        let order = state.settings().speaking_order;
        let mut first_statement: Option<(Role, String)> = None;

        for (index, role) in order.sides().into_iter().enumerate() {
            let speaker = match role {
                Role::Advocate => &advocate,
                Role::Challenger => &challenger,
            };
            let position = if index == 0 {
                TurnPosition::First
            } else {
                TurnPosition::Second
            };

            let mut instruction =
                DebatePromptTemplate::round_instruction(round_number, state.topic(), position);
            if let Some((opponent, statement)) = &first_statement {
                instruction =
                    DebatePromptTemplate::with_opponent_statement(&instruction, *opponent, statement);
            }

            let limited = self
                .take_turn(state, limiter, speaker, round_number, instruction, progress)
                .await;

            match role {
                Role::Advocate => round.advocate_statement = limited.text.clone(),
                Role::Challenger => round.challenger_statement = limited.text.clone(),
            }
            if first_statement.is_none() {
                first_statement = Some((role, limited.text));
            }
        }

        state.record_in_memories(&round);
        round
    }

    async fn take_turn(
        &self,
        state: &DebateState,
        limiter: &mut ResponseLimiter,
        speaker: &Participant,
        round_number: u32,
        instruction: String,
        progress: &dyn DebateProgressNotifier,
    ) -> LimitedResponse {
        let style = state.settings().response_style;
        let memory_block = state
            .memory(&speaker.name)
            .map(|m| self.compactor.summarize(m))
            .unwrap_or_default();
        let request = DebatePromptTemplate::turn_request(
            speaker,
            state.topic(),
            style,
            &memory_block,
            state.transcript(),
            instruction,
        );

        progress.on_turn_start(speaker);
        debug!(
            "Round {}: asking {} ({} segments)",
            round_number,
            speaker.name,
            request.len()
        );

        let text = match self.responder.respond(speaker, &request).await {
            Ok(text) => text,
            Err(e) => {
                warn!("{} failed to respond in round {}: {}", speaker.name, round_number, e);
                progress.on_responder_failure(speaker, &e);
                self.logger.log(ConversationEvent::statement_failed(
                    round_number,
                    &speaker.name,
                    &e.to_string(),
                ));
                PLACEHOLDER_STATEMENT.to_string()
            }
        };

        let limited = limiter.limit(&text, style.max_units());
        if limited.was_truncated {
            debug!("{} truncated to {} units", speaker.name, style.max_units());
        }

        self.logger.log(ConversationEvent::statement(
            round_number,
            &speaker.name,
            &limited.text,
            limited.was_truncated,
        ));
        progress.on_statement(speaker, &limited);
        limited
    }
}
