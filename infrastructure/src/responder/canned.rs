//! Offline responder for dry runs
//!
//! Produces deterministic statements and judge replies without a model, so
//! a whole debate (rotations included) can be exercised end to end.

use arena_application::ports::responder::{Responder, ResponderError};
use arena_domain::{CriteriaSet, Participant, PromptRequest, SegmentKind};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Deterministic stand-in for a real model.
///
/// Evaluation prompts (a single instruction segment) get a well-formed score
/// sheet. Scores come from a stable hash of the judge and the prompt, or a
/// fixed value set with [`with_fixed_score`](Self::with_fixed_score).
pub struct CannedResponder {
    criteria: CriteriaSet,
    fixed_score: Option<u8>,
    turns: Mutex<HashMap<String, u32>>,
}

impl CannedResponder {
    pub fn new(criteria: CriteriaSet) -> Self {
        Self {
            criteria,
            fixed_score: None,
            turns: Mutex::new(HashMap::new()),
        }
    }

    /// Every criterion receives `score` (clamped to 1-5)
    pub fn with_fixed_score(mut self, score: u8) -> Self {
        self.fixed_score = Some(score.clamp(1, 5));
        self
    }

    fn is_evaluation(request: &PromptRequest) -> bool {
        request.len() == 1 && request.segments[0].kind == SegmentKind::Instruction
    }

    fn next_turn(&self, name: &str) -> u32 {
        let Ok(mut turns) = self.turns.lock() else {
            return 1;
        };
        let turn = turns.entry(name.to_string()).or_insert(0);
        *turn += 1;
        *turn
    }

    fn statement(&self, participant: &Participant) -> String {
        let turn = self.next_turn(&participant.name);
        format!(
            "{} speaks for the {} side (turn {}). The strongest case rests on evidence \
             and consistent reasoning. Each objection raised so far leaves the core \
             argument standing, and the burden now sits with the other side.",
            participant.name,
            participant.role.stance(),
            turn
        )
    }

    fn score_sheet(&self, judge: &Participant, prompt: &str) -> String {
        let seed = fnv1a(judge.name.as_bytes()) ^ fnv1a(prompt.as_bytes());
        let mut sheet = String::new();
        for (i, criterion) in self.criteria.iter().enumerate() {
            let score = self
                .fixed_score
                .unwrap_or_else(|| 2 + ((seed >> (i * 8)) % 4) as u8);
            sheet.push_str(&format!("{}: {}\n", criterion.title(), score));
        }
        sheet.push_str(&format!(
            "Comments: {} found the exchange coherent and scored it on the stated criteria.",
            judge.name
        ));
        sheet
    }
}

impl Default for CannedResponder {
    fn default() -> Self {
        Self::new(CriteriaSet::default())
    }
}

/// 64-bit FNV-1a; stable across builds
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0xcbf2_9ce4_8422_2325, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
    })
}

#[async_trait]
impl Responder for CannedResponder {
    async fn respond(
        &self,
        participant: &Participant,
        request: &PromptRequest,
    ) -> Result<String, ResponderError> {
        if Self::is_evaluation(request) {
            Ok(self.score_sheet(participant, &request.segments[0].content))
        } else {
            Ok(self.statement(participant))
        }
    }

    fn name(&self) -> &str {
        "canned"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_domain::{PromptSegment, parse_evaluation};

    #[tokio::test]
    async fn test_score_sheet_parses_fully() {
        let responder = CannedResponder::default();
        let judge = Participant::challenger("Theist Expert 2", "persona");

        let reply = responder
            .respond(&judge, &PromptRequest::instruction("Evaluate round 1"))
            .await
            .unwrap();
        let parsed = parse_evaluation(&reply, &CriteriaSet::default());
        assert_eq!(parsed.parsed_count(), 4);
        assert!(parsed.comments.starts_with("Theist Expert 2"));
    }

    #[tokio::test]
    async fn test_replies_are_deterministic() {
        let judge = Participant::challenger("Judge", "persona");
        let request = PromptRequest::instruction("Evaluate round 2");
        let a = CannedResponder::default().respond(&judge, &request).await.unwrap();
        let b = CannedResponder::default().respond(&judge, &request).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_fixed_score() {
        let responder = CannedResponder::default().with_fixed_score(9);
        let judge = Participant::challenger("Judge", "persona");
        let reply = responder
            .respond(&judge, &PromptRequest::instruction("Evaluate"))
            .await
            .unwrap();
        assert!(reply.contains("Clarity: 5"));
    }

    #[tokio::test]
    async fn test_statements_count_turns_per_participant() {
        let responder = CannedResponder::default();
        let speaker = Participant::advocate("Atheist Advocate", "persona");
        let request = PromptRequest::new()
            .with_segment(PromptSegment::system("persona"))
            .with_segment(PromptSegment::instruction("Opening statement"));

        let first = responder.respond(&speaker, &request).await.unwrap();
        let second = responder.respond(&speaker, &request).await.unwrap();
        assert!(first.contains("advocating side (turn 1)"));
        assert!(second.contains("(turn 2)"));
    }
}
