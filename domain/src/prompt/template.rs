//! Prompt templates for debate turns and judging

use super::segment::{PromptRequest, PromptSegment, TurnPosition};
use crate::debate::{ResponseStyle, Round};
use crate::judging::CriteriaSet;
use crate::participant::{Participant, Role};

/// Statement recorded when a speaker's responder fails
pub const PLACEHOLDER_STATEMENT: &str =
    "I apologize, but I'm unable to provide a response at this moment.";

/// How many past rounds are replayed verbatim into a turn prompt
pub const HISTORY_WINDOW: usize = 5;

/// Templates for generating prompts at each stage of a round
pub struct DebatePromptTemplate;

impl DebatePromptTemplate {
    /// Persona preamble for a speaker
    pub fn persona(participant: &Participant, topic: &str, style: ResponseStyle) -> String {
        format!(
            r#"You are {name}, representing the {stance} position in a debate.
Topic: {topic}

{description}

IMPORTANT INSTRUCTIONS:
- Do NOT start your responses with phrases like "As a [your role]..." or identify yourself in any way
- Do NOT mention that you are an AI or language model
- Speak naturally as if you are a real person engaged in a live debate
- Jump directly into your arguments without any self-introduction

{style}
Maintain a respectful and professional tone at all times.
Focus on strong reasoning and evidence to support your position.
Address both the topic and your opponent's arguments directly.

Stay consistent with your assigned perspective throughout the debate."#,
            name = participant.name,
            stance = participant.role.stance(),
            topic = topic,
            description = participant.role_description,
            style = style.description(),
        )
    }

    /// Short repetition of the length instruction
    pub fn style_reminder(style: ResponseStyle) -> String {
        format!("IMPORTANT: {}", style.description())
    }

    pub fn memory_context(summary: &str) -> String {
        format!("Previous debate context: {}", summary)
    }

    /// The request for this turn
    pub fn round_instruction(round_number: u32, topic: &str, position: TurnPosition) -> String {
        match (round_number, position) {
            (1, TurnPosition::First) => format!(
                "This is round 1 of our debate on '{}'. Please make your opening statement.",
                topic
            ),
            (1, TurnPosition::Second) => format!(
                "This is round 1 of our debate on '{}'. Your opponent made the following opening statement. Please respond with your opening statement:",
                topic
            ),
            (n, _) => format!(
                "This is round {} of our debate. Please continue your arguments based on the previous exchanges.",
                n
            ),
        }
    }

    /// Append the first speaker's statement to the second speaker's instruction
    pub fn with_opponent_statement(instruction: &str, opponent: Role, statement: &str) -> String {
        format!(
            "{}\n\n{}'s statement: {}",
            instruction,
            opponent.label(),
            statement
        )
    }

    /// Replay the last [`HISTORY_WINDOW`] rounds, tagged relative to `speaker`.
    pub fn history_segments(speaker: Role, transcript: &[Round]) -> Vec<PromptSegment> {
        let start = transcript.len().saturating_sub(HISTORY_WINDOW);
        let mut segments = Vec::new();
        for round in &transcript[start..] {
            for (role, name, statement) in [
                (Role::Advocate, &round.advocate_name, &round.advocate_statement),
                (Role::Challenger, &round.challenger_name, &round.challenger_statement),
            ] {
                if statement.is_empty() {
                    continue;
                }
                let content = format!("{}: {}", name, statement);
                segments.push(if role == speaker {
                    PromptSegment::own(content)
                } else {
                    PromptSegment::opponent(content)
                });
            }
        }
        segments
    }

    /// Assemble a complete turn request.
    ///
    /// Order: persona, style reminder, memory (when non-empty), history,
    /// instruction. The style's unit budget is attached as the length hint.
    pub fn turn_request(
        speaker: &Participant,
        topic: &str,
        style: ResponseStyle,
        memory_block: &str,
        transcript: &[Round],
        instruction: String,
    ) -> PromptRequest {
        let mut request = PromptRequest::new()
            .with_segment(PromptSegment::system(Self::persona(speaker, topic, style)))
            .with_segment(PromptSegment::system(Self::style_reminder(style)));
        if !memory_block.is_empty() {
            request.push(PromptSegment::system(Self::memory_context(memory_block)));
        }
        for segment in Self::history_segments(speaker.role, transcript) {
            request.push(segment);
        }
        request
            .with_segment(PromptSegment::instruction(instruction))
            .with_max_units(style.max_units())
    }

    /// Prompt asking a judge to score the active Challenger for one round
    pub fn evaluation_prompt(topic: &str, round: &Round, criteria: &CriteriaSet) -> String {
        let mut prompt = format!(
            r#"You are a debate judge evaluating round {} on the topic: {}

Your task is to assess the performance of the second speaker (Challenging Position) against the first speaker (Advocating Position).

EVALUATION CRITERIA:
"#,
            round.number, topic
        );

        for criterion in criteria.iter() {
            prompt.push_str(&format!(
                "- {} (weight: {})\n",
                criterion.title(),
                criterion.weight
            ));
            for (score, description) in &criterion.scoring_guide {
                prompt.push_str(&format!("  Score {}: {}\n", score, description));
            }
        }

        prompt.push_str(&format!("\nDEBATE TRANSCRIPT (ROUND {}):\n", round.number));
        prompt.push_str(&format!(
            "=== {} (Advocating) ===\n{}\n\n",
            round.advocate_name,
            non_empty_or(&round.advocate_statement, "No statement provided")
        ));
        prompt.push_str(&format!(
            "=== {} (Challenging) ===\n{}\n\n",
            round.challenger_name,
            non_empty_or(&round.challenger_statement, "No statement provided")
        ));

        prompt.push_str("REQUIRED EVALUATION FORMAT:\n\n");
        for criterion in criteria.iter() {
            prompt.push_str(&format!("{}: [score 1-5]\n", criterion.title()));
        }
        prompt.push_str(
            r#"
Comments: [Provide 2-3 sentences justifying your scores]

IMPORTANT INSTRUCTIONS:
1. All scores MUST be integers between 1-5
2. DO NOT calculate a total score
3. Be critical and objective in your evaluation
4. The challenging speaker keeps their seat only if they perform well, so evaluate truthfully
5. Format your response EXACTLY as shown above"#,
        );

        prompt
    }
}

fn non_empty_or<'a>(text: &'a str, fallback: &'a str) -> &'a str {
    if text.trim().is_empty() { fallback } else { text }
}
