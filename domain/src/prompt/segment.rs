//! Role-tagged prompt segments handed to a responder

use serde::{Deserialize, Serialize};

/// What a segment is, from the speaker's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Persona and standing instructions
    System,
    /// Something the other side said
    Opponent,
    /// Something the speaker's own side said
    Own,
    /// The request for this turn
    Instruction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSegment {
    pub kind: SegmentKind,
    pub content: String,
}

impl PromptSegment {
    pub fn new(kind: SegmentKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(SegmentKind::System, content)
    }

    pub fn opponent(content: impl Into<String>) -> Self {
        Self::new(SegmentKind::Opponent, content)
    }

    pub fn own(content: impl Into<String>) -> Self {
        Self::new(SegmentKind::Own, content)
    }

    pub fn instruction(content: impl Into<String>) -> Self {
        Self::new(SegmentKind::Instruction, content)
    }
}

/// Ordered segments plus an optional length hint in units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    pub segments: Vec<PromptSegment>,
    pub max_units: Option<usize>,
}

impl PromptRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// A request made of one instruction segment (used for evaluations)
    pub fn instruction(content: impl Into<String>) -> Self {
        Self {
            segments: vec![PromptSegment::instruction(content)],
            max_units: None,
        }
    }

    pub fn push(&mut self, segment: PromptSegment) {
        self.segments.push(segment);
    }

    pub fn with_segment(mut self, segment: PromptSegment) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn with_max_units(mut self, max_units: usize) -> Self {
        self.max_units = Some(max_units);
        self
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Content of the last instruction segment, if any
    pub fn last_instruction(&self) -> Option<&str> {
        self.segments
            .iter()
            .rev()
            .find(|s| s.kind == SegmentKind::Instruction)
            .map(|s| s.content.as_str())
    }

    /// Flatten into a single text block for completion-style responders
    pub fn render_plain(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Where a speaker falls within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPosition {
    /// Speaks first and sees nothing from this round
    First,
    /// Speaks second and sees the first speaker's statement
    Second,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_request() {
        let request = PromptRequest::instruction("Score this round");
        assert_eq!(request.len(), 1);
        assert_eq!(request.segments[0].kind, SegmentKind::Instruction);
        assert_eq!(request.last_instruction(), Some("Score this round"));
        assert!(request.max_units.is_none());
    }

    #[test]
    fn test_builder_keeps_order() {
        let request = PromptRequest::new()
            .with_segment(PromptSegment::system("persona"))
            .with_segment(PromptSegment::opponent("A: hi"))
            .with_segment(PromptSegment::instruction("go"))
            .with_max_units(150);
        let kinds: Vec<_> = request.segments.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![SegmentKind::System, SegmentKind::Opponent, SegmentKind::Instruction]
        );
        assert_eq!(request.max_units, Some(150));
        assert_eq!(request.render_plain(), "persona\n\nA: hi\n\ngo");
    }
}
