//! Bounded, deterministic memory compaction.
//!
//! Older rounds are far less useful to a participant than the last few, so
//! the compacted block keeps only the most recent rounds and points, each
//! cut to a fixed number of characters. `...` marks an excerpt that was
//! actually cut; text within the limit is kept as is:
//!
//! ```text
//! Debate History Summary:
//!
//! Round 4:
//! Advocate: <first 200 chars>...
//! Challenger: <first 200 chars>...
//!
//! Key Points Already Made:
//! - <first 100 chars>...
//!
//! Opponent's Key Points:
//! - <first 100 chars>...
//! ```

use super::summary::MemorySummary;
use crate::core::string::{prefix_chars, truncate_chars};
use std::fmt::Write;

/// Limits applied when compacting a [`MemorySummary`].
#[derive(Debug, Clone, PartialEq, Eq)]
struct CompactionBudget {
    recent_rounds: usize,
    statement_chars: usize,
    recent_points: usize,
    point_chars: usize,
    max_chars: usize,
}

impl Default for CompactionBudget {
    /// 3 rounds of 200 chars, 5 points of 100 chars, 2000 chars overall.
    fn default() -> Self {
        Self {
            recent_rounds: 3,
            statement_chars: 200,
            recent_points: 5,
            point_chars: 100,
            max_chars: 2000,
        }
    }
}

/// Renders a [`MemorySummary`] into a prompt-ready block.
///
/// # Example
///
/// ```
/// use arena_domain::{ContextCompactor, MemorySummary, Role, RoundMemory};
///
/// let mut memory = MemorySummary::new(Role::Advocate);
/// assert_eq!(ContextCompactor::default().summarize(&memory), "");
///
/// memory.record(RoundMemory::new(1, "Taxes fund care.", "Costs rise."));
/// let block = ContextCompactor::default().summarize(&memory);
/// assert!(block.starts_with("Debate History Summary:"));
/// assert!(block.contains("Round 1:\nAdvocate: Taxes fund care."));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContextCompactor {
    budget: CompactionBudget,
}

impl ContextCompactor {
    /// Compact the memory; empty memory yields an empty string.
    pub fn summarize(&self, memory: &MemorySummary) -> String {
        if memory.is_empty() {
            return String::new();
        }

        let budget = &self.budget;
        let mut out = String::from("Debate History Summary:\n\n");

        for round in memory.history().iter().rev().take(budget.recent_rounds) {
            let _ = writeln!(out, "Round {}:", round.round_number);
            if !round.advocate_statement.is_empty() {
                let _ = writeln!(
                    out,
                    "Advocate: {}",
                    truncate_chars(&round.advocate_statement, budget.statement_chars)
                );
            }
            if !round.challenger_statement.is_empty() {
                let _ = writeln!(
                    out,
                    "Challenger: {}",
                    truncate_chars(&round.challenger_statement, budget.statement_chars)
                );
            }
            out.push('\n');
        }

        out.push_str("Key Points Already Made:\n");
        for point in tail(memory.own_points(), budget.recent_points) {
            let _ = writeln!(out, "- {}", truncate_chars(point, budget.point_chars));
        }

        out.push_str("\nOpponent's Key Points:\n");
        for point in tail(memory.opponent_points(), budget.recent_points) {
            let _ = writeln!(out, "- {}", truncate_chars(point, budget.point_chars));
        }

        if out.chars().count() > budget.max_chars {
            out = prefix_chars(&out, budget.max_chars).to_string();
        }
        out
    }
}

fn tail<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}
