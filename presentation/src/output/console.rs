//! Console output formatter for debate results

use arena_domain::{DebateRecord, DebateResult, Round, Verdict, VotingOutcome};
use colored::Colorize;

/// Characters shown when a statement is previewed
pub const PREVIEW_CHARS: usize = 100;

/// Formats debate results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Final summary: who debated, how often the pool rotated, and how each
    /// judged round went.
    pub fn summary(result: &DebateResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Debate Summary"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Topic:".cyan().bold(), result.topic));
        output.push_str(&format!(
            "{} {}\n",
            "Advocate:".cyan().bold(),
            result.advocate_name
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Challengers who debated:".cyan().bold(),
            result.challenger_names.join(", ")
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Total rounds:".cyan().bold(),
            result.total_rounds
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Total rotations:".cyan().bold(),
            result.total_rotations
        ));

        if !result.transcript.is_empty() {
            output.push_str(&Self::section_header("Rounds"));
            for round in &result.transcript {
                output.push_str(&Self::round_line(round));
                output.push('\n');
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the wire record as pretty JSON
    pub fn format_json(record: &DebateRecord) -> String {
        serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".to_string())
    }

    fn round_line(round: &Round) -> String {
        let matchup = format!(
            "Round {}: {} vs {}",
            round.number, round.advocate_name, round.challenger_name
        );
        match &round.voting {
            Some(outcome) => format!("  {}  {}", matchup, Self::vote_line(outcome)),
            None => format!("  {}  {}", matchup, "(final round, not judged)".dimmed()),
        }
    }

    /// `[●○●] REPLACE (avg 3.25)`, coloured by decision
    pub fn vote_line(outcome: &VotingOutcome) -> String {
        let decision = Self::verdict(outcome.decision);
        format!(
            "{} {} (avg {:.2})",
            outcome.vote_summary(),
            decision,
            outcome.average_score()
        )
    }

    pub fn verdict(verdict: Verdict) -> String {
        match verdict {
            Verdict::Continue => verdict.as_str().green().bold().to_string(),
            Verdict::Replace => verdict.as_str().red().bold().to_string(),
        }
    }

    /// First `max_chars` characters, with `...` when something was cut
    pub fn preview(text: &str, max_chars: usize) -> String {
        let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if flat.chars().count() <= max_chars {
            flat
        } else {
            let cut: String = flat.chars().take(max_chars).collect();
            format!("{}...", cut.trim_end())
        }
    }

    pub fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    pub fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
