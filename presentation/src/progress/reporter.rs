//! Console progress for debate execution

use crate::output::console::{ConsoleFormatter, PREVIEW_CHARS};
use arena_application::{DebateProgressNotifier, ResponderError, RotationOutcome};
use arena_domain::{Evaluation, LimitedResponse, Participant, VotingOutcome};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Prints the debate as it happens: round headers, statements, a judge bar
/// while votes come in, and rotation notices.
pub struct ConsoleProgress {
    verbose: bool,
    hidden: bool,
    bar: Mutex<Option<ProgressBar>>,
}

impl ConsoleProgress {
    /// `verbose` prints statements in full instead of previews
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            hidden: false,
            bar: Mutex::new(None),
        }
    }

    /// Spinners and bars are never drawn
    pub fn without_bars(mut self) -> Self {
        self.hidden = true;
        self
    }

    fn judge_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start_bar(&self, bar: ProgressBar) {
        if self.hidden {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(previous) = slot.replace(bar) {
                previous.finish_and_clear();
            }
        }
    }

    fn finish_bar(&self) {
        if let Ok(mut slot) = self.bar.lock()
            && let Some(bar) = slot.take()
        {
            bar.finish_and_clear();
        }
    }

    /// Print above the bar if one is showing
    fn print(&self, line: String) {
        if let Ok(slot) = self.bar.lock()
            && let Some(bar) = slot.as_ref()
            && !self.hidden
        {
            bar.println(line);
            return;
        }
        println!("{}", line);
    }

    /// Statement text as displayed
    pub fn statement_body(&self, text: &str) -> String {
        if self.verbose {
            text.to_string()
        } else {
            ConsoleFormatter::preview(text, PREVIEW_CHARS)
        }
    }
}

impl DebateProgressNotifier for ConsoleProgress {
    fn on_debate_start(&self, topic: &str, advocate: &str, challenger: &str, judges: &[&str]) {
        println!("{}", ConsoleFormatter::header("Debate Arena"));
        println!("{} {}", "Topic:".cyan().bold(), topic);
        println!("{} {}", "Advocate:".cyan().bold(), advocate);
        println!("{} {}", "Challenger:".cyan().bold(), challenger);
        println!("{} {}", "Judges:".cyan().bold(), judges.join(", "));
    }

    fn on_round_start(&self, round: u32, total_rounds: u32) {
        let title = if round == total_rounds {
            format!("Round {}/{} (final)", round, total_rounds)
        } else {
            format!("Round {}/{}", round, total_rounds)
        };
        print!("{}", ConsoleFormatter::section_header(&title));
    }

    fn on_turn_start(&self, speaker: &Participant) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_message(format!("{} is preparing a statement...", speaker.name));
        spinner.enable_steady_tick(Duration::from_millis(120));
        self.start_bar(spinner);
    }

    fn on_statement(&self, speaker: &Participant, statement: &LimitedResponse) {
        self.finish_bar();
        println!(
            "\n{}",
            format!("── {} ({}) ──", speaker.name, speaker.role).yellow().bold()
        );
        println!("{}", self.statement_body(&statement.text));
        if statement.was_truncated {
            println!(
                "{}",
                format!("(cut at {} words)", statement.unit_count()).dimmed()
            );
        }
    }

    fn on_responder_failure(&self, participant: &Participant, error: &ResponderError) {
        self.print(format!(
            "  {} {}: {} (fallback used)",
            "x".red(),
            participant.name,
            error
        ));
    }

    fn on_voting_start(&self, round: u32, judge_count: usize) {
        let bar = ProgressBar::new(judge_count as u64);
        bar.set_style(Self::judge_style());
        bar.set_prefix(format!("Judging round {}", round));
        bar.set_message("waiting for judges...");
        self.start_bar(bar);
    }

    fn on_evaluation(&self, evaluation: &Evaluation, degraded: bool) {
        let mark = if degraded {
            "?".yellow()
        } else if evaluation.vote.is_continue() {
            "v".green()
        } else {
            "x".red()
        };
        self.print(format!(
            "  {} {:<24} {:.2}  {}",
            mark,
            evaluation.judge_name,
            evaluation.total_score,
            ConsoleFormatter::verdict(evaluation.vote)
        ));
        if let Ok(slot) = self.bar.lock()
            && let Some(bar) = slot.as_ref()
        {
            bar.set_message(evaluation.judge_name.clone());
            bar.inc(1);
        }
    }

    fn on_voting_complete(&self, outcome: &VotingOutcome, debater: &str) {
        self.finish_bar();
        println!(
            "\n{} {} for {} ({} continue / {} replace)",
            "Verdict:".cyan().bold(),
            ConsoleFormatter::vote_line(outcome),
            debater,
            outcome.continue_votes,
            outcome.replace_votes
        );
    }

    fn on_rotation(&self, outcome: &RotationOutcome, judges: &[&str]) {
        let line = match outcome {
            RotationOutcome::Rotated { previous, next } => format!(
                "{} {} replaces {}; judges now: {}",
                "Rotation:".magenta().bold(),
                next,
                previous,
                judges.join(", ")
            ),
            RotationOutcome::NoEligibleReplacement => format!(
                "{} every judge has already debated, the current Challenger stays",
                "Rotation:".magenta().bold()
            ),
            RotationOutcome::LimitReached => format!(
                "{} limit reached, the current Challenger stays",
                "Rotation:".magenta().bold()
            ),
        };
        println!("{}", line);
    }
}
