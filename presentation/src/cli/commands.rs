//! CLI command definitions

use arena_domain::{DebateSettings, ResponseStyle};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Statement length accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// ~150 words per statement
    Brief,
    /// ~400 words per statement
    Concise,
    /// ~800 words per statement
    Standard,
    /// ~1200 words per statement
    Detailed,
}

impl From<StyleArg> for ResponseStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Brief => ResponseStyle::Brief,
            StyleArg::Concise => ResponseStyle::Concise,
            StyleArg::Standard => ResponseStyle::Standard,
            StyleArg::Detailed => ResponseStyle::Detailed,
        }
    }
}

/// CLI arguments for debate-arena
#[derive(Parser, Debug)]
#[command(name = "debate-arena")]
#[command(author, version, about = "Knockout debates between LLM personas")]
#[command(long_about = r#"
Debate Arena runs a structured debate between one Advocate and a rotating
pool of Challengers. Challengers who are not speaking act as judges: after
every round but the last they score the active Challenger, and a majority
vote to replace swaps in a Challenger who has not debated yet.

Configuration files are loaded from (in priority order):
1. ARENA_* environment variables
2. --config <path>     Explicit config file (TOML, or JSON by extension)
3. ./debate.toml       Project-level config
4. ~/.config/debate-arena/config.toml   Global config

Without a configured debate, a built-in preset is used (--preset 1-3).

Example:
  debate-arena --preset 2 --rounds 4
  debate-arena --config debate.toml --style brief --seed 7
  debate-arena --preset 1 --dry-run --json
"#)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Built-in debate to run when no configuration describes one
    #[arg(short, long, value_name = "1-3", value_parser = clap::value_parser!(u8).range(1..=3))]
    pub preset: Option<u8>,

    /// Number of rounds
    #[arg(short, long, value_name = "N")]
    pub rounds: Option<u32>,

    /// Maximum number of Challenger replacements
    #[arg(long, value_name = "N")]
    pub rotation_limit: Option<u32>,

    /// Statement length
    #[arg(short, long, value_enum)]
    pub style: Option<StyleArg>,

    /// Seed for replacement selection (reproducible rotations)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Use the offline canned responder instead of Ollama
    #[arg(long)]
    pub dry_run: bool,

    /// Print full statements instead of previews
    #[arg(long)]
    pub verbose: bool,

    /// Log level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub log_level: u8,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the transcript record as JSON
    #[arg(long)]
    pub json: bool,

    /// Directory for saved transcripts
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Do not save the transcript
    #[arg(long)]
    pub no_save: bool,

    /// Write the structured event log (JSONL) to this path
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write a sample configuration file and exit
    #[arg(long, value_name = "PATH")]
    pub init_config: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of configured settings
    pub fn apply_overrides(&self, mut settings: DebateSettings) -> DebateSettings {
        if let Some(rounds) = self.rounds {
            settings = settings.with_rounds(rounds);
        }
        if let Some(limit) = self.rotation_limit {
            settings = settings.with_rotation_limit(limit);
        }
        if let Some(style) = self.style {
            settings = settings.with_response_style(style.into());
        }
        if let Some(seed) = self.seed {
            settings = settings.with_rotation_seed(seed);
        }
        settings
    }

    /// Progress is shown unless suppressed or replaced by JSON output
    pub fn shows_progress(&self) -> bool {
        !self.quiet && !self.json
    }
}
