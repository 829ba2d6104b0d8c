//! CLI entrypoint for Debate Arena
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use arena_application::{
    ConversationLogger, DebateOrchestrator, DebateProgressNotifier, NoProgress, Responder,
    TranscriptStore,
};
use arena_domain::{DebateRecord, DebateSetup};
use arena_infrastructure::{
    CannedResponder, ConfigError, ConfigLoader, DebatePreset, FileConfig, JsonTranscriptStore,
    JsonlConversationLogger,
};
use arena_presentation::{Cli, ConsoleFormatter, ConsoleProgress};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Used when neither the configuration nor `--preset` names a debate
const DEFAULT_PRESET: u8 = 2;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.log_level {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    if let Some(path) = &cli.init_config {
        ConfigLoader::write_default(path)?;
        println!("Sample configuration written to {}", path.display());
        return Ok(());
    }

    info!("Starting Debate Arena");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    let setup = build_setup(&cli, &config)?;
    info!(
        "Debate on '{}' with {} challengers, {} rounds",
        setup.topic,
        setup.challengers.len(),
        setup.settings.rounds
    );

    // === Dependency Injection ===
    let responder = build_responder(&cli, &config)?;
    info!("Using {} responder", responder.name());

    let mut orchestrator = DebateOrchestrator::new(responder, setup)?;

    let log_path = cli
        .conversation_log
        .clone()
        .or_else(|| config.output.conversation_log.clone());
    if let Some(path) = log_path
        && let Some(logger) = JsonlConversationLogger::new(&path)
    {
        info!("Conversation log: {}", logger.path().display());
        let logger: Arc<dyn ConversationLogger> = Arc::new(logger);
        orchestrator = orchestrator.with_conversation_logger(logger);
    }

    let verbose = cli.verbose || config.output.verbose;
    let progress: Box<dyn DebateProgressNotifier> = if cli.shows_progress() {
        Box::new(ConsoleProgress::new(verbose))
    } else {
        Box::new(NoProgress)
    };

    let result = orchestrator.run_with_progress(progress.as_ref()).await?;
    let record = DebateRecord::from(&result);

    let saved_to = if cli.no_save || !config.output.save_transcript {
        None
    } else {
        let dir = cli
            .output_dir
            .clone()
            .unwrap_or_else(|| config.output.dir.clone());
        match JsonTranscriptStore::new(dir).save(&record) {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Could not save transcript: {}", e);
                None
            }
        }
    };

    if cli.json {
        println!("{}", ConsoleFormatter::format_json(&record));
    } else if !cli.quiet {
        println!("{}", ConsoleFormatter::summary(&result));
        if let Some(path) = saved_to {
            println!("Full transcript saved to: {}", path.display());
        }
    }

    Ok(())
}

/// Configured debate unless `--preset` is given or nothing is configured.
fn build_setup(cli: &Cli, config: &FileConfig) -> Result<DebateSetup> {
    let setup = if config.has_debate() && cli.preset.is_none() {
        match config.to_setup() {
            Ok(setup) => setup,
            Err(ConfigError::Invalid(issues)) => {
                for issue in &issues {
                    eprintln!("{}", issue);
                }
                bail!("Configuration has {} issue(s)", issues.len());
            }
            Err(e) => return Err(e.into()),
        }
    } else {
        let number = cli.preset.unwrap_or(DEFAULT_PRESET);
        let preset = DebatePreset::by_number(number).ok_or(ConfigError::UnknownPreset(number))?;
        info!("Using preset {}", preset.label());

        let (settings, issues) = config.debate.to_settings();
        if let Some(issue) = issues.iter().find(|i| i.is_error()) {
            bail!("{}", issue);
        }
        preset.to_setup().with_settings(settings)
    };

    let settings = cli.apply_overrides(setup.settings.clone());
    let setup = setup.with_settings(settings);
    setup.validate()?;
    Ok(setup)
}

fn build_responder(cli: &Cli, config: &FileConfig) -> Result<Arc<dyn Responder>> {
    if cli.dry_run {
        return Ok(Arc::new(CannedResponder::default()));
    }
    ollama_responder(config)
}

#[cfg(feature = "ollama")]
fn ollama_responder(config: &FileConfig) -> Result<Arc<dyn Responder>> {
    Ok(Arc::new(arena_infrastructure::OllamaResponder::from_config(
        &config.responder,
    )))
}

#[cfg(not(feature = "ollama"))]
fn ollama_responder(_config: &FileConfig) -> Result<Arc<dyn Responder>> {
    bail!("Built without the `ollama` feature; use --dry-run")
}
