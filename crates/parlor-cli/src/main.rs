use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use parlor_core::{ConversationStore, ModelId, PersonaId, SettingsRepository, SystemClock};
use parlor_infrastructure::{ExportWriter, TomlSettingsRepository};

mod commands;
mod logging;
mod repl;

use repl::ChatRepl;

#[derive(Parser)]
#[command(name = "parlor")]
#[command(about = "Parlor - chat with switchable personas and export the transcript", long_about = None)]
struct Cli {
    /// Settings file (defaults to ~/.config/parlor/settings.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Persona to start with (overrides the settings file)
    #[arg(long, global = true)]
    persona: Option<PersonaId>,

    /// Model identifier (overrides the settings file)
    #[arg(long, global = true)]
    model: Option<ModelId>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session (default)
    Chat,
    /// List the persona presets
    Personas,
    /// List the supported model identifiers
    Models,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init_logging();

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => chat(cli.config, cli.persona, cli.model)?,
        Commands::Personas => commands::listing::personas(),
        Commands::Models => commands::listing::models(),
    }

    Ok(())
}

fn chat(
    config: Option<PathBuf>,
    persona: Option<PersonaId>,
    model: Option<ModelId>,
) -> Result<()> {
    let repository = match config {
        Some(path) => TomlSettingsRepository::with_path(path),
        None => TomlSettingsRepository::new().context("Failed to locate settings file")?,
    };
    let mut settings = repository.load().with_context(|| {
        format!("Failed to load settings from {}", repository.path().display())
    })?;

    if let Some(persona) = persona {
        settings.persona = persona;
    }
    if let Some(model) = model {
        settings.model = model;
    }
    tracing::info!(persona = %settings.persona, model = %settings.model, "Starting chat session");

    let store = ConversationStore::from_settings(&settings, Arc::new(SystemClock));
    let writer = ExportWriter::new().context("Failed to locate export directory")?;

    let mut repl = ChatRepl::with_canned_responder(store, settings, writer);
    repl.run()?;

    let stats = repl.store().stats();
    tracing::info!(
        turns = stats.total_turns,
        chars = stats.total_chars,
        duration = %stats.duration_label(),
        "Chat session ended"
    );
    Ok(())
}
