//! Voicewiz CLI - Voice Preset Transformer
//!
//! Command-line interface for the Voicewiz voice transformer.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use voicewiz::cli::{commands, Cli, Commands};
use voicewiz::VoiceConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    log::info!("Voicewiz v{}", env!("CARGO_PKG_VERSION"));

    let config = VoiceConfig::resolve(cli.config.as_deref()).context("failed to load configuration")?;

    let result = match cli.command {
        Commands::Process {
            input,
            preset,
            output,
        } => commands::process(&input, preset.as_deref(), output.as_deref(), &config)
            .with_context(|| format!("failed to process {}", input.display())),
        Commands::Presets => commands::list_presets().context("failed to list presets"),
        Commands::Info { input } => commands::show_info(&input, &config)
            .with_context(|| format!("failed to inspect {}", input.display())),
    };

    if let Err(err) = &result {
        if let Some(voice_err) = err.downcast_ref::<voicewiz::VoiceError>() {
            for suggestion in voice_err.recovery_suggestions() {
                eprintln!("hint: {}", suggestion);
            }
        }
    }

    result
}
