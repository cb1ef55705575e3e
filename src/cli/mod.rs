//! CLI Module
//!
//! Command-line interface for the Voicewiz voice transformer.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Voicewiz - turn a voice clip into one of four preset voices
#[derive(Parser, Debug)]
#[command(name = "voicewiz")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a JSON configuration file (falls back to $VOICEWIZ_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply a voice preset to a WAV clip
    #[command(name = "process")]
    Process {
        /// Input WAV file
        input: PathBuf,

        /// Voice preset: soft, singer, young or elegant
        #[arg(short, long)]
        preset: Option<String>,

        /// Output file (default: <input>_<preset>.wav)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the available voice presets
    #[command(name = "presets")]
    Presets,

    /// Show format and level information for a WAV clip
    #[command(name = "info")]
    Info {
        /// Input WAV file
        input: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_process() {
        let cli = Cli::parse_from([
            "voicewiz", "process", "clip.wav", "--preset", "elegant", "-o", "out.wav",
        ]);
        match cli.command {
            Commands::Process {
                input,
                preset,
                output,
            } => {
                assert_eq!(input, PathBuf::from("clip.wav"));
                assert_eq!(preset.as_deref(), Some("elegant"));
                assert_eq!(output, Some(PathBuf::from("out.wav")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::parse_from(["voicewiz", "presets", "--verbose", "--config", "cfg.json"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("cfg.json")));
        assert!(matches!(cli.command, Commands::Presets));
    }
}
