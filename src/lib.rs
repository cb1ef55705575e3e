//! Voicewiz - Voice Preset Transformer
//!
//! Turns a short voice clip into one of four preset voices and renders the
//! result as a mono 16-bit WAV file.
//!
//! # Pipeline
//!
//! 1. Preset lookup (unknown names use `soft`)
//! 2. Pitch shift by linear-interpolation resampling
//! 3. Emphasis, soft clip and vibrato in one forward pass
//! 4. PCM16 WAV encoding at the original sample rate

pub mod cli;
pub mod config;
pub mod dsp;
pub mod engine;
pub mod error;

pub use config::VoiceConfig;
pub use dsp::{apply_voice_preset, apply_voice_preset_to, get_preset, EffectPreset, VoicePreset};
pub use engine::{AudioSamples, EncodedAudioFile};
pub use error::{Result, VoiceError};
