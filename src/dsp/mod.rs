//! Voice DSP
//!
//! The voice transformation core: preset catalogue, pitch resampler,
//! shaping cascade and the end-to-end pipeline that ties them together.

mod cascade;
mod pipeline;
mod preset;
mod resample;

pub use cascade::{apply_effects, DEAD_ZONE, VIBRATO_RATE};
pub use pipeline::{apply_voice_preset, apply_voice_preset_to, transform_channel};
pub use preset::{get_preset, EffectPreset, VoicePreset};
pub use resample::{output_len, resample};
