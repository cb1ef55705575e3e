//! Voice Preset Pipeline
//!
//! Preset lookup → resample → shaping cascade → PCM16 WAV at the input
//! sample rate. Every call allocates its own working buffers, so the
//! pipeline can run from any number of threads without coordination.

use tracing::debug;

use crate::dsp::cascade::apply_effects;
use crate::dsp::preset::{get_preset, EffectPreset};
use crate::dsp::resample::resample;
use crate::engine::buffer::AudioSamples;
use crate::engine::wav::{encode_wav_pcm16, EncodedAudioFile};
use crate::error::{Result, VoiceError};

/// Resample and shape one channel with the given preset
pub fn transform_channel(samples: &[f64], preset: &EffectPreset) -> Vec<f64> {
    let resampled = resample(samples, preset.pitch_ratio);
    debug!(
        preset = preset.name,
        input_len = samples.len(),
        resampled_len = resampled.len(),
        "resampled channel"
    );
    apply_effects(&resampled, preset)
}

/// Apply a voice preset to interleaved samples and encode the result
///
/// Only channel 0 is processed; the output is always mono at the original
/// `sample_rate`. Unknown preset names use `soft`.
///
/// # Arguments
/// * `samples` - Interleaved f32 samples in [-1, 1]
/// * `sample_rate` - Sample rate of the input in Hz
/// * `channel_count` - Number of interleaved channels
/// * `preset_name` - One of `soft`, `singer`, `young`, `elegant`
///
/// # Errors
/// * `InvalidFormat` - If `sample_rate` or `channel_count` is zero
/// * `EmptyInput` - If there is not one complete frame of input
pub fn apply_voice_preset(
    samples: &[f32],
    sample_rate: u32,
    channel_count: u16,
    preset_name: &str,
) -> Result<EncodedAudioFile> {
    if sample_rate == 0 {
        return Err(VoiceError::InvalidFormat {
            reason: "sample rate must be positive".to_string(),
        });
    }
    if channel_count == 0 {
        return Err(VoiceError::InvalidFormat {
            reason: "channel count must be positive".to_string(),
        });
    }

    let first_channel: Vec<f64> = samples
        .chunks_exact(channel_count as usize)
        .map(|frame| frame[0] as f64)
        .collect();

    encode_channel(&first_channel, sample_rate, preset_name)
}

/// Apply a voice preset to a decoded buffer and encode the result
///
/// # Errors
/// Same as [`apply_voice_preset`], plus `InvalidFormat` for ragged channels.
pub fn apply_voice_preset_to(audio: &AudioSamples, preset_name: &str) -> Result<EncodedAudioFile> {
    audio.validate()?;

    let first_channel: Vec<f64> = audio.samples[0].iter().map(|&s| s as f64).collect();
    encode_channel(&first_channel, audio.sample_rate, preset_name)
}

fn encode_channel(samples: &[f64], sample_rate: u32, preset_name: &str) -> Result<EncodedAudioFile> {
    if samples.is_empty() {
        return Err(VoiceError::EmptyInput);
    }

    let preset = get_preset(preset_name);
    debug!(preset = preset.name, sample_rate, frames = samples.len(), "applying voice preset");

    let shaped = transform_channel(samples, &preset);
    encode_wav_pcm16(&shaped, sample_rate)
}

// ============================================================================
// Tests
// ============================================================================
