//! Voice Shaping Cascade
//!
//! Single forward pass applying, per sample:
//! 1. First-difference emphasis scaled by `high_pass_gain`
//! 2. `tanh` soft clip with drive `distortion`, then `output_gain`
//! 3. Sinusoidal wobble blending each sample with the previous output
//!
//! The difference stage remembers its own post-gain output rather than the
//! previous input, so the gain compounds from sample to sample. The wobble
//! reads the previous sample after it has already been through this pass.
//! Both behaviours shape the sound and must not be "corrected".

use super::preset::EffectPreset;

/// Samples whose magnitude falls below this after clipping are halved
pub const DEAD_ZONE: f64 = 0.01;

/// Phase advance of the wobble per sample, in radians
pub const VIBRATO_RATE: f64 = 0.01;

/// Apply the shaping cascade to a copy of `samples`
///
/// The input slice is never modified. The first and last samples are
/// excluded from the wobble stage.
pub fn apply_effects(samples: &[f64], preset: &EffectPreset) -> Vec<f64> {
    let mut output = samples.to_vec();
    let last = output.len().saturating_sub(1);
    let mut prev_sample = 0.0;

    for i in 0..output.len() {
        // Emphasis
        let hp = output[i] - prev_sample;
        output[i] = hp * preset.high_pass_gain;
        prev_sample = output[i];

        // Soft clip
        let mut shaped = (output[i] * preset.distortion).tanh() * preset.output_gain;
        if shaped.abs() < DEAD_ZONE {
            shaped *= 0.5;
        }
        output[i] = shaped;

        // Wobble
        if i > 0 && i < last {
            let w = (i as f64 * VIBRATO_RATE).sin() * preset.vibrato;
            output[i] = output[i] * (1.0 + w) + output[i - 1] * w;
        }
    }

    output
}
