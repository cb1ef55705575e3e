//! Audio Sample Buffers
//!
//! Decoded audio as handed over by a decoder: one f32 sequence per channel,
//! tagged with its sample rate. Buffers are treated as immutable input.

use crate::error::{Result, VoiceError};

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert linear amplitude to decibels
///
/// Returns -f32::INFINITY for zero input.
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    if linear <= 0.0 {
        f32::NEG_INFINITY
    } else {
        20.0 * linear.log10()
    }
}

// ============================================================================
// Audio Samples
// ============================================================================

/// Multi-channel decoded audio
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSamples {
    /// Sample data per channel, each in [-1.0, 1.0]
    pub samples: Vec<Vec<f32>>,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl AudioSamples {
    /// Create from per-channel sequences
    pub fn new(samples: Vec<Vec<f32>>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Create a single-channel buffer
    pub fn mono(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self::new(vec![samples], sample_rate)
    }

    /// Create from interleaved frames `[L, R, L, R, ...]`
    ///
    /// A trailing partial frame is dropped.
    ///
    /// # Errors
    /// * `InvalidFormat` - If `channels` is zero
    pub fn from_interleaved(interleaved: &[f32], channels: u16, sample_rate: u32) -> Result<Self> {
        if channels == 0 {
            return Err(VoiceError::InvalidFormat {
                reason: "channel count must be positive".to_string(),
            });
        }

        let channels = channels as usize;
        let frames = interleaved.len() / channels;
        let mut samples = vec![Vec::with_capacity(frames); channels];

        for frame in interleaved.chunks_exact(channels) {
            for (ch, sample) in frame.iter().enumerate() {
                samples[ch].push(*sample);
            }
        }

        Ok(Self::new(samples, sample_rate))
    }

    /// Number of channels
    pub fn num_channels(&self) -> usize {
        self.samples.len()
    }

    /// Number of frames (samples per channel)
    pub fn num_frames(&self) -> usize {
        self.samples.first().map_or(0, Vec::len)
    }

    /// Check if the buffer holds no audio
    pub fn is_empty(&self) -> bool {
        self.num_frames() == 0
    }

    /// Borrow one channel
    pub fn channel(&self, channel: usize) -> Option<&[f32]> {
        self.samples.get(channel).map(Vec::as_slice)
    }

    /// Duration in seconds (0.0 when the sample rate is zero)
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_frames() as f64 / self.sample_rate as f64
    }

    /// Peak level of a channel in dB
    pub fn peak_db(&self, channel: usize) -> f32 {
        let peak = self
            .channel(channel)
            .unwrap_or(&[])
            .iter()
            .map(|s| s.abs())
            .fold(0.0_f32, f32::max);

        linear_to_db(peak)
    }

    /// RMS level of a channel in dB
    pub fn rms_db(&self, channel: usize) -> f32 {
        let data = self.channel(channel).unwrap_or(&[]);
        if data.is_empty() {
            return f32::NEG_INFINITY;
        }

        let sum_squares: f64 = data.iter().map(|&s| (s as f64) * (s as f64)).sum();
        linear_to_db((sum_squares / data.len() as f64).sqrt() as f32)
    }

    /// Check the buffer is usable as pipeline input
    ///
    /// # Errors
    /// * `InvalidFormat` - Zero sample rate, no channels, or ragged channels
    /// * `EmptyInput` - No frames
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(VoiceError::InvalidFormat {
                reason: "sample rate must be positive".to_string(),
            });
        }
        if self.samples.is_empty() {
            return Err(VoiceError::InvalidFormat {
                reason: "channel count must be positive".to_string(),
            });
        }

        let frames = self.num_frames();
        if self.samples.iter().any(|ch| ch.len() != frames) {
            return Err(VoiceError::InvalidFormat {
                reason: "channels have different lengths".to_string(),
            });
        }
        if frames == 0 {
            return Err(VoiceError::EmptyInput);
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
