//! WAV Container Codec
//!
//! Encoding writes the canonical 44-byte RIFF/WAVE PCM16 header followed by
//! little-endian samples. Decoding goes through `hound` and accepts any
//! integer or float PCM layout it understands.

use std::io::Cursor;

use hound::{SampleFormat, WavReader};
use sha2::{Digest, Sha256};

use crate::engine::buffer::AudioSamples;
use crate::error::{Result, VoiceError};

/// Size of the RIFF/WAVE PCM header in bytes
pub const WAV_HEADER_LEN: usize = 44;

const BITS_PER_SAMPLE: u16 = 16;
const BYTES_PER_SAMPLE: u32 = 2;

// ============================================================================
// Encoded File
// ============================================================================

/// A complete mono PCM16 WAV file held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAudioFile {
    bytes: Vec<u8>,
}

impl EncodedAudioFile {
    /// Raw container bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take ownership of the container bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Total container length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the file carries no sample data
    pub fn is_empty(&self) -> bool {
        self.sample_count() == 0
    }

    /// Number of 16-bit samples in the data chunk
    pub fn sample_count(&self) -> usize {
        self.bytes.len().saturating_sub(WAV_HEADER_LEN) / BYTES_PER_SAMPLE as usize
    }

    /// Sample rate recorded in the header
    pub fn sample_rate(&self) -> u32 {
        read_u32_le(&self.bytes, 24)
    }

    /// SHA-256 digest of the container as lowercase hex
    pub fn checksum(&self) -> String {
        Sha256::digest(&self.bytes)
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect()
    }
}

impl AsRef<[u8]> for EncodedAudioFile {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

// ============================================================================
// Encoding
// ============================================================================

/// Quantise one float sample to signed 16-bit PCM
///
/// The value is clamped to [-1, 1], scaled by 32768 when negative and 32767
/// otherwise, then rounded.
#[inline]
pub fn float_to_pcm16(sample: f64) -> i16 {
    let s = if sample.is_nan() { 0.0 } else { sample.clamp(-1.0, 1.0) };
    let scaled = if s < 0.0 { s * 32768.0 } else { s * 32767.0 };
    scaled.round() as i16
}

/// Inverse of [`float_to_pcm16`]
#[inline]
pub fn pcm16_to_float(sample: i16) -> f32 {
    if sample < 0 {
        sample as f32 / 32768.0
    } else {
        sample as f32 / 32767.0
    }
}

/// Encode a mono sample sequence as a PCM16 WAV file
///
/// # Errors
/// * `InvalidFormat` - If `sample_rate` is zero or a header field would
///   not fit in 32 bits
pub fn encode_wav_pcm16(samples: &[f64], sample_rate: u32) -> Result<EncodedAudioFile> {
    if sample_rate == 0 {
        return Err(VoiceError::InvalidFormat {
            reason: "sample rate must be positive".to_string(),
        });
    }

    let channels: u16 = 1;
    let block_align = channels * BITS_PER_SAMPLE / 8;
    let byte_rate = sample_rate
        .checked_mul(block_align as u32)
        .ok_or_else(|| VoiceError::InvalidFormat {
            reason: format!("sample rate {} overflows the byte rate field", sample_rate),
        })?;
    let data_size = u32::try_from(samples.len())
        .ok()
        .and_then(|n| n.checked_mul(BYTES_PER_SAMPLE))
        .filter(|n| n.checked_add(36).is_some())
        .ok_or_else(|| VoiceError::InvalidFormat {
            reason: format!("{} samples exceed the WAV size limit", samples.len()),
        })?;

    let mut buf = Vec::with_capacity(WAV_HEADER_LEN + data_size as usize);

    // RIFF header
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&(36 + data_size).to_le_bytes());
    buf.extend_from_slice(b"WAVE");

    // fmt chunk
    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes()); // chunk size
    buf.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    buf.extend_from_slice(&channels.to_le_bytes());
    buf.extend_from_slice(&sample_rate.to_le_bytes());
    buf.extend_from_slice(&byte_rate.to_le_bytes());
    buf.extend_from_slice(&block_align.to_le_bytes());
    buf.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    // data chunk
    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&data_size.to_le_bytes());
    for &sample in samples {
        buf.extend_from_slice(&float_to_pcm16(sample).to_le_bytes());
    }

    Ok(EncodedAudioFile { bytes: buf })
}

// ============================================================================
// Decoding
// ============================================================================

/// Decode an in-memory WAV file into per-channel samples
///
/// # Errors
/// * `InvalidAudio` - If the bytes are not a readable WAV container
/// * `UnsupportedFormat` - For integer bit depths other than 8, 16, 24, 32
pub fn decode_wav(bytes: &[u8]) -> Result<AudioSamples> {
    let reader = WavReader::new(Cursor::new(bytes)).map_err(|e| VoiceError::InvalidAudio {
        reason: format!("Failed to parse WAV header: {}", e),
        source: Some(e),
    })?;

    read_wav(reader)
}

/// Read every sample from an open `hound` reader and de-interleave
pub(crate) fn read_wav<R: std::io::Read>(reader: WavReader<R>) -> Result<AudioSamples> {
    let spec = reader.spec();
    let interleaved = read_samples_as_f32(reader, spec.bits_per_sample, spec.sample_format)?;
    AudioSamples::from_interleaved(&interleaved, spec.channels, spec.sample_rate)
}

/// Read samples from WAV reader and convert to f32
fn read_samples_as_f32<R: std::io::Read>(
    mut reader: WavReader<R>,
    bits_per_sample: u16,
    sample_format: SampleFormat,
) -> Result<Vec<f32>> {
    let read_error = |e: hound::Error| VoiceError::InvalidAudio {
        reason: format!("Failed to read {}-bit samples: {}", bits_per_sample, e),
        source: Some(e),
    };

    match (sample_format, bits_per_sample) {
        (SampleFormat::Float, _) => reader
            .samples::<f32>()
            .collect::<std::result::Result<Vec<f32>, _>>()
            .map_err(read_error),
        (SampleFormat::Int, 8) => reader
            .samples::<i8>()
            .map(|s| s.map(|v| v as f32 / 128.0))
            .collect::<std::result::Result<Vec<f32>, _>>()
            .map_err(read_error),
        (SampleFormat::Int, 16) => reader
            .samples::<i16>()
            .map(|s| s.map(pcm16_to_float))
            .collect::<std::result::Result<Vec<f32>, _>>()
            .map_err(read_error),
        // 24-bit is delivered as i32 by hound
        (SampleFormat::Int, 24) => reader
            .samples::<i32>()
            .map(|s| s.map(|v| v as f32 / 8388608.0))
            .collect::<std::result::Result<Vec<f32>, _>>()
            .map_err(read_error),
        (SampleFormat::Int, 32) => reader
            .samples::<i32>()
            .map(|s| s.map(|v| v as f32 / 2147483648.0))
            .collect::<std::result::Result<Vec<f32>, _>>()
            .map_err(read_error),
        (SampleFormat::Int, bits) => Err(VoiceError::UnsupportedFormat {
            format: format!("{}-bit integer audio", bits),
        }),
    }
}

fn read_u32_le(bytes: &[u8], offset: usize) -> u32 {
    bytes
        .get(offset..offset + 4)
        .map_or(0, |b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

// ============================================================================
// Tests
// ============================================================================
