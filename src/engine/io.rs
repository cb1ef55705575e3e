//! Audio file I/O for Voicewiz
//!
//! Reads WAV clips from disk with upload-style validation and writes
//! encoded results back out.

use std::fs;
use std::path::{Path, PathBuf};

use hound::WavReader;
use tracing::info;

use crate::config::VoiceConfig;
use crate::dsp::VoicePreset;
use crate::engine::buffer::AudioSamples;
use crate::engine::wav::{read_wav, EncodedAudioFile};
use crate::error::{Result, VoiceError};

/// Import a WAV clip from disk
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InputTooLarge` - If the file exceeds `config.max_input_bytes`
/// * `UnsupportedFormat` - If the file is not a `.wav` file
/// * `InvalidAudio` - If the WAV data cannot be decoded
/// * `EmptyInput` - If the clip holds no samples
pub fn import_audio(path: &Path, config: &VoiceConfig) -> Result<AudioSamples> {
    if !path.exists() {
        return Err(VoiceError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let size_bytes = fs::metadata(path)?.len();
    if size_bytes > config.max_input_bytes {
        return Err(VoiceError::InputTooLarge {
            size_bytes,
            limit_bytes: config.max_input_bytes,
        });
    }

    let is_wav = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"));
    if !is_wav {
        return Err(VoiceError::UnsupportedFormat {
            format: path
                .extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_else(|| "unknown".to_string()),
        });
    }

    let reader = WavReader::open(path).map_err(|e| VoiceError::InvalidAudio {
        reason: format!("Failed to open WAV file: {}", e),
        source: Some(e),
    })?;

    let audio = read_wav(reader)?;
    if audio.is_empty() {
        return Err(VoiceError::EmptyInput);
    }

    info!(
        path = %path.display(),
        sample_rate = audio.sample_rate,
        channels = audio.num_channels(),
        frames = audio.num_frames(),
        "imported clip"
    );
    Ok(audio)
}

/// Write an encoded file to disk, creating parent directories as needed
pub fn export_audio(file: &EncodedAudioFile, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, file.as_bytes())?;

    info!(path = %path.display(), bytes = file.len(), "exported clip");
    Ok(())
}

/// Output file name for a processed clip: `<stem>_<preset>.wav`
pub fn output_file_name(input: &Path, preset: VoicePreset) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "voice".to_string());
    format!("{}_{}.wav", stem, preset.name())
}

/// Default output path: the configured directory, else next to the input
pub fn default_output_path(input: &Path, preset: VoicePreset, config: &VoiceConfig) -> PathBuf {
    let name = output_file_name(input, preset);
    match &config.output_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

// ============================================================================
// Tests
// ============================================================================
