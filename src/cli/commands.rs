//! CLI command implementations

use std::path::Path;

use log::info;

use crate::config::VoiceConfig;
use crate::dsp::{apply_voice_preset_to, VoicePreset};
use crate::engine::io::{default_output_path, export_audio, import_audio};
use crate::error::Result;

/// Apply a preset to a WAV clip and write the result
pub fn process(
    input: &Path,
    preset: Option<&str>,
    output: Option<&Path>,
    config: &VoiceConfig,
) -> Result<()> {
    let preset = VoicePreset::resolve(preset.unwrap_or(config.default_preset.as_str()));

    info!("Processing {} with preset {}", input.display(), preset);

    let audio = import_audio(input, config)?;
    let encoded = apply_voice_preset_to(&audio, preset.name())?;

    let output_path = match output {
        Some(p) => p.to_path_buf(),
        None => default_output_path(input, preset, config),
    };
    export_audio(&encoded, &output_path)?;

    println!("=== Voicewiz ===");
    println!("Input:    {}", input.display());
    println!("Preset:   {}", preset.display_name());
    println!("Output:   {}", output_path.display());
    println!(
        "Samples:  {} -> {} @ {} Hz",
        audio.num_frames(),
        encoded.sample_count(),
        encoded.sample_rate()
    );
    println!("SHA-256:  {}", encoded.checksum());

    Ok(())
}

/// Print the preset catalogue
pub fn list_presets() -> Result<()> {
    println!(
        "{:<8} {:>6} {:>9} {:>6} {:>6} {:>7}  Description",
        "Name", "Pitch", "Emphasis", "Drive", "Gain", "Vibrato"
    );
    for preset in VoicePreset::all() {
        let p = preset.params();
        println!(
            "{:<8} {:>6.2} {:>9.2} {:>6.2} {:>6.2} {:>7.2}  {}",
            preset.name(),
            p.pitch_ratio,
            p.high_pass_gain,
            p.distortion,
            p.output_gain,
            p.vibrato,
            preset.description()
        );
    }
    Ok(())
}

/// Print format and levels of a WAV clip
pub fn show_info(input: &Path, config: &VoiceConfig) -> Result<()> {
    info!("Inspecting {}", input.display());

    let audio = import_audio(input, config)?;

    println!("File:        {}", input.display());
    println!("Sample rate: {} Hz", audio.sample_rate);
    println!("Channels:    {}", audio.num_channels());
    println!("Duration:    {:.3}s", audio.duration_secs());
    for ch in 0..audio.num_channels() {
        println!(
            "Channel {}:   peak {:.1} dBFS, RMS {:.1} dBFS",
            ch,
            audio.peak_db(ch),
            audio.rms_db(ch)
        );
    }

    Ok(())
}
