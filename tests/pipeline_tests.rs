//! Integration Tests
//!
//! End-to-end tests for the voice preset pipeline through the public API.

use approx::assert_relative_eq;
use test_case::test_case;

use voicewiz::dsp::{apply_effects, resample, transform_channel};
use voicewiz::engine::{decode_wav, float_to_pcm16, pcm16_to_float};
use voicewiz::{apply_voice_preset, get_preset, AudioSamples, VoiceError, VoicePreset};

/// Helper to create a test sine wave
fn sine(frequency: f64, sample_rate: u32, num_samples: usize, amplitude: f64) -> Vec<f32> {
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            (amplitude * (2.0 * std::f64::consts::PI * frequency * t).sin()) as f32
        })
        .collect()
}

#[test_case("soft", 1.3 ; "soft")]
#[test_case("singer", 1.4 ; "singer")]
#[test_case("young", 1.5 ; "young")]
#[test_case("elegant", 1.7 ; "elegant")]
fn test_decoded_length_matches_pitch_ratio(name: &str, ratio: f64) {
    for len in [1usize, 2, 7, 100, 4410] {
        let input = sine(220.0, 44100, len, 0.8);
        let wav = apply_voice_preset(&input, 44100, 1, name).unwrap();
        let decoded = decode_wav(wav.as_bytes()).unwrap();

        assert_eq!(
            decoded.num_frames(),
            (len as f64 / ratio).floor() as usize,
            "{} with {} samples",
            name,
            len
        );
    }
}

#[test_case(VoicePreset::Soft ; "soft")]
#[test_case(VoicePreset::Singer ; "singer")]
#[test_case(VoicePreset::Young ; "young")]
#[test_case(VoicePreset::Elegant ; "elegant")]
fn test_encoded_samples_never_saturate(preset: VoicePreset) {
    // Full-scale square wave drives every stage as hard as possible
    let input: Vec<f32> = (0..8000).map(|i| if (i / 20) % 2 == 0 { 1.0 } else { -1.0 }).collect();
    let wav = apply_voice_preset(&input, 8000, 1, preset.name()).unwrap();

    for chunk in wav.as_bytes()[44..].chunks_exact(2) {
        let value = i16::from_le_bytes([chunk[0], chunk[1]]);
        assert!(value > -32768 && value < 32767, "{} saturated: {}", preset, value);
    }
}

#[test]
fn test_unknown_preset_identical_to_soft() {
    let input = sine(330.0, 22050, 2205, 0.5);
    let soft = apply_voice_preset(&input, 22050, 1, "soft").unwrap();
    let unknown = apply_voice_preset(&input, 22050, 1, "nonexistent").unwrap();

    assert_eq!(soft.as_bytes(), unknown.as_bytes());
}

#[test]
fn test_empty_input_is_rejected() {
    let err = apply_voice_preset(&[], 44100, 1, "elegant").unwrap_err();
    assert!(matches!(err, VoiceError::EmptyInput));
    assert_eq!(err.error_code(), "EMPTY_INPUT");
}

#[test]
fn test_zero_sample_rate_is_rejected() {
    let err = apply_voice_preset(&[0.5; 10], 0, 1, "elegant").unwrap_err();
    assert!(matches!(err, VoiceError::InvalidFormat { .. }));
}

#[test]
fn test_elegant_constant_scenario() {
    let preset = get_preset("elegant");
    let input = vec![0.5_f64; 100];

    let resampled = resample(&input, preset.pitch_ratio);
    assert_eq!(resampled.len(), 58);
    assert_relative_eq!(resampled[0], 0.5, epsilon = 1e-12);

    // Reference pass written out step by step
    let mut expected = Vec::with_capacity(resampled.len());
    let mut prev = 0.0_f64;
    for (i, &x) in resampled.iter().enumerate() {
        let emphasised = (x - prev) * preset.high_pass_gain;
        prev = emphasised;
        let mut y = (emphasised * preset.distortion).tanh() * preset.output_gain;
        if y.abs() < 0.01 {
            y *= 0.5;
        }
        if i > 0 && i < resampled.len() - 1 {
            let w = (i as f64 * 0.01).sin() * preset.vibrato;
            y = y * (1.0 + w) + expected[i - 1] * w;
        }
        expected.push(y);
    }

    let output = transform_channel(&input, &preset);
    assert_eq!(output, apply_effects(&resampled, &preset));
    for (a, b) in output.iter().zip(&expected) {
        assert_relative_eq!(*a, *b, epsilon = 1e-12);
    }

    // And the encoded form matches sample for sample
    let wav = apply_voice_preset(&[0.5_f32; 100], 44100, 1, "elegant").unwrap();
    let pcm: Vec<i16> = wav.as_bytes()[44..]
        .chunks_exact(2)
        .map(|c| i16::from_le_bytes([c[0], c[1]]))
        .collect();
    let expected_pcm: Vec<i16> = expected.iter().map(|&y| float_to_pcm16(y)).collect();
    assert_eq!(pcm, expected_pcm);
}

#[test]
fn test_input_buffer_untouched() {
    let input = sine(440.0, 16000, 1600, 0.9);
    let copy = input.clone();
    let _ = apply_voice_preset(&input, 16000, 1, "singer").unwrap();
    assert_eq!(input, copy);
}

#[test]
fn test_concurrent_invocations_agree() {
    let input = sine(180.0, 44100, 44100, 0.7);
    let reference = apply_voice_preset(&input, 44100, 1, "young").unwrap();

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| apply_voice_preset(&input, 44100, 1, "young").unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for result in results {
        assert_eq!(result, reference);
    }
}

#[test]
fn test_pcm16_round_trip_is_lossless() {
    let pcm: Vec<i16> = (-32768..=32767).step_by(97).map(|v| v as i16).collect();
    let floats: Vec<f64> = pcm.iter().map(|&v| pcm16_to_float(v) as f64).collect();

    let wav = voicewiz::engine::encode_wav_pcm16(&floats, 44100).unwrap();
    let decoded: AudioSamples = decode_wav(wav.as_bytes()).unwrap();
    let back: Vec<i16> = decoded.samples[0].iter().map(|&s| float_to_pcm16(s as f64)).collect();

    assert_eq!(back, pcm);
}
