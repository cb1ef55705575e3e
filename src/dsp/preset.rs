//! Voice Presets
//!
//! The four named voice transformations and their effect parameters.
//! Lookup by name is total: anything unrecognised resolves to `soft`.

use serde::Serialize;

// ============================================================================
// Effect Parameters
// ============================================================================

/// Immutable parameter record driving the resampler and the filter cascade
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EffectPreset {
    /// Preset key this record belongs to
    pub name: &'static str,
    /// Resampling speed factor (> 0). Above 1 raises pitch and shortens output.
    pub pitch_ratio: f64,
    /// Multiplier applied to the first-difference signal (>= 0)
    pub high_pass_gain: f64,
    /// Soft-clip drive fed into `tanh` (> 0)
    pub distortion: f64,
    /// Scale applied after soft clipping (>= 0)
    pub output_gain: f64,
    /// Depth of the low-frequency wobble (>= 0)
    pub vibrato: f64,
}

const SOFT: EffectPreset = EffectPreset {
    name: "soft",
    pitch_ratio: 1.3,
    high_pass_gain: 0.6,
    distortion: 1.5,
    output_gain: 0.8,
    vibrato: 0.02,
};

const SINGER: EffectPreset = EffectPreset {
    name: "singer",
    pitch_ratio: 1.4,
    high_pass_gain: 0.7,
    distortion: 2.0,
    output_gain: 0.85,
    vibrato: 0.05,
};

const YOUNG: EffectPreset = EffectPreset {
    name: "young",
    pitch_ratio: 1.5,
    high_pass_gain: 0.8,
    distortion: 1.8,
    output_gain: 0.8,
    vibrato: 0.03,
};

const ELEGANT: EffectPreset = EffectPreset {
    name: "elegant",
    pitch_ratio: 1.7,
    high_pass_gain: 0.5,
    distortion: 1.2,
    output_gain: 0.75,
    vibrato: 0.01,
};

// ============================================================================
// Voice Preset
// ============================================================================

/// Named voice preset selectable by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoicePreset {
    /// Gentle raised voice
    #[default]
    Soft,
    /// Brighter voice with a stronger wobble
    Singer,
    /// Higher, livelier voice
    Young,
    /// Highest pitch with a calm, refined tone
    Elegant,
}

impl VoicePreset {
    /// All presets in menu order
    pub fn all() -> [VoicePreset; 4] {
        [
            VoicePreset::Soft,
            VoicePreset::Singer,
            VoicePreset::Young,
            VoicePreset::Elegant,
        ]
    }

    /// Lookup key for this preset
    pub fn name(&self) -> &'static str {
        self.params().name
    }

    /// Get human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            VoicePreset::Soft => "Soft",
            VoicePreset::Singer => "Singer",
            VoicePreset::Young => "Young",
            VoicePreset::Elegant => "Elegant",
        }
    }

    /// Short description shown next to the preset in listings
    pub fn description(&self) -> &'static str {
        match self {
            VoicePreset::Soft => "Soft, gentle voice with a light lift in pitch",
            VoicePreset::Singer => "Singer voice with added brightness and vibrato",
            VoicePreset::Young => "Higher, livelier young voice",
            VoicePreset::Elegant => "Smooth voice with a refined, high tone",
        }
    }

    /// Effect parameters for this preset
    pub fn params(&self) -> EffectPreset {
        match self {
            VoicePreset::Soft => SOFT,
            VoicePreset::Singer => SINGER,
            VoicePreset::Young => YOUNG,
            VoicePreset::Elegant => ELEGANT,
        }
    }

    /// Parse a preset key (case-insensitive, surrounding whitespace ignored)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "soft" => Some(VoicePreset::Soft),
            "singer" => Some(VoicePreset::Singer),
            "young" => Some(VoicePreset::Young),
            "elegant" => Some(VoicePreset::Elegant),
            _ => None,
        }
    }

    /// Resolve any name to a preset, falling back to `Soft`
    pub fn resolve(name: &str) -> Self {
        match Self::from_name(name) {
            Some(preset) => preset,
            None => {
                tracing::warn!(requested = name, "unknown voice preset, using soft");
                VoicePreset::Soft
            }
        }
    }
}

impl std::fmt::Display for VoicePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up the effect parameters for a preset name. Never fails.
pub fn get_preset(name: &str) -> EffectPreset {
    VoicePreset::resolve(name).params()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        assert_eq!(get_preset("soft"), SOFT);
        assert_eq!(get_preset("singer"), SINGER);
        assert_eq!(get_preset("young"), YOUNG);
        assert_eq!(get_preset("elegant"), ELEGANT);
    }

    #[test]
    fn test_unknown_name_falls_back_to_soft() {
        assert_eq!(get_preset("nonexistent"), SOFT);
        assert_eq!(get_preset(""), SOFT);
        assert_eq!(VoicePreset::resolve("robot"), VoicePreset::Soft);
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(VoicePreset::from_name("Elegant"), Some(VoicePreset::Elegant));
        assert_eq!(VoicePreset::from_name(" YOUNG "), Some(VoicePreset::Young));
        assert_eq!(VoicePreset::from_name("baritone"), None);
    }

    #[test]
    fn test_names_round_trip() {
        for preset in VoicePreset::all() {
            assert_eq!(VoicePreset::from_name(preset.name()), Some(preset));
            assert_eq!(preset.to_string(), preset.name());
            assert!(!preset.description().is_empty());
        }
    }

    #[test]
    fn test_parameter_ranges() {
        for preset in VoicePreset::all() {
            let p = preset.params();
            assert!(p.pitch_ratio > 0.0);
            assert!(p.high_pass_gain >= 0.0);
            assert!(p.distortion > 0.0);
            assert!(p.output_gain >= 0.0);
            assert!(p.vibrato >= 0.0);
        }
        assert_eq!(ELEGANT.pitch_ratio, 1.7);
    }
}
