//! Configuration
//!
//! User settings stored as JSON. Every field has a default, so a partial
//! file (or none at all) is valid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, VoiceError};

/// Environment variable naming a configuration file
pub const CONFIG_ENV_VAR: &str = "VOICEWIZ_CONFIG";

/// Largest clip accepted for processing (10 MiB)
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 10 * 1024 * 1024;

/// Voicewiz settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Reject input files larger than this many bytes
    pub max_input_bytes: u64,
    /// Preset used when none is given on the command line
    pub default_preset: String,
    /// Directory for generated files; next to the input when unset
    pub output_dir: Option<PathBuf>,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            default_preset: "soft".to_string(),
            output_dir: None,
        }
    }
}

impl VoiceConfig {
    /// Load settings from a JSON file
    ///
    /// # Errors
    /// * `FileNotFound` - If the file does not exist
    /// * `Serialization` - If the JSON is malformed
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(VoiceError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Resolve settings from an explicit path, then `VOICEWIZ_CONFIG`, then defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match std::env::var_os(CONFIG_ENV_VAR) {
                Some(path) => Self::load(Path::new(&path)),
                None => Ok(Self::default()),
            },
        }
    }

    /// Write settings as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
