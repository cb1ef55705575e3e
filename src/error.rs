//! Error handling for Voicewiz
//!
//! Every failure is terminal for the invocation that raised it. Nothing is
//! retried and no partial output is returned.

use thiserror::Error;

/// Result type alias for Voicewiz operations
pub type Result<T> = std::result::Result<T, VoiceError>;

/// Main error type for Voicewiz operations
#[derive(Error, Debug)]
pub enum VoiceError {
    // Input Errors
    #[error("Audio contains no samples")]
    EmptyInput,

    #[error("Invalid audio format: {reason}")]
    InvalidFormat { reason: String },

    // File Errors
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid audio file: {reason}")]
    InvalidAudio {
        reason: String,
        #[source]
        source: Option<hound::Error>,
    },

    #[error("Unsupported audio format: {format}")]
    UnsupportedFormat { format: String },

    #[error("Input file is {size_bytes} bytes (limit {limit_bytes} bytes)")]
    InputTooLarge { size_bytes: u64, limit_bytes: u64 },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl VoiceError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            VoiceError::EmptyInput => "EMPTY_INPUT",
            VoiceError::InvalidFormat { .. } => "INVALID_FORMAT",
            VoiceError::FileNotFound { .. } => "FILE_NOT_FOUND",
            VoiceError::InvalidAudio { .. } => "INVALID_AUDIO",
            VoiceError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            VoiceError::InputTooLarge { .. } => "INPUT_TOO_LARGE",
            VoiceError::Io(_) => "IO_ERROR",
            VoiceError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if the user can fix this error by supplying different input
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            VoiceError::EmptyInput
                | VoiceError::FileNotFound { .. }
                | VoiceError::InvalidAudio { .. }
                | VoiceError::UnsupportedFormat { .. }
                | VoiceError::InputTooLarge { .. }
        )
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            VoiceError::EmptyInput => vec![
                "The recording is empty - record or upload a longer clip",
            ],
            VoiceError::FileNotFound { .. } => vec![
                "Check the file path is correct",
                "Verify the file hasn't been moved or deleted",
            ],
            VoiceError::InvalidAudio { .. } => vec![
                "Check if the file plays in another application",
                "The file may be corrupted - try re-exporting from source",
            ],
            VoiceError::UnsupportedFormat { .. } => vec![
                "Convert the clip to WAV format first",
            ],
            VoiceError::InputTooLarge { .. } => vec![
                "Trim the clip to a shorter section",
                "Raise max_input_bytes in the configuration file",
            ],
            _ => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(VoiceError::EmptyInput.error_code(), "EMPTY_INPUT");
        let err = VoiceError::InvalidFormat {
            reason: "sample rate must be positive".to_string(),
        };
        assert_eq!(err.error_code(), "INVALID_FORMAT");
        assert!(err.to_string().contains("sample rate"));
    }

    #[test]
    fn test_recovery_suggestions() {
        let err = VoiceError::InputTooLarge {
            size_bytes: 20,
            limit_bytes: 10,
        };
        assert!(err.is_recoverable());
        assert!(!err.recovery_suggestions().is_empty());

        let err = VoiceError::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert!(!err.is_recoverable());
        assert!(err.recovery_suggestions().is_empty());
    }
}
