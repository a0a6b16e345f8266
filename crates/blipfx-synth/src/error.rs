//! Error types for the synthesis core.
//!
//! Synthesis itself cannot fail. These errors come from the edges of the
//! crate: loading parameter files, parsing names, and container I/O.

use thiserror::Error;

/// Result type for synthesis-core operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur outside of the per-sample pipeline.
#[derive(Debug, Error)]
pub enum SynthError {
    /// A parameter name did not match any known parameter.
    #[error("unknown parameter '{name}'")]
    UnknownParameter {
        /// The name that failed to resolve.
        name: String,
    },

    /// A wave type name did not match any known wave type.
    #[error("unknown wave type '{name}'")]
    UnknownWaveType {
        /// The name that failed to resolve.
        name: String,
    },

    /// An archetype name did not match any known archetype.
    #[error("unknown archetype '{name}'")]
    UnknownArchetype {
        /// The name that failed to resolve.
        name: String,
    },

    /// A WAV buffer could not be parsed.
    #[error("invalid WAV data: {message}")]
    InvalidWav {
        /// Error message.
        message: String,
    },

    /// Parameter JSON could not be parsed or produced.
    #[error("parameter JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SynthError {
    /// Creates an unknown parameter error.
    pub fn unknown_param(name: impl Into<String>) -> Self {
        Self::UnknownParameter { name: name.into() }
    }

    /// Creates an invalid WAV error.
    pub fn invalid_wav(message: impl Into<String>) -> Self {
        Self::InvalidWav {
            message: message.into(),
        }
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            SynthError::UnknownParameter { .. } => "SYNTH_001",
            SynthError::UnknownWaveType { .. } => "SYNTH_002",
            SynthError::UnknownArchetype { .. } => "SYNTH_003",
            SynthError::InvalidWav { .. } => "SYNTH_004",
            SynthError::Json(_) => "SYNTH_005",
            SynthError::Io(_) => "SYNTH_006",
        }
    }

    /// Error category, used by the CLI's JSON reports.
    pub fn category(&self) -> &'static str {
        match self {
            SynthError::Json(_) | SynthError::Io(_) => "io",
            SynthError::InvalidWav { .. } => "wav",
            _ => "params",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_param_helper() {
        let err = SynthError::unknown_param("wobble");
        assert!(err.to_string().contains("wobble"));
        assert_eq!(err.code(), "SYNTH_001");
        assert_eq!(err.category(), "params");
    }

    #[test]
    fn test_invalid_wav_helper() {
        let err = SynthError::invalid_wav("missing data chunk");
        assert!(err.to_string().contains("missing data chunk"));
        assert_eq!(err.category(), "wav");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: SynthError = io.into();
        assert_eq!(err.code(), "SYNTH_006");
    }
}
