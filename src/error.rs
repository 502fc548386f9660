//! Error handling for METAR decoding operations.
//!
//! Field-level problems (a missing gust, an absent altimeter group) never
//! surface here: they are absorbed into typed "unavailable" readings by the
//! decoder. Only structural problems that prevent any meaningful output are
//! reported as errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON in METAR response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Malformed observation: {reason}")]
    MalformedInput { reason: String },

    #[error("No METAR data found in response")]
    NoObservations,

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DecodeError {
    /// Create a malformed input error
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error concerns the shape of the input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidJson(_) | Self::MalformedInput { .. } | Self::NoObservations
        )
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
