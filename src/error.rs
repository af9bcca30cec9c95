//! Error types for the quill CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Per-image failures are not represented here: they are recovered inside the
//! substitution pass and rendered as inline markers.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for quill operations.
#[derive(Error, Debug)]
pub enum QuillError {
    /// User provided invalid arguments or a required input is missing.
    #[error("{0}")]
    UserError(String),

    /// Configuration is invalid or the API credential is missing.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The primary text generation call failed.
    #[error("Generation failed: {0}")]
    GenerationError(String),

    /// Trend discovery failed.
    #[error("Trend discovery failed: {0}")]
    TrendError(String),

    /// Building, serializing, or writing an archive failed.
    #[error("Archive build failed: {0}")]
    ArchiveError(String),
}

impl QuillError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            QuillError::UserError(_) => exit_codes::USER_ERROR,
            QuillError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            QuillError::GenerationError(_) => exit_codes::GENERATION_FAILURE,
            QuillError::TrendError(_) => exit_codes::GENERATION_FAILURE,
            QuillError::ArchiveError(_) => exit_codes::ARCHIVE_FAILURE,
        }
    }
}

/// Result type alias for quill operations.
pub type Result<T> = std::result::Result<T, QuillError>;
