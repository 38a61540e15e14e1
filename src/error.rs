//! Error types for the crx-scaffold CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! A missing extension name is not an error: the question sequencer reports it
//! as an [`Abort`](crate::prompt::Abort) value instead.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for crx-scaffold operations.
#[derive(Error, Debug)]
pub enum CrxError {
    /// The tool configuration could not be read, parsed, or validated.
    #[error("{0}")]
    ConfigError(String),

    /// Reading an answer from the interactive input failed.
    #[error("failed to read answer: {0}")]
    InputError(#[source] std::io::Error),

    /// A project directory or file could not be created.
    #[error("failed to write '{}': {}", .path.display(), .source)]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest could not be serialized or parsed.
    #[error("manifest JSON error: {0}")]
    ManifestError(#[from] serde_json::Error),

    /// A file template referenced a variable that was not supplied.
    #[error("failed to render template for '{file}': {message}")]
    TemplateError { file: String, message: String },
}

impl CrxError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CrxError::ConfigError(_)
            | CrxError::InputError(_)
            | CrxError::WriteError { .. }
            | CrxError::ManifestError(_)
            | CrxError::TemplateError { .. } => exit_codes::FAILURE,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CrxError::WriteError {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for crx-scaffold operations.
pub type Result<T> = std::result::Result<T, CrxError>;
