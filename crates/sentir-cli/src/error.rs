//! Error types for sentir-cli

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Neither text nor a file to analyse
    #[error("No input provided, use -i/--input or -f/--file, see --help for more options")]
    MissingInput,

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Sentir error
    #[error("{0}")]
    Sentir(String),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::Sentir(_) => ExitCode::from(1),
            Self::MissingInput => ExitCode::from(2),
            Self::FileNotFound(_) => ExitCode::from(3),
            Self::Json(_) => ExitCode::from(4),
            Self::Io(_) => ExitCode::from(7),
        }
    }
}

impl From<sentir::SentirError> for CliError {
    fn from(e: sentir::SentirError) -> Self {
        Self::Sentir(e.to_string())
    }
}
