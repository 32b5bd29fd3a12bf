//! Error types for pr-triage

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pr-triage
#[derive(Debug, Error)]
pub enum TriageError {
    /// Input path does not reference an existing file
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input is not a JSON array of comment objects
    #[error("Failed to parse review comments: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for pr-triage
pub type Result<T> = std::result::Result<T, TriageError>;
