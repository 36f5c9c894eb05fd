//! Error types for camprompt.
//!
//! The classification/composition core has no fatal-error path: malformed
//! geometry degrades to defaults rather than failing, since a bad pose must
//! not abort an otherwise-working generation pipeline. Errors only arise at
//! the serialization and I/O seams.

use thiserror::Error;

/// The main error type for camprompt operations.
#[derive(Error, Debug)]
pub enum CamPromptError {
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error (reading a pose file in tooling).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The serialized record buffer was not valid UTF-8.
    #[error("serialized record was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A specialized Result type for camprompt operations.
pub type Result<T> = std::result::Result<T, CamPromptError>;
