//! # Document Codec Errors
//!
//! Only saving can fail. A failed load is not an error; it falls back to the
//! caller's default collection.

use thiserror::Error;

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Document codec errors
#[derive(Debug, Clone, Error)]
pub enum CodecError {
    #[error("Failed to serialize {path}: {message}")]
    Serialize { path: String, message: String },

    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },
}

impl CodecError {
    /// Path of the document the failure relates to
    pub fn path(&self) -> &str {
        match self {
            CodecError::Serialize { path, .. } | CodecError::Write { path, .. } => path,
        }
    }
}
