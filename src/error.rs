//! Error handling module for rotate
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the crate should use these types for consistency.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rotate
#[derive(Error, Debug)]
pub enum RotateError {
    /// IO errors on an already-open stream (read, write, flush)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A named input or output path could not be opened
    #[error("cannot open {path:?}: {source}")]
    Resource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for rotate operations
pub type Result<T> = std::result::Result<T, RotateError>;

impl RotateError {
    /// Create a resource error for a path that failed to open
    pub fn resource(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Resource {
            path: path.into(),
            source,
        }
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}
