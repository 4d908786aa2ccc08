//! Error types for the huffcode libraries.
//!
//! Code construction itself is total: every input text, including the empty
//! one, maps to a well-defined result. Errors only arise at the edges, when
//! reading input from disk, rendering JSON or parsing configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the huffcode libraries.
#[derive(Error, Debug)]
pub enum HuffcodeError {
    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for huffcode operations.
pub type Result<T> = std::result::Result<T, HuffcodeError>;
