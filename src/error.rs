//! Error types for suitegrid
//!
//! Uses `thiserror` for library errors; `anyhow` stays at the binary edge.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for suitegrid operations
pub type GridResult<T> = Result<T, GridError>;

/// Main error type for suitegrid operations
#[derive(Error, Debug)]
pub enum GridError {
    /// Required command parameters are missing or empty.
    ///
    /// Carries every validation message at once so the operator fixes the
    /// whole invocation in one pass instead of one flag at a time.
    #[error("invalid arguments: {}", .errors.join(", "))]
    InvalidParameters { errors: Vec<String> },

    /// Two generated execution groups resolved to the same name
    #[error("duplicate execution group '{name}'")]
    DuplicateGroup { name: String },

    /// Options override file exists but could not be parsed
    #[error("invalid options file {file}: {message}")]
    InvalidOptionsFile { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Plan serialization error
    #[error("plan serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
