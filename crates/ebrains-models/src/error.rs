//! Error types for model metadata checks.

use std::path::PathBuf;

/// Errors that can occur while reading or interpreting model metadata.
#[derive(Debug, thiserror::Error)]
pub enum ModelsError {
    /// Input file missing or unreadable.
    #[error("source unavailable: {}", path.display())]
    SourceUnavailable {
        /// The path that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A repository URL whose shape we cannot derive a listing from.
    #[error("unrecognized location '{url}': {detail}")]
    UnrecognizedLocation { url: String, detail: String },
}

/// Result type for model metadata operations.
pub type Result<T> = std::result::Result<T, ModelsError>;
