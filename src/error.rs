//! Error types for asthma-report.
//!
//! Every failure here is fatal for the report: a page that does not match the
//! expected layout aborts the run instead of producing a partial report.

use std::path::PathBuf;

/// Error type for loading, extraction and rendering.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A saved source page could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path of the page that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A source URL lacks the `https://` prefix or a second host label.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// An element the page layout requires was not found.
    #[error("Element not found: {0}")]
    MissingElement(String),

    /// Writing the rendered report failed.
    #[error("Output failed: {0}")]
    Output(#[from] std::io::Error),

    /// Serializing the report as JSON failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, Error>;
