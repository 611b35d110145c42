//! Error types for inspforge-container

use std::path::PathBuf;

/// Errors that can occur while analysing or splicing a container
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No JPEG start-of-image marker anywhere in the container
    #[error("No JPEG start marker found in INSP file")]
    MissingStartMarker,

    /// No JPEG end-of-image marker anywhere in the container
    #[error("No JPEG end marker found in INSP file")]
    MissingEndMarker,

    /// The last end marker precedes the first start marker
    #[error("Invalid JPEG boundaries: end marker at offset {end} precedes start marker at offset {start}")]
    InvalidBoundaries { start: usize, end: usize },

    /// Template bytes do not match the boundaries they were analysed with
    #[error("Template size mismatch: boundaries describe {expected} bytes, got {actual}")]
    TemplateMismatch { expected: usize, actual: usize },
}
