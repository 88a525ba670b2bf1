//! Error types for dataset loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing a dataset file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Dataset file not found.
    #[error("Dataset file not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is too short to hold the 4-byte count header.
    #[error("Missing count header in {path} ({len} bytes)")]
    MissingHeader { path: PathBuf, len: usize },

    /// Count header holds a negative element count.
    #[error("Negative element count {count} in {path}")]
    NegativeCount { path: PathBuf, count: i32 },

    /// Count header disagrees with the number of records present.
    #[error("{path} declares {declared} values but holds {available}")]
    LengthMismatch {
        path: PathBuf,
        declared: usize,
        available: usize,
    },

    /// Data is not a whole number of 4-byte records.
    #[error("{path} has {len} data bytes, not a multiple of 4")]
    TrailingBytes { path: PathBuf, len: usize },

    /// Too many values to describe in a 32-bit count header.
    #[error("Cannot write {len} values with a 32-bit count header")]
    TooLarge { len: usize },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl LoadError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// Whether the source data itself is malformed (as opposed to unreadable).
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::MissingHeader { .. }
                | Self::NegativeCount { .. }
                | Self::LengthMismatch { .. }
                | Self::TrailingBytes { .. }
        )
    }
}
