//! Storage error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading or writing the store file.
#[derive(Error, Debug)]
pub enum DbError {
    /// The store file could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file exists but is not a valid document.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory document could not be encoded.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl DbError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DbError::Io {
            path: path.into(),
            source,
        }
    }
}
