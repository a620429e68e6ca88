//! Error types for hosts-store

use std::path::PathBuf;

/// Result type for hosts-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hosts-store operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse group store at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Failed to serialize group store for {path}: {message}")]
    ConfigSerialize { path: PathBuf, message: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error("Could not determine the home directory")]
    NoHomeDir,

    #[error("group '{name}' not found")]
    GroupNotFound { name: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
