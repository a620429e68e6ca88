//! Error types for hosts-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from hosts-ops
    #[error(transparent)]
    Ops(#[from] hosts_ops::Error),

    /// Error from hosts-store
    #[error(transparent)]
    Store(#[from] hosts_store::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Interactive prompt error
    #[error("Interactive prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}
