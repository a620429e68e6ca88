//! Error types for hosts-manager

/// Result type for hosts-manager operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hosts-manager operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Hosts-file format errors
    #[error(transparent)]
    Core(#[from] hosts_core::Error),

    /// Store loading, saving and lookup errors
    #[error(transparent)]
    Store(#[from] hosts_store::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No editor configured. Set $VISUAL or $EDITOR.")]
    EditorNotConfigured,

    #[error("Editor '{program}' failed: {message}")]
    Editor { program: String, message: String },

    /// An edited body failed the syntax check. `draft` is the rejected text.
    #[error("group '{name}' rejected: {source}")]
    InvalidGroup {
        name: String,
        draft: String,
        source: hosts_core::Error,
    },

    #[error("{}", missing_groups_message(.names))]
    GroupsNotFound { names: Vec<String> },
}

fn missing_groups_message(names: &[String]) -> String {
    match names {
        [name] => format!("group '{}' not found", name),
        _ => format!(
            "groups not found: {}",
            names
                .iter()
                .map(|n| format!("'{}'", n))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}
