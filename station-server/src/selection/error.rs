//! Selection store error types.

/// Errors that can occur when persisting the selected station.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    /// Could not create the directory holding the selection file
    #[error("failed to create selection directory: {0}")]
    CreateDir(#[source] std::io::Error),

    /// Could not write or remove the selection file
    #[error("failed to write selection file: {0}")]
    Write(#[source] std::io::Error),

    /// Could not serialize the selection
    #[error("failed to serialize selection: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("system time before unix epoch")]
    Clock,
}
