//! Station source error types.

use std::path::PathBuf;

/// Errors that can occur when loading stations.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The station dump could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The station dump is not valid JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The station dump holds no station records at all
    #[error("no stations in {}", path.display())]
    Empty { path: PathBuf },
}
