//! Storage-specific errors raised while opening the asset root.

use std::path::PathBuf;

/// Errors originating from the filesystem storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The configured root could not be inspected.
    #[error("failed to open asset root {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configured root exists but is not a directory.
    #[error("asset root {} is not a directory", path.display())]
    NotADirectory { path: PathBuf },
}
