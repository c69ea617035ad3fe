//! Editor-integration port.
//!
//! The host editor owns the application data directory, knows which
//! workspace folders are open, and performs the actual file write so that
//! open buffers stay in sync.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Result type for editor host operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// Capabilities the export command needs from the host editor.
#[async_trait]
pub trait EditorHost: Send + Sync {
    /// Returns the application data directory, used when no output
    /// directory is configured.
    async fn application_dir(&self) -> EditorResult<PathBuf>;

    /// Returns the open workspace folders, first folder first.
    async fn workspace_dirs(&self) -> EditorResult<Vec<PathBuf>>;

    /// Writes `contents` to `path`, replacing any existing file.
    async fn write_file(&self, path: &Path, contents: &str) -> EditorResult<()>;

    /// Opens `path` in the editor.
    async fn open_file(&self, path: &Path) -> EditorResult<()>;
}

/// Errors returned by editor host adapters.
#[derive(Debug, Clone, Error)]
pub enum EditorError {
    /// The editor could not satisfy the request.
    #[error("editor request failed: {0}")]
    Unavailable(String),

    /// An I/O operation failed for `path`.
    #[error("editor I/O failed for {path}: {source}")]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<std::io::Error>,
    },
}

impl EditorError {
    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Wraps an I/O error for `path`.
    #[must_use]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source: Arc::new(source),
        }
    }
}
