//! Filesystem port for output directory preparation.

use std::io;
use std::path::{Path, PathBuf};

/// Local filesystem queries needed before a transcript is written.
pub trait Filesystem: Send + Sync {
    /// Returns the current user's home directory, if known.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Returns `true` when `path` exists and is a directory.
    fn dir_exists(&self, path: &Path) -> bool;

    /// Creates `path` and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when creation fails.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}
