//! Filesystem adapter backed by `cap-std` ambient directory handles.

use cap_std::ambient_authority;
use cap_std::fs::Dir;
use std::io;
use std::path::{Path, PathBuf};

use crate::export::ports::Filesystem;

/// The process's real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Creates the adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn dir_exists(&self, path: &Path) -> bool {
        Dir::open_ambient_dir(path, ambient_authority()).is_ok()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        Dir::create_ambient_dir_all(path, ambient_authority())
    }
}
