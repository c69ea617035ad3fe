//! In-memory filesystem tracking which directories exist.

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use crate::export::ports::Filesystem;

/// Filesystem double holding a set of existing directories.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFilesystem {
    home_dir: Option<PathBuf>,
    state: Arc<RwLock<FilesystemState>>,
}

#[derive(Debug, Default)]
struct FilesystemState {
    directories: BTreeSet<PathBuf>,
    created: Vec<PathBuf>,
}

impl InMemoryFilesystem {
    /// Creates an empty filesystem without a home directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the home directory.
    #[must_use]
    pub fn with_home_dir(mut self, home_dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home_dir.into());
        self
    }

    /// Marks `path` as an existing directory.
    #[must_use]
    pub fn with_existing_dir(self, path: impl Into<PathBuf>) -> Self {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .directories
            .insert(path.into());
        self
    }

    /// Returns the directories created through [`Filesystem::create_dir_all`].
    #[must_use]
    pub fn created(&self) -> Vec<PathBuf> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .created
            .clone()
    }
}

impl Filesystem for InMemoryFilesystem {
    fn home_dir(&self) -> Option<PathBuf> {
        self.home_dir.clone()
    }

    fn dir_exists(&self, path: &Path) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .directories
            .contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        for ancestor in path.ancestors().filter(|ancestor| !ancestor.as_os_str().is_empty()) {
            state.directories.insert(ancestor.to_path_buf());
        }
        state.created.push(path.to_path_buf());
        Ok(())
    }
}
