//! In-memory editor host recording writes and opened files.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use crate::export::ports::{EditorError, EditorHost, EditorResult};

/// Thread-safe editor host that keeps written files in memory.
#[derive(Debug, Clone)]
pub struct InMemoryEditor {
    application_dir: PathBuf,
    workspace_dirs: Vec<PathBuf>,
    fail_writes: bool,
    state: Arc<RwLock<EditorState>>,
}

#[derive(Debug, Default)]
struct EditorState {
    files: BTreeMap<PathBuf, String>,
    opened: Vec<PathBuf>,
    workspace_requests: usize,
}

impl InMemoryEditor {
    /// Creates an editor with the given application directory and no open
    /// workspace folders.
    #[must_use]
    pub fn new(application_dir: impl Into<PathBuf>) -> Self {
        Self {
            application_dir: application_dir.into(),
            workspace_dirs: Vec::new(),
            fail_writes: false,
            state: Arc::default(),
        }
    }

    /// Sets the open workspace folders.
    #[must_use]
    pub fn with_workspace_dirs(mut self, dirs: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.workspace_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Makes every write fail, for exercising error propagation.
    #[must_use]
    pub const fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Returns the contents written to `path`, if any.
    #[must_use]
    pub fn file(&self, path: &Path) -> Option<String> {
        self.read_state().files.get(path).cloned()
    }

    /// Returns every written path in sorted order.
    #[must_use]
    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.read_state().files.keys().cloned().collect()
    }

    /// Returns the files opened so far, in order.
    #[must_use]
    pub fn opened(&self) -> Vec<PathBuf> {
        self.read_state().opened.clone()
    }

    /// Returns how many times the workspace folders were requested.
    #[must_use]
    pub fn workspace_requests(&self) -> usize {
        self.read_state().workspace_requests
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, EditorState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, EditorState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl EditorHost for InMemoryEditor {
    async fn application_dir(&self) -> EditorResult<PathBuf> {
        Ok(self.application_dir.clone())
    }

    async fn workspace_dirs(&self) -> EditorResult<Vec<PathBuf>> {
        self.write_state().workspace_requests += 1;
        Ok(self.workspace_dirs.clone())
    }

    async fn write_file(&self, path: &Path, contents: &str) -> EditorResult<()> {
        if self.fail_writes {
            return Err(EditorError::unavailable(format!(
                "write rejected for {}",
                path.display()
            )));
        }
        self.write_state()
            .files
            .insert(path.to_path_buf(), contents.to_owned());
        Ok(())
    }

    async fn open_file(&self, path: &Path) -> EditorResult<()> {
        self.write_state().opened.push(path.to_path_buf());
        Ok(())
    }
}
