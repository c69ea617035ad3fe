//! Editor host for running the export outside an editor.
//!
//! Files are written straight to disk. There is no buffer to show, so
//! opening a file only records it in the log.

use async_trait::async_trait;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use std::path::{Path, PathBuf};

use crate::export::ports::{EditorError, EditorHost, EditorResult};

/// Name of the application data directory under the user's home.
pub const APPLICATION_DIR_NAME: &str = ".continue";

/// Editor host writing to the local filesystem.
#[derive(Debug, Clone)]
pub struct HeadlessEditor {
    application_dir: Option<PathBuf>,
    workspace_dirs: Vec<PathBuf>,
}

impl HeadlessEditor {
    /// Creates a host using `~/.continue` as the application directory and
    /// no workspace folders.
    #[must_use]
    pub fn new() -> Self {
        Self {
            application_dir: dirs::home_dir().map(|home| home.join(APPLICATION_DIR_NAME)),
            workspace_dirs: Vec::new(),
        }
    }

    /// Overrides the application directory.
    #[must_use]
    pub fn with_application_dir(mut self, application_dir: impl Into<PathBuf>) -> Self {
        self.application_dir = Some(application_dir.into());
        self
    }

    /// Sets the workspace folders, first folder first.
    #[must_use]
    pub fn with_workspace_dirs(mut self, dirs: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.workspace_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for HeadlessEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EditorHost for HeadlessEditor {
    async fn application_dir(&self) -> EditorResult<PathBuf> {
        self.application_dir
            .clone()
            .ok_or_else(|| EditorError::unavailable("home directory is not known"))
    }

    async fn workspace_dirs(&self) -> EditorResult<Vec<PathBuf>> {
        Ok(self.workspace_dirs.clone())
    }

    async fn write_file(&self, path: &Path, contents: &str) -> EditorResult<()> {
        let file_name = path
            .file_name()
            .ok_or_else(|| EditorError::unavailable(format!("{} has no file name", path.display())))?;
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let directory = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|error| EditorError::io(parent, error))?;
        directory
            .write(file_name, contents)
            .map_err(|error| EditorError::io(path, error))
    }

    async fn open_file(&self, path: &Path) -> EditorResult<()> {
        tracing::info!(path = %path.display(), "transcript ready to open");
        Ok(())
    }
}
