//! Output directory resolution.
//!
//! The configured directory may be anchored at the user's home (`~`) or at
//! the first workspace folder (`.`, `./`, `.\`). Anchors are substituted by
//! plain string concatenation: the remainder after the marker is appended
//! to the anchor as-is.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

const HOME_MARKER: &str = "~";
const WORKSPACE_MARKER: &str = ".";

/// A configured output directory, classified by its anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDirectory {
    /// Path beginning with `~`; holds the text after the marker.
    HomeRelative(String),
    /// `.` or a path beginning with `./` or `.\`; holds the text after the
    /// leading dot.
    WorkspaceRelative(String),
    /// Any other path, used verbatim.
    Literal(PathBuf),
}

impl OutputDirectory {
    /// Classifies a configured directory string.
    ///
    /// # Examples
    ///
    /// ```
    /// use session_export::export::domain::OutputDirectory;
    ///
    /// assert_eq!(
    ///     OutputDirectory::parse("~/notes"),
    ///     OutputDirectory::HomeRelative("/notes".to_owned()),
    /// );
    /// assert_eq!(
    ///     OutputDirectory::parse("./exports"),
    ///     OutputDirectory::WorkspaceRelative("/exports".to_owned()),
    /// );
    /// ```
    #[must_use]
    pub fn parse(configured: &str) -> Self {
        if let Some(remainder) = configured.strip_prefix(HOME_MARKER) {
            return Self::HomeRelative(remainder.to_owned());
        }
        let workspace_relative = configured == WORKSPACE_MARKER
            || configured.starts_with("./")
            || configured.starts_with(".\\");
        match configured.strip_prefix(WORKSPACE_MARKER) {
            Some(remainder) if workspace_relative => Self::WorkspaceRelative(remainder.to_owned()),
            _ => Self::Literal(PathBuf::from(configured)),
        }
    }

    /// Returns `true` when resolution needs the workspace folders.
    #[must_use]
    pub const fn needs_workspace(&self) -> bool {
        matches!(self, Self::WorkspaceRelative(_))
    }

    /// Returns `true` when resolution needs the home directory.
    #[must_use]
    pub const fn needs_home(&self) -> bool {
        matches!(self, Self::HomeRelative(_))
    }

    /// Resolves the directory against its anchor.
    ///
    /// `home` is used for home-relative paths; the first entry of
    /// `workspace_dirs`, or the empty string when there is none, is used for
    /// workspace-relative paths. Literal paths ignore both.
    #[must_use]
    pub fn resolve(&self, home: Option<&Path>, workspace_dirs: &[PathBuf]) -> PathBuf {
        match self {
            Self::HomeRelative(remainder) => {
                concat_anchor(home.unwrap_or_else(|| Path::new("")), remainder)
            }
            Self::WorkspaceRelative(remainder) => {
                let anchor = workspace_dirs
                    .first()
                    .map_or_else(|| Path::new(""), PathBuf::as_path);
                concat_anchor(anchor, remainder)
            }
            Self::Literal(path) => path.clone(),
        }
    }
}

fn concat_anchor(anchor: &Path, remainder: &str) -> PathBuf {
    let mut joined = OsString::from(anchor.as_os_str());
    joined.push(remainder);
    PathBuf::from(joined)
}

/// Returns the full path of a transcript file inside `directory`.
#[must_use]
pub fn transcript_path(directory: &Path, file_name: &str) -> PathBuf {
    directory.join(file_name)
}
