//! Export configuration.

use serde::{Deserialize, Serialize};

use super::{OUTPUT_DIR_PARAMETER, SlashCommandInvocation};

/// Options controlling where a transcript is written.
///
/// Hosts usually load these from their JSON configuration:
///
/// ```
/// use session_export::export::domain::ExportOptions;
///
/// let options: ExportOptions =
///     serde_json::from_str(r#"{ "outputDir": "~/notes" }"#).expect("valid options");
/// assert_eq!(options.output_dir(), Some("~/notes"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    #[serde(default, alias = "output_dir", skip_serializing_if = "Option::is_none")]
    output_dir: Option<String>,
}

impl ExportOptions {
    /// Creates options that write to the editor's application directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configured output directory.
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<String>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    /// Applies the arguments of a slash-command invocation on top of these
    /// options.
    ///
    /// An explicit `output_dir=` argument replaces the configured directory;
    /// otherwise the configured value is kept.
    ///
    /// ```
    /// use session_export::export::domain::{ExportOptions, SlashCommandInvocation};
    ///
    /// let configured = ExportOptions::new().with_output_dir("~/notes");
    /// let plain = SlashCommandInvocation::parse("/greg").expect("command");
    /// let explicit = SlashCommandInvocation::parse("/greg output_dir=./out").expect("command");
    ///
    /// assert_eq!(configured.overridden_by(&plain).output_dir(), Some("~/notes"));
    /// assert_eq!(configured.overridden_by(&explicit).output_dir(), Some("./out"));
    /// ```
    #[must_use]
    pub fn overridden_by(&self, invocation: &SlashCommandInvocation) -> Self {
        invocation
            .argument(OUTPUT_DIR_PARAMETER)
            .map_or_else(|| self.clone(), |output_dir| Self::new().with_output_dir(output_dir))
    }

    /// Returns the configured output directory.
    ///
    /// Blank values count as unset.
    #[must_use]
    pub fn output_dir(&self) -> Option<&str> {
        self.output_dir
            .as_deref()
            .filter(|output_dir| !output_dir.trim().is_empty())
    }
}
