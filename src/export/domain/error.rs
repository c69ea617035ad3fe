//! Domain error types for transcript rendering.

use thiserror::Error;

/// A `minijinja` template could not be rendered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to render {template}: {reason}")]
pub struct RenderError {
    /// Name of the template that failed.
    pub template: &'static str,
    /// Rendering failure reason.
    pub reason: String,
}

impl RenderError {
    /// Creates a render error from a template engine failure.
    #[must_use]
    pub fn new(template: &'static str, error: &minijinja::Error) -> Self {
        Self {
            template,
            reason: error.to_string(),
        }
    }
}
