//! Markdown rendering of an exported chat session.

use minijinja::{Environment, context};
use serde::{Deserialize, Serialize};

use super::{ChatMessage, RenderError, Role, annotate_code_fences, contains_code_fence};

/// Model name shown when the completion model does not report one.
pub const UNKNOWN_MODEL: &str = "Unknown Model";

const HEADER_TEMPLATE_NAME: &str = "session header";
const HEADER_TEMPLATE: &str = "# {{ title }}\n\n\
### Session transcript\n\n\
<small>Exported: {{ exported_at }}</small>\n\n\
#### Model: `{{ model }}`\n\n\
#### Description\n\n\
{{ description }}\n\n";

const BLOCKQUOTE_PREFIX: &str = "> ";

/// A write-once markdown document describing one chat session.
///
/// # Examples
///
/// ```
/// use session_export::export::domain::{ChatMessage, ExportedSession};
///
/// let session = ExportedSession::new("Fixing the build", "We fixed the build.")
///     .with_model("gpt-4o")
///     .with_exported_at("Mar 09, 2024, 07:05:01 UTC+00:00")
///     .with_messages(&[ChatMessage::user("It fails"), ChatMessage::assistant("Try this")]);
///
/// let markdown = session.to_markdown().expect("header renders");
/// assert!(markdown.starts_with("# Fixing the build\n\n### Session transcript"));
/// assert!(markdown.contains("#### _Assistant_\n\n> Try this"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedSession {
    title: String,
    description: String,
    model: String,
    exported_at: String,
    transcript: String,
}

impl ExportedSession {
    /// Creates an empty session document with the generated title and
    /// description.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            model: UNKNOWN_MODEL.to_owned(),
            exported_at: String::new(),
            transcript: String::new(),
        }
    }

    /// Sets the model identifier. Blank names keep the unknown-model label.
    #[must_use]
    pub fn with_model(mut self, model: &str) -> Self {
        if !model.trim().is_empty() {
            model.clone_into(&mut self.model);
        }
        self
    }

    /// Sets the human-readable export timestamp.
    #[must_use]
    pub fn with_exported_at(mut self, exported_at: impl Into<String>) -> Self {
        self.exported_at = exported_at.into();
        self
    }

    /// Renders the given messages as the transcript body.
    ///
    /// Every message passed here is rendered; callers drop the invoking
    /// command message beforehand.
    #[must_use]
    pub fn with_messages(mut self, messages: &[ChatMessage]) -> Self {
        self.transcript = render_transcript(messages);
        self
    }

    /// Returns the generated title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the generated description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the model identifier shown in the header.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Renders the complete markdown document.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the header template fails to render.
    pub fn to_markdown(&self) -> Result<String, RenderError> {
        let mut environment = Environment::new();
        environment.set_keep_trailing_newline(true);
        let header = environment
            .render_str(
                HEADER_TEMPLATE,
                context! {
                    title => self.title,
                    exported_at => self.exported_at,
                    model => self.model,
                    description => self.description,
                },
            )
            .map_err(|error| RenderError::new(HEADER_TEMPLATE_NAME, &error))?;
        Ok(header + &self.transcript)
    }
}

/// Renders messages as blockquoted markdown sections.
///
/// The first message is folded into a collapsible "Priming Prompt" block.
/// Code fences in user messages are annotated before quoting.
#[must_use]
pub fn render_transcript(messages: &[ChatMessage]) -> String {
    let mut transcript = String::new();
    for (index, message) in messages.iter().enumerate() {
        let quoted = blockquote(&section_text(message));
        let label = message.role().transcript_label();
        if index == 0 {
            transcript.push_str(&format!(
                "<details><summary>Priming Prompt</summary>\n\n#### {label}\n\n{quoted}\n\n</details>"
            ));
        } else {
            transcript.push_str(&format!("\n\n#### {label}\n\n{quoted}"));
        }
    }
    transcript
}

fn section_text(message: &ChatMessage) -> String {
    let text = message.text();
    if message.role() == Role::User && contains_code_fence(&text) {
        annotate_code_fences(&text)
    } else {
        text
    }
}

/// Prefixes every line of `text` with a markdown blockquote marker.
///
/// A trailing newline produces a final, empty quoted line.
#[must_use]
pub fn blockquote(text: &str) -> String {
    text.split('\n')
        .map(|line| format!("{BLOCKQUOTE_PREFIX}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
