//! A single entry of the chat history handed to the export command.

use serde::{Deserialize, Serialize};

use super::{ContentPart, Role};

/// An immutable chat history entry.
///
/// # Examples
///
/// ```
/// use session_export::export::domain::{ChatMessage, ContentPart, Role};
///
/// let message = ChatMessage::new(
///     Role::User,
///     vec![
///         ContentPart::text("What is in this screenshot?"),
///         ContentPart::image("data:image/png;base64,AAAA"),
///     ],
/// );
///
/// assert_eq!(message.text(), "What is in this screenshot?");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    role: Role,
    content: Vec<ContentPart>,
}

impl ChatMessage {
    /// Creates a message from its content parts.
    #[must_use]
    pub const fn new(role: Role, content: Vec<ContentPart>) -> Self {
        Self { role, content }
    }

    /// Creates a plain-text user message.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, vec![ContentPart::text(text)])
    }

    /// Creates a plain-text assistant message.
    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, vec![ContentPart::text(text)])
    }

    /// Returns the message role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the content parts.
    #[must_use]
    pub fn content(&self) -> &[ContentPart] {
        &self.content
    }

    /// Returns the text of the message with attachments stripped.
    ///
    /// Text parts are joined with newlines; a message made only of
    /// attachments yields an empty string.
    #[must_use]
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(ContentPart::as_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Returns the message content flattened for use inside a prompt.
    ///
    /// Text parts are kept verbatim and attachments are rendered as their
    /// JSON form, all separated by single spaces.
    #[must_use]
    pub fn prompt_text(&self) -> String {
        self.content
            .iter()
            .map(|part| match part {
                ContentPart::Text(text) => text.text.clone(),
                ContentPart::Image(_) => serde_json::to_string(part).unwrap_or_default(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
