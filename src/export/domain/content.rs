//! Content part types making up a chat message.
//!
//! A message is either plain text or a mix of text and attachments such as
//! images. Only the text survives into an exported transcript.

use serde::{Deserialize, Serialize};

/// A single content part within a chat message.
///
/// # Serialisation
///
/// Content parts are serialised with a `type` tag field:
///
/// ```json
/// { "type": "text", "text": "Hello, world!" }
/// { "type": "image_url", "url": "data:image/png;base64,..." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Plain text content.
    Text(TextPart),
    /// An image attached to the message.
    #[serde(rename = "image_url")]
    Image(ImagePart),
}

impl ContentPart {
    /// Creates a text content part.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(TextPart::new(text))
    }

    /// Creates an image content part.
    #[must_use]
    pub fn image(url: impl Into<String>) -> Self {
        Self::Image(ImagePart::new(url))
    }

    /// Returns the text of a text part, or `None` for attachments.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(part) => Some(part.text.as_str()),
            Self::Image(_) => None,
        }
    }
}

/// Text content within a message.
///
/// # Examples
///
/// ```
/// use session_export::export::domain::TextPart;
///
/// let text = TextPart::new("Hello!");
/// assert!(!text.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPart {
    /// The text content.
    pub text: String,
}

impl TextPart {
    /// Creates a new text part.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns `true` if the text content is empty or whitespace-only.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// An image attachment, referenced by URL or data URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePart {
    /// Location of the image data.
    pub url: String,
}

impl ImagePart {
    /// Creates a new image part.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}
