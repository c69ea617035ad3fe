//! Participant roles for chat history messages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The participant that authored a chat message.
///
/// # Examples
///
/// ```
/// use session_export::export::domain::Role;
///
/// let role: Role = "Assistant".parse().expect("known role");
/// assert_eq!(role, Role::Assistant);
/// assert_eq!(role.to_string(), "assistant");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A message typed by the user.
    User,
    /// A reply produced by the assistant.
    Assistant,
    /// A system prompt or instruction.
    System,
    /// Output returned by a tool invocation.
    Tool,
}

impl Role {
    /// Returns the canonical lower-case name of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
            Self::Tool => "tool",
        }
    }

    /// Returns the section heading used when the role is rendered in a
    /// transcript.
    ///
    /// Only user messages are labelled as such; every other participant is
    /// shown as the assistant.
    #[must_use]
    pub const fn transcript_label(self) -> &'static str {
        match self {
            Self::User => "_User_",
            Self::Assistant | Self::System | Self::Tool => "_Assistant_",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known role.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown message role '{0}'")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            "system" => Ok(Self::System),
            "tool" => Ok(Self::Tool),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}
