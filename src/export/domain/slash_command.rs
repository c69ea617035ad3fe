//! The export slash command and a reader for its invocation text.
//!
//! The invocation is free-form chat input. Only `key=value` words are
//! picked out as arguments; every other word is kept as free text and
//! never causes an error. Backslashes are part of the text, so Windows
//! style paths such as `.\exports` survive unquoted.

use std::collections::BTreeMap;
use thiserror::Error;

/// Name of the argument carrying the output directory.
pub const OUTPUT_DIR_PARAMETER: &str = "output_dir";

/// A command offered in the chat input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlashCommand {
    name: &'static str,
    description: &'static str,
}

impl SlashCommand {
    /// Returns the command name without the leading slash.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the description shown in command pickers.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Returns `true` when `invocation` calls this command.
    #[must_use]
    pub fn matches(&self, invocation: &SlashCommandInvocation) -> bool {
        invocation.command() == self.name
    }
}

/// The session export command.
pub const EXPORT_COMMAND: SlashCommand = SlashCommand {
    name: "greg",
    description: "Export the current chat session to markdown",
};

/// Errors for text that is not a slash command at all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SlashCommandError {
    /// Input was empty.
    #[error("slash command input cannot be empty")]
    EmptyInput,

    /// Input does not start with `/`.
    #[error("slash commands must start with '/'")]
    MissingLeadingSlash,

    /// The word after `/` is not a command name.
    #[error("invalid command name '{0}'")]
    InvalidCommandName(String),
}

/// A slash command as typed by the user, e.g. `/greg output_dir=".\notes"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlashCommandInvocation {
    command: String,
    arguments: BTreeMap<String, String>,
    free_text: Vec<String>,
}

impl SlashCommandInvocation {
    /// Reads an invocation.
    ///
    /// Words are split on whitespace outside quotes. A word of the form
    /// `key=value` with a plain identifier key becomes an argument (keys are
    /// lower-cased, a later repeat wins); anything else is free text. Inside
    /// `'` or `"` quotes a backslash only escapes the closing quote or
    /// another backslash. An unclosed quote runs to the end of the input.
    ///
    /// # Errors
    ///
    /// Returns [`SlashCommandError`] when the input is blank or does not
    /// start with `/<name>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use session_export::export::domain::SlashCommandInvocation;
    ///
    /// let invocation = SlashCommandInvocation::parse(r#"/Greg please output_dir=".\my notes""#)
    ///     .expect("starts with a command");
    /// assert_eq!(invocation.command(), "greg");
    /// assert_eq!(invocation.argument("output_dir"), Some(r".\my notes"));
    /// assert_eq!(invocation.free_text(), ["please"]);
    /// ```
    pub fn parse(raw_input: &str) -> Result<Self, SlashCommandError> {
        let mut words = split_words(raw_input).into_iter();
        let head = words.next().ok_or(SlashCommandError::EmptyInput)?;
        let name = head
            .strip_prefix('/')
            .ok_or(SlashCommandError::MissingLeadingSlash)?;
        if !is_identifier(name) {
            return Err(SlashCommandError::InvalidCommandName(name.to_owned()));
        }

        let mut arguments = BTreeMap::new();
        let mut free_text = Vec::new();
        for word in words {
            match word.split_once('=') {
                Some((key, value)) if is_identifier(key) => {
                    arguments.insert(key.to_ascii_lowercase(), value.to_owned());
                }
                _ => free_text.push(word),
            }
        }

        Ok(Self {
            command: name.to_ascii_lowercase(),
            arguments,
            free_text,
        })
    }

    /// Returns the lower-cased command name.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Returns the value of the named argument.
    #[must_use]
    pub fn argument(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).map(String::as_str)
    }

    /// Returns all `key=value` arguments.
    #[must_use]
    pub const fn arguments(&self) -> &BTreeMap<String, String> {
        &self.arguments
    }

    /// Returns the words that are not arguments, in order.
    #[must_use]
    pub fn free_text(&self) -> &[String] {
        &self.free_text
    }
}

fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut quote: Option<char> = None;
    let mut characters = input.chars().peekable();

    while let Some(character) = characters.next() {
        match quote {
            Some(open) if character == open => quote = None,
            Some(open) if character == '\\' => match characters.peek() {
                Some(&next) if next == open || next == '\\' => {
                    current.push(next);
                    characters.next();
                }
                _ => current.push(character),
            },
            Some(_) => current.push(character),
            None if character == '"' || character == '\'' => {
                quote = Some(character);
                quoted = true;
            }
            None if character.is_whitespace() => {
                if quoted || !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
                quoted = false;
            }
            None => current.push(character),
        }
    }

    if quoted || !current.is_empty() {
        words.push(current);
    }
    words
}

fn is_identifier(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|character| character.is_ascii_alphanumeric() || matches!(character, '-' | '_'))
}
