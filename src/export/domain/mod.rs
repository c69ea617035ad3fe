//! Domain types for the session export command.
//!
//! This module contains pure types and text transformations with no
//! infrastructure dependencies: the chat history model, transcript
//! rendering, code-fence annotation, and output path resolution.

mod code_fence;
mod content;
mod document;
mod error;
mod language;
mod location;
mod message;
mod options;
mod prompt;
mod role;
mod slash_command;
mod timestamp;

pub use code_fence::{annotate_code_fences, contains_code_fence};
pub use content::{ContentPart, ImagePart, TextPart};
pub use document::{ExportedSession, UNKNOWN_MODEL, blockquote, render_transcript};
pub use error::RenderError;
pub use language::{LanguageInfo, language_for_filepath};
pub use location::{OutputDirectory, transcript_path};
pub use message::ChatMessage;
pub use options::ExportOptions;
pub use prompt::{completion_input, description_prompt, title_prompt};
pub use role::{ParseRoleError, Role};
pub use slash_command::{
    EXPORT_COMMAND, OUTPUT_DIR_PARAMETER, SlashCommand, SlashCommandError, SlashCommandInvocation,
};
pub use timestamp::{SESSION_FILE_SUFFIX, basic_timestamp, exported_label, session_file_name};
