//! Export of a chat session to a markdown transcript.
//!
//! The `/greg` slash command titles and summarises the conversation with
//! the active completion model, renders every message except the invoking
//! command as a blockquoted markdown section, and writes the result to a
//! timestamped file in the configured output directory.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types and text transformations ([`domain::ChatMessage`],
//!   [`domain::ExportedSession`], [`domain::OutputDirectory`], etc.)
//! - **Ports**: Capabilities required from the host
//!   ([`ports::EditorHost`], [`ports::CompletionModel`], [`ports::Filesystem`])
//! - **Adapters**: In-memory and local implementations of the ports
//! - **Services**: [`services::SessionExportService`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use mockable::DefaultClock;
//! use session_export::export::{
//!     adapters::memory::{
//!         InMemoryEditor, InMemoryFilesystem, ScriptedCompletionModel,
//!     },
//!     domain::{ChatMessage, ExportOptions},
//!     services::SessionExportService,
//! };
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let editor = Arc::new(InMemoryEditor::new("/home/dev/.continue"));
//! let model = Arc::new(
//!     ScriptedCompletionModel::new("gpt-4o")
//!         .with_response("Reading files in Rust")
//!         .with_response("The user asked how to read a file."),
//! );
//! let service = SessionExportService::new(
//!     Arc::clone(&editor),
//!     model,
//!     Arc::new(InMemoryFilesystem::new()),
//!     Arc::new(DefaultClock),
//! );
//!
//! let history = [
//!     ChatMessage::user("How do I read a file?"),
//!     ChatMessage::assistant("Use std::fs::read_to_string."),
//!     ChatMessage::user("/greg"),
//! ];
//! let outcome = service.run(&history, &ExportOptions::new()).await?;
//! assert!(editor.file(outcome.path()).is_some());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
