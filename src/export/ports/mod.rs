//! Port trait definitions for the export command.
//!
//! Ports define the capabilities the export command requires from its
//! host: a completion model, the editor, and the local filesystem.
//! Adapters implement these ports.

pub mod completion;
pub mod editor;
pub mod filesystem;

pub use completion::{CompletionError, CompletionModel, CompletionResult};
pub use editor::{EditorError, EditorHost, EditorResult};
pub use filesystem::Filesystem;
