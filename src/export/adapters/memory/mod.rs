//! In-memory adapter implementations.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! unit testing and for hosts that supply their own data in-process.

mod completion;
mod editor;
mod filesystem;

pub use completion::ScriptedCompletionModel;
pub use editor::InMemoryEditor;
pub use filesystem::InMemoryFilesystem;
