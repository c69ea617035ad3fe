//! Adapters for the local machine.

mod editor;
mod filesystem;

pub use editor::{APPLICATION_DIR_NAME, HeadlessEditor};
pub use filesystem::LocalFilesystem;
