//! Adapter implementations of the export ports.
//!
//! # Available Adapters
//!
//! - [`memory`]: in-memory editor, filesystem and scripted completion model
//! - [`local`]: the real filesystem via `cap-std` and a headless editor host
//!   for running outside an editor

pub mod local;
pub mod memory;
