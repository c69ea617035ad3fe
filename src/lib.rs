//! Session export: save a chat assistant conversation as markdown.
//!
//! This crate implements the `/greg` slash command of a chat-based IDE
//! assistant. The command turns the conversation history into a titled,
//! summarised markdown transcript and writes it to disk through the host
//! editor.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure transcript logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the editor, model, and filesystem
//! - **Adapters**: Concrete implementations of ports (in-memory, local disk)
//!
//! # Modules
//!
//! - [`export`]: Chat history model, transcript rendering, and the export service

pub mod export;
