//! Shared test helpers for in-memory export integration tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use session_export::export::{
    adapters::memory::{InMemoryEditor, InMemoryFilesystem, ScriptedCompletionModel},
    domain::ChatMessage,
    services::SessionExportService,
};
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Application directory reported by the test editor.
pub const APPLICATION_DIR: &str = "/home/dev/.continue";
/// Home directory reported by the test filesystem.
pub const HOME_DIR: &str = "/home/dev";
/// Title returned by the scripted model.
pub const TITLE: &str = "Reading files in Rust";
/// Description returned by the scripted model.
pub const DESCRIPTION: &str = "The user asked how to read a file and got an answer.";

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Returns the frozen instant in the local time zone.
    pub fn local_now(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.local_now()
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Service type wired to in-memory adapters.
pub type InMemoryExportService =
    SessionExportService<InMemoryEditor, ScriptedCompletionModel, InMemoryFilesystem, FixedClock>;

/// Export service together with handles on its adapters.
pub struct Harness {
    /// Editor double.
    pub editor: Arc<InMemoryEditor>,
    /// Scripted model.
    pub model: Arc<ScriptedCompletionModel>,
    /// Filesystem double.
    pub filesystem: Arc<InMemoryFilesystem>,
    /// Frozen clock.
    pub clock: FixedClock,
    /// Service under test.
    pub service: InMemoryExportService,
}

impl Harness {
    /// Wires a service from the given adapters.
    pub fn new(
        editor: InMemoryEditor,
        model: ScriptedCompletionModel,
        filesystem: InMemoryFilesystem,
    ) -> Self {
        let editor = Arc::new(editor);
        let model = Arc::new(model);
        let filesystem = Arc::new(filesystem);
        let clock = frozen_clock();
        let service = SessionExportService::new(
            Arc::clone(&editor),
            Arc::clone(&model),
            Arc::clone(&filesystem),
            Arc::new(clock),
        );
        Self {
            editor,
            model,
            filesystem,
            clock,
            service,
        }
    }
}

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Returns a clock frozen at 2024-03-09 05:05:01 UTC.
pub fn frozen_clock() -> FixedClock {
    FixedClock(
        Utc.with_ymd_and_hms(2024, 3, 9, 5, 5, 1)
            .single()
            .unwrap_or_default(),
    )
}

/// Provides a model scripted with a title and a description.
#[fixture]
pub fn model() -> ScriptedCompletionModel {
    ScriptedCompletionModel::new("gpt-4o")
        .with_response(TITLE)
        .with_response(DESCRIPTION)
}

/// Provides a harness with default adapters.
#[fixture]
pub fn harness(model: ScriptedCompletionModel) -> Harness {
    Harness::new(
        InMemoryEditor::new(APPLICATION_DIR),
        model,
        InMemoryFilesystem::new().with_home_dir(HOME_DIR),
    )
}

/// Provides a short conversation ending with the `/greg` command.
#[fixture]
pub fn history() -> Vec<ChatMessage> {
    vec![
        ChatMessage::user("You are a Rust expert."),
        ChatMessage::user("How do I read a file?\n```main.rs\nfn main() {}\n```"),
        ChatMessage::assistant("Use `std::fs::read_to_string`."),
        ChatMessage::user("/greg"),
    ]
}
