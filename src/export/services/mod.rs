//! Application services for the export command.

mod session_export;

pub use session_export::{
    ExportOutcome, SessionExportError, SessionExportResult, SessionExportService,
};
