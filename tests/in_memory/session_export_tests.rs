//! In-memory integration tests for session export.

use std::path::{Path, PathBuf};

use crate::in_memory::helpers::{
    APPLICATION_DIR, DESCRIPTION, HOME_DIR, Harness, TITLE, harness, history, model, runtime,
};
use regex::Regex;
use rstest::rstest;
use session_export::export::{
    adapters::memory::{InMemoryEditor, InMemoryFilesystem, ScriptedCompletionModel},
    domain::{ChatMessage, ExportOptions, SlashCommandError, session_file_name},
    ports::{CompletionError, EditorError},
    services::SessionExportError,
};
use tokio::runtime::Runtime;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[rstest]
fn export_writes_and_opens_transcript(
    runtime: std::io::Result<Runtime>,
    harness: Harness,
    history: Vec<ChatMessage>,
) {
    let rt = runtime.expect("runtime should build");

    let outcome = rt
        .block_on(harness.service.export(&history, &ExportOptions::new()))
        .expect("export should succeed");

    assert_eq!(outcome.path().parent(), Some(Path::new(APPLICATION_DIR)));
    assert_eq!(
        harness.editor.file(outcome.path()).as_deref(),
        Some(outcome.document())
    );
    assert_eq!(harness.editor.opened(), vec![outcome.path().to_path_buf()]);
    assert_eq!(
        outcome.confirmation(),
        format!(
            "The session transcript has been saved to a markdown file at `{}`.",
            outcome.path().display()
        )
    );
}

#[rstest]
fn transcript_omits_invoking_command(
    runtime: std::io::Result<Runtime>,
    harness: Harness,
    history: Vec<ChatMessage>,
) {
    let rt = runtime.expect("runtime should build");

    let outcome = rt
        .block_on(harness.service.export(&history, &ExportOptions::new()))
        .expect("export should succeed");
    let document = outcome.document();

    assert_eq!(document.matches("\n#### _").count(), history.len() - 1);
    assert!(!document.contains("> /greg"));
    assert!(document.starts_with(&format!("# {TITLE}\n\n### Session transcript\n\n")));
    assert!(document.contains(&format!("#### Description\n\n{DESCRIPTION}\n\n")));
    assert!(document.contains("#### Model: `gpt-4o`"));
    assert!(document.contains("> ```rs\n> // main.rs\n> fn main() {}\n> ```"));
}

#[rstest]
fn file_name_is_derived_from_export_instant(
    runtime: std::io::Result<Runtime>,
    harness: Harness,
    history: Vec<ChatMessage>,
) {
    let rt = runtime.expect("runtime should build");
    let pattern = Regex::new(r"^\d{8}T\d{6}_session\.md$").expect("valid pattern");

    let outcome = rt
        .block_on(harness.service.export(&history, &ExportOptions::new()))
        .expect("export should succeed");
    let name = file_name(outcome.path());

    assert!(pattern.is_match(&name), "unexpected file name {name}");
    assert_eq!(name, session_file_name(&harness.clock.local_now()));
}

#[rstest]
fn prompts_use_history_after_priming_prompt(
    runtime: std::io::Result<Runtime>,
    harness: Harness,
    history: Vec<ChatMessage>,
) {
    let rt = runtime.expect("runtime should build");

    rt.block_on(harness.service.export(&history, &ExportOptions::new()))
        .expect("export should succeed");
    let prompts = harness.model.prompts();

    assert_eq!(prompts.len(), 2);
    assert!(prompts.iter().all(|prompt| prompt.ends_with("user: /greg")));
    assert!(prompts.iter().all(|prompt| !prompt.contains("Rust expert")));
    assert!(prompts.first().is_some_and(|prompt| prompt.contains("title")));
    assert!(prompts.get(1).is_some_and(|prompt| prompt.contains("description")));
}

#[rstest]
#[case("~/notes", "/home/dev/notes")]
#[case("~", HOME_DIR)]
#[case("/srv/chats", "/srv/chats")]
fn configured_directory_is_resolved_and_created(
    runtime: std::io::Result<Runtime>,
    harness: Harness,
    history: Vec<ChatMessage>,
    #[case] configured: &str,
    #[case] expected: &str,
) {
    let rt = runtime.expect("runtime should build");
    let options = ExportOptions::new().with_output_dir(configured);

    let outcome = rt
        .block_on(harness.service.export(&history, &options))
        .expect("export should succeed");

    assert_eq!(outcome.path().parent(), Some(Path::new(expected)));
    assert_eq!(harness.filesystem.created(), vec![PathBuf::from(expected)]);
    assert_eq!(harness.editor.workspace_requests(), 0);
}

#[rstest]
#[case("./exports", "/work/api/exports")]
#[case(".", "/work/api")]
fn workspace_relative_directory_uses_first_workspace(
    runtime: std::io::Result<Runtime>,
    model: ScriptedCompletionModel,
    history: Vec<ChatMessage>,
    #[case] configured: &str,
    #[case] expected: &str,
) {
    let rt = runtime.expect("runtime should build");
    let harness = Harness::new(
        InMemoryEditor::new(APPLICATION_DIR).with_workspace_dirs(["/work/api", "/work/web"]),
        model,
        InMemoryFilesystem::new(),
    );
    let options = ExportOptions::new().with_output_dir(configured);

    let outcome = rt
        .block_on(harness.service.export(&history, &options))
        .expect("export should succeed");

    assert_eq!(outcome.path().parent(), Some(Path::new(expected)));
    assert_eq!(harness.editor.workspace_requests(), 1);
}

#[rstest]
fn existing_directory_is_not_recreated(
    runtime: std::io::Result<Runtime>,
    model: ScriptedCompletionModel,
    history: Vec<ChatMessage>,
) {
    let rt = runtime.expect("runtime should build");
    let harness = Harness::new(
        InMemoryEditor::new(APPLICATION_DIR),
        model,
        InMemoryFilesystem::new().with_existing_dir(APPLICATION_DIR),
    );

    rt.block_on(harness.service.export(&history, &ExportOptions::new()))
        .expect("export should succeed");

    assert!(harness.filesystem.created().is_empty());
    assert_eq!(harness.editor.written_paths().len(), 1);
}

#[rstest]
#[case(ScriptedCompletionModel::new("gpt-4o").with_failure(CompletionError::request("rate limited")))]
#[case(
    ScriptedCompletionModel::new("gpt-4o")
        .with_response(TITLE)
        .with_failure(CompletionError::request("rate limited"))
)]
fn completion_failure_aborts_before_writing(
    runtime: std::io::Result<Runtime>,
    history: Vec<ChatMessage>,
    #[case] model: ScriptedCompletionModel,
) {
    let rt = runtime.expect("runtime should build");
    let harness = Harness::new(
        InMemoryEditor::new(APPLICATION_DIR),
        model,
        InMemoryFilesystem::new(),
    );

    let error = rt
        .block_on(harness.service.export(&history, &ExportOptions::new()))
        .expect_err("export should fail");

    assert!(matches!(
        error,
        SessionExportError::Completion(CompletionError::Request(ref reason)) if reason == "rate limited"
    ));
    assert!(harness.editor.written_paths().is_empty());
    assert!(harness.filesystem.created().is_empty());
}

#[rstest]
fn write_failure_propagates_and_skips_open(
    runtime: std::io::Result<Runtime>,
    model: ScriptedCompletionModel,
    history: Vec<ChatMessage>,
) {
    let rt = runtime.expect("runtime should build");
    let harness = Harness::new(
        InMemoryEditor::new(APPLICATION_DIR).with_failing_writes(),
        model,
        InMemoryFilesystem::new(),
    );

    let error = rt
        .block_on(harness.service.export(&history, &ExportOptions::new()))
        .expect_err("export should fail");

    assert!(matches!(
        error,
        SessionExportError::Editor(EditorError::Unavailable(_))
    ));
    assert!(harness.editor.opened().is_empty());
}

#[rstest]
fn home_relative_directory_requires_home(
    runtime: std::io::Result<Runtime>,
    model: ScriptedCompletionModel,
    history: Vec<ChatMessage>,
) {
    let rt = runtime.expect("runtime should build");
    let harness = Harness::new(
        InMemoryEditor::new(APPLICATION_DIR),
        model,
        InMemoryFilesystem::new(),
    );
    let options = ExportOptions::new().with_output_dir("~/notes");

    let error = rt
        .block_on(harness.service.export(&history, &options))
        .expect_err("export should fail");

    assert!(matches!(error, SessionExportError::HomeDirectoryUnavailable));
    assert!(harness.editor.written_paths().is_empty());
}

#[rstest]
fn model_output_is_trimmed_and_blank_model_is_unknown(
    runtime: std::io::Result<Runtime>,
    history: Vec<ChatMessage>,
) {
    let rt = runtime.expect("runtime should build");
    let harness = Harness::new(
        InMemoryEditor::new(APPLICATION_DIR),
        ScriptedCompletionModel::new("")
            .with_response("  Padded title \n")
            .with_response("\nPadded description.\n"),
        InMemoryFilesystem::new(),
    );

    let outcome = rt
        .block_on(harness.service.export(&history, &ExportOptions::new()))
        .expect("export should succeed");

    assert_eq!(outcome.session().title(), "Padded title");
    assert_eq!(outcome.session().description(), "Padded description.");
    assert!(outcome.document().contains("#### Model: `Unknown Model`"));
}

#[rstest]
fn history_with_only_the_command_renders_no_sections(
    runtime: std::io::Result<Runtime>,
    harness: Harness,
) {
    let rt = runtime.expect("runtime should build");

    let outcome = rt
        .block_on(
            harness
                .service
                .export(&[ChatMessage::user("/greg")], &ExportOptions::new()),
        )
        .expect("export should succeed");

    assert!(outcome.document().ends_with(&format!("{DESCRIPTION}\n\n")));
    assert!(!outcome.document().contains("<details>"));
}

fn workspace_harness(model: ScriptedCompletionModel) -> Harness {
    Harness::new(
        InMemoryEditor::new(APPLICATION_DIR).with_workspace_dirs(["/ws"]),
        model,
        InMemoryFilesystem::new().with_home_dir(HOME_DIR),
    )
}

fn with_command(mut history: Vec<ChatMessage>, command: &str) -> Vec<ChatMessage> {
    history.pop();
    history.push(ChatMessage::user(command));
    history
}

#[rstest]
#[case("/greg output_dir=\"~/chat logs\"", "/home/dev/chat logs")]
#[case(r#"/greg output_dir=".\out""#, r"/ws\out")]
#[case(r"/greg output_dir=.\out", r"/ws\out")]
#[case("/greg output_dir=./out", "/ws/out")]
fn run_takes_output_dir_from_invocation(
    runtime: std::io::Result<Runtime>,
    model: ScriptedCompletionModel,
    history: Vec<ChatMessage>,
    #[case] command: &str,
    #[case] expected: &str,
) {
    let rt = runtime.expect("runtime should build");
    let harness = workspace_harness(model);
    let history = with_command(history, command);

    let outcome = rt
        .block_on(harness.service.run(&history, &ExportOptions::new()))
        .expect("run should succeed");

    assert_eq!(outcome.path().parent(), Some(Path::new(expected)));
    assert!(harness.editor.file(outcome.path()).is_some());
}

#[rstest]
#[case("/greg", "/ws/configured")]
#[case("/greg export this please", "/ws/configured")]
#[case("/greg please output_dir=~/override", "/home/dev/override")]
fn run_uses_configured_options_unless_overridden(
    runtime: std::io::Result<Runtime>,
    model: ScriptedCompletionModel,
    history: Vec<ChatMessage>,
    #[case] command: &str,
    #[case] expected: &str,
) {
    let rt = runtime.expect("runtime should build");
    let harness = workspace_harness(model);
    let history = with_command(history, command);
    let configured = ExportOptions::new().with_output_dir("./configured");

    let outcome = rt
        .block_on(harness.service.run(&history, &configured))
        .expect("run should succeed");

    assert_eq!(outcome.path().parent(), Some(Path::new(expected)));
}

#[rstest]
fn run_ignores_unrelated_arguments(
    runtime: std::io::Result<Runtime>,
    harness: Harness,
    history: Vec<ChatMessage>,
) {
    let rt = runtime.expect("runtime should build");
    let history = with_command(history, "/greg format=html");

    let outcome = rt
        .block_on(harness.service.run(&history, &ExportOptions::new()))
        .expect("run should succeed");

    assert_eq!(outcome.path().parent(), Some(Path::new(APPLICATION_DIR)));
}

#[rstest]
fn run_rejects_other_commands(runtime: std::io::Result<Runtime>, harness: Harness) {
    let rt = runtime.expect("runtime should build");

    let error = rt
        .block_on(
            harness
                .service
                .run(&[ChatMessage::user("/share")], &ExportOptions::new()),
        )
        .expect_err("run should fail");

    assert!(matches!(error, SessionExportError::UnsupportedCommand(ref name) if name == "share"));
    assert!(harness.model.prompts().is_empty());
}

#[rstest]
fn run_rejects_history_without_command(runtime: std::io::Result<Runtime>, harness: Harness) {
    let rt = runtime.expect("runtime should build");

    let plain = rt
        .block_on(
            harness
                .service
                .run(&[ChatMessage::user("export please")], &ExportOptions::new()),
        )
        .expect_err("plain text should fail");
    let empty = rt
        .block_on(harness.service.run(&[], &ExportOptions::new()))
        .expect_err("empty history should fail");

    assert!(matches!(
        plain,
        SessionExportError::Command(SlashCommandError::MissingLeadingSlash)
    ));
    assert!(matches!(empty, SessionExportError::EmptyHistory));
    assert!(harness.editor.written_paths().is_empty());
}
