//! Session export orchestration service.

use mockable::Clock;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::export::domain::{
    ChatMessage, EXPORT_COMMAND, ExportOptions, ExportedSession, OutputDirectory, RenderError,
    SlashCommandError, SlashCommandInvocation, completion_input, description_prompt,
    exported_label, session_file_name, title_prompt, transcript_path,
};
use crate::export::ports::{CompletionError, CompletionModel, EditorError, EditorHost, Filesystem};

/// Service-level errors for session export.
///
/// Failures from the ports are surfaced unchanged; nothing is retried and
/// nothing is written once an error occurs.
#[derive(Debug, Error)]
pub enum SessionExportError {
    /// The completion model failed to produce a title or description.
    #[error(transparent)]
    Completion(#[from] CompletionError),
    /// The editor host failed.
    #[error(transparent)]
    Editor(#[from] EditorError),
    /// A template failed to render.
    #[error(transparent)]
    Render(#[from] RenderError),
    /// The final history message is not a slash command.
    #[error(transparent)]
    Command(#[from] SlashCommandError),
    /// The invoking slash command is not the export command.
    #[error("command '/{0}' does not export sessions")]
    UnsupportedCommand(String),
    /// No chat history, so no invoking command either.
    #[error("chat history is empty")]
    EmptyHistory,
    /// A home-relative output directory was configured but the home
    /// directory is unknown.
    #[error("home directory is not available")]
    HomeDirectoryUnavailable,
    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDirectory {
        /// Directory being created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Result type for session export operations.
pub type SessionExportResult<T> = Result<T, SessionExportError>;

/// The result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    path: PathBuf,
    session: ExportedSession,
    document: String,
}

impl ExportOutcome {
    /// Returns the path of the written transcript.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the exported session.
    #[must_use]
    pub const fn session(&self) -> &ExportedSession {
        &self.session
    }

    /// Returns the markdown written to disk.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Returns the confirmation shown to the user.
    #[must_use]
    pub fn confirmation(&self) -> String {
        format!(
            "The session transcript has been saved to a markdown file at `{}`.",
            self.path.display()
        )
    }
}

/// Exports chat sessions to markdown files.
#[derive(Clone)]
pub struct SessionExportService<E, M, F, C>
where
    E: EditorHost,
    M: CompletionModel,
    F: Filesystem,
    C: Clock + Send + Sync,
{
    editor: Arc<E>,
    model: Arc<M>,
    filesystem: Arc<F>,
    clock: Arc<C>,
}

impl<E, M, F, C> SessionExportService<E, M, F, C>
where
    E: EditorHost,
    M: CompletionModel,
    F: Filesystem,
    C: Clock + Send + Sync,
{
    /// Creates a new session export service.
    #[must_use]
    pub const fn new(editor: Arc<E>, model: Arc<M>, filesystem: Arc<F>, clock: Arc<C>) -> Self {
        Self {
            editor,
            model,
            filesystem,
            clock,
        }
    }

    /// Handles an [`EXPORT_COMMAND`] invocation.
    ///
    /// The final history message is the invocation itself. `configured`
    /// holds the host's options; an `output_dir=` argument in the
    /// invocation overrides them. Other words in the invocation are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SessionExportError`] when the history is empty, the final
    /// message is not the export command, or the export fails.
    pub async fn run(
        &self,
        history: &[ChatMessage],
        configured: &ExportOptions,
    ) -> SessionExportResult<ExportOutcome> {
        let last = history.last().ok_or(SessionExportError::EmptyHistory)?;
        let invocation = SlashCommandInvocation::parse(&last.text())?;
        if !EXPORT_COMMAND.matches(&invocation) {
            return Err(SessionExportError::UnsupportedCommand(
                invocation.command().to_owned(),
            ));
        }
        debug!(
            command = invocation.command(),
            arguments = invocation.arguments().len(),
            ignored_words = invocation.free_text().len(),
            "read export invocation"
        );
        let options = configured.overridden_by(&invocation);
        self.export(history, &options).await
    }

    /// Exports `history` to a markdown file and opens it in the editor.
    ///
    /// The last message of `history` is treated as the invoking command and
    /// left out of the transcript.
    ///
    /// # Errors
    ///
    /// Returns [`SessionExportError`] when a completion, template, directory
    /// creation, or editor call fails.
    pub async fn export(
        &self,
        history: &[ChatMessage],
        options: &ExportOptions,
    ) -> SessionExportResult<ExportOutcome> {
        let now = self.clock.local();
        let input = completion_input(history);

        let title = self.generate("title", &title_prompt(&input)?).await?;
        let description = self
            .generate("description", &description_prompt(&input)?)
            .await?;

        let transcript = history
            .split_last()
            .map_or(&[] as &[ChatMessage], |(_, earlier)| earlier);
        let session = ExportedSession::new(title, description)
            .with_model(self.model.model())
            .with_exported_at(exported_label(&now))
            .with_messages(transcript);
        let document = session.to_markdown()?;

        let directory = self.output_directory(options).await?;
        self.ensure_directory(&directory)?;

        let path = transcript_path(&directory, &session_file_name(&now));
        self.editor.write_file(&path, &document).await?;
        self.editor.open_file(&path).await?;

        info!(
            path = %path.display(),
            sections = transcript.len(),
            "session transcript exported"
        );
        Ok(ExportOutcome {
            path,
            session,
            document,
        })
    }

    async fn generate(&self, purpose: &'static str, prompt: &str) -> SessionExportResult<String> {
        debug!(purpose, model = self.model.model(), "requesting completion");
        match self.model.complete(prompt).await {
            Ok(text) => Ok(text.trim().to_owned()),
            Err(error) => {
                warn!(purpose, %error, "completion failed");
                Err(error.into())
            }
        }
    }

    async fn output_directory(&self, options: &ExportOptions) -> SessionExportResult<PathBuf> {
        let directory = match options.output_dir() {
            Some(configured) => OutputDirectory::parse(configured),
            None => {
                let application_dir = self.editor.application_dir().await?;
                application_dir.to_str().map_or_else(
                    || OutputDirectory::Literal(application_dir.clone()),
                    OutputDirectory::parse,
                )
            }
        };

        let home = if directory.needs_home() {
            Some(
                self.filesystem
                    .home_dir()
                    .ok_or(SessionExportError::HomeDirectoryUnavailable)?,
            )
        } else {
            None
        };
        let workspace_dirs = if directory.needs_workspace() {
            self.editor.workspace_dirs().await?
        } else {
            Vec::new()
        };

        let resolved = directory.resolve(home.as_deref(), &workspace_dirs);
        debug!(directory = %resolved.display(), "resolved output directory");
        Ok(resolved)
    }

    fn ensure_directory(&self, directory: &Path) -> SessionExportResult<()> {
        if self.filesystem.dir_exists(directory) {
            return Ok(());
        }
        debug!(directory = %directory.display(), "creating output directory");
        self.filesystem
            .create_dir_all(directory)
            .map_err(|source| SessionExportError::CreateDirectory {
                path: directory.to_path_buf(),
                source,
            })
    }
}
