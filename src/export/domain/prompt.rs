//! Prompts sent to the completion model to name and summarise a session.

use minijinja::{Environment, context};

use super::{ChatMessage, RenderError};

const TITLE_TEMPLATE_NAME: &str = "title prompt";
const TITLE_TEMPLATE: &str = "Given the following chat session, please generate a concise and \
informative title (3-8 words). Reply only with the title itself:\n{{ transcript }}";

const DESCRIPTION_TEMPLATE_NAME: &str = "description prompt";
const DESCRIPTION_TEMPLATE: &str = "Given the following chat session, please generate a brief \
summary or description (2-3 sentences). Reply only with the description itself and avoid \
things like \"This conversation discusses\":\n{{ transcript }}";

/// Flattens the history into the `role: content` lines shown to the model.
///
/// The priming prompt (first message) is left out; everything after it is
/// included, one line per message, and the result is trimmed.
///
/// # Examples
///
/// ```
/// use session_export::export::domain::{ChatMessage, completion_input};
///
/// let history = [
///     ChatMessage::user("You are a helpful assistant."),
///     ChatMessage::user("How do I read a file?"),
///     ChatMessage::assistant("Use std::fs::read_to_string."),
/// ];
/// assert_eq!(
///     completion_input(&history),
///     "user: How do I read a file?\nassistant: Use std::fs::read_to_string.",
/// );
/// ```
#[must_use]
pub fn completion_input(history: &[ChatMessage]) -> String {
    history
        .iter()
        .skip(1)
        .map(|message| format!("{}: {}\n", message.role(), message.prompt_text()))
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Renders the prompt asking for a short session title.
///
/// # Errors
///
/// Returns [`RenderError`] when the prompt template fails to render.
pub fn title_prompt(transcript: &str) -> Result<String, RenderError> {
    render_prompt(TITLE_TEMPLATE_NAME, TITLE_TEMPLATE, transcript)
}

/// Renders the prompt asking for a two-to-three sentence description.
///
/// # Errors
///
/// Returns [`RenderError`] when the prompt template fails to render.
pub fn description_prompt(transcript: &str) -> Result<String, RenderError> {
    render_prompt(DESCRIPTION_TEMPLATE_NAME, DESCRIPTION_TEMPLATE, transcript)
}

fn render_prompt(
    name: &'static str,
    template: &str,
    transcript: &str,
) -> Result<String, RenderError> {
    Environment::new()
        .render_str(template, context! { transcript => transcript })
        .map_err(|error| RenderError::new(name, &error))
}
