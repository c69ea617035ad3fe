//! Code-fence annotation for user messages.
//!
//! Editors attach the source file name to fenced snippets (```` ```src/app.py ````),
//! which markdown renderers do not understand. The fence header is rewritten
//! to a plain language tag and the original header is preserved as a comment
//! on the first line of the snippet.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::language_for_filepath;

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static FENCE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```((.*?\.((?-u:\w)+))\s*.*)\n").expect("fence header pattern must compile")
});

const EMPTY_FENCE_PAIR: &str = "```\n```";
const SEPARATED_FENCE_PAIR: &str = "```\n\n```";

/// Rewrites fence headers that name a file.
///
/// Each matching header is replaced by a fence tagged with the file
/// extension, followed by a comment line holding the original header text.
/// Adjacent closing/opening fences are then separated by a blank line.
///
/// # Examples
///
/// ```
/// use session_export::export::domain::annotate_code_fences;
///
/// let annotated = annotate_code_fences("```foo.py\nprint('hi')\n```");
/// assert_eq!(annotated, "```py\n# foo.py\nprint('hi')\n```");
/// ```
#[must_use]
pub fn annotate_code_fences(text: &str) -> String {
    let annotated = FENCE_HEADER.replace_all(text, |captures: &Captures<'_>| {
        let group = |index| captures.get(index).map_or("", |found| found.as_str());
        let metadata = group(1);
        let filename = group(2);
        let extension = group(3);
        let language = language_for_filepath(filename);
        format!(
            "```{extension}\n{} {metadata}\n",
            language.single_line_comment
        )
    });
    annotated.replace(EMPTY_FENCE_PAIR, SEPARATED_FENCE_PAIR)
}

/// Returns `true` when the text contains a code-fence marker.
#[must_use]
pub fn contains_code_fence(text: &str) -> bool {
    text.contains("```")
}
