//! File-extension to language lookup used when annotating code fences.

/// Comment syntax for a language recognised by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageInfo {
    /// Display name.
    pub name: &'static str,
    /// File extensions, without the leading dot.
    pub extensions: &'static [&'static str],
    /// Token that starts a single-line comment.
    pub single_line_comment: &'static str,
}

const TYPESCRIPT: LanguageInfo = LanguageInfo {
    name: "TypeScript",
    extensions: &["ts", "mts", "cts", "tsx"],
    single_line_comment: "//",
};

static LANGUAGES: &[LanguageInfo] = &[
    TYPESCRIPT,
    LanguageInfo {
        name: "JavaScript",
        extensions: &["js", "mjs", "cjs", "jsx"],
        single_line_comment: "//",
    },
    LanguageInfo {
        name: "Python",
        extensions: &["py", "pyi", "ipynb"],
        single_line_comment: "#",
    },
    LanguageInfo {
        name: "Java",
        extensions: &["java"],
        single_line_comment: "//",
    },
    LanguageInfo {
        name: "C",
        extensions: &["c", "h"],
        single_line_comment: "//",
    },
    LanguageInfo {
        name: "C++",
        extensions: &["cpp", "cxx", "cc", "hpp", "hxx"],
        single_line_comment: "//",
    },
    LanguageInfo {
        name: "C#",
        extensions: &["cs"],
        single_line_comment: "//",
    },
    LanguageInfo {
        name: "Scala",
        extensions: &["scala", "sc"],
        single_line_comment: "//",
    },
    LanguageInfo {
        name: "Go",
        extensions: &["go"],
        single_line_comment: "//",
    },
    LanguageInfo {
        name: "Rust",
        extensions: &["rs"],
        single_line_comment: "//",
    },
    LanguageInfo {
        name: "Haskell",
        extensions: &["hs"],
        single_line_comment: "--",
    },
    LanguageInfo {
        name: "PHP",
        extensions: &["php"],
        single_line_comment: "//",
    },
    LanguageInfo {
        name: "Ruby",
        extensions: &["rb", "rails"],
        single_line_comment: "#",
    },
    LanguageInfo {
        name: "Swift",
        extensions: &["swift"],
        single_line_comment: "//",
    },
    LanguageInfo {
        name: "Kotlin",
        extensions: &["kt", "kts"],
        single_line_comment: "//",
    },
    LanguageInfo {
        name: "Clojure",
        extensions: &["clj", "cljs", "cljc"],
        single_line_comment: ";",
    },
    LanguageInfo {
        name: "Julia",
        extensions: &["jl"],
        single_line_comment: "#",
    },
    LanguageInfo {
        name: "F#",
        extensions: &["fs", "fsi", "fsx", "fsscript"],
        single_line_comment: "//",
    },
    LanguageInfo {
        name: "R",
        extensions: &["r", "R"],
        single_line_comment: "#",
    },
    LanguageInfo {
        name: "Dart",
        extensions: &["dart"],
        single_line_comment: "//",
    },
    LanguageInfo {
        name: "Solidity",
        extensions: &["sol"],
        single_line_comment: "//",
    },
    LanguageInfo {
        name: "YAML",
        extensions: &["yaml", "yml"],
        single_line_comment: "#",
    },
    LanguageInfo {
        name: "TOML",
        extensions: &["toml"],
        single_line_comment: "#",
    },
    LanguageInfo {
        name: "Lua",
        extensions: &["lua"],
        single_line_comment: "--",
    },
    LanguageInfo {
        name: "SQL",
        extensions: &["sql"],
        single_line_comment: "--",
    },
    LanguageInfo {
        name: "Shell",
        extensions: &["sh", "bash", "zsh"],
        single_line_comment: "#",
    },
    LanguageInfo {
        name: "Markdown",
        extensions: &["md", "markdown"],
        single_line_comment: "<!--",
    },
];

/// Looks up the language of a file path by its last extension.
///
/// Unknown or missing extensions fall back to TypeScript, whose `//`
/// comment marker is the most widely understood.
///
/// # Examples
///
/// ```
/// use session_export::export::domain::language_for_filepath;
///
/// assert_eq!(language_for_filepath("src/main.py").single_line_comment, "#");
/// assert_eq!(language_for_filepath("notes.unknown").name, "TypeScript");
/// ```
#[must_use]
pub fn language_for_filepath(filepath: &str) -> &'static LanguageInfo {
    let extension = filepath.rsplit('.').next().unwrap_or_default();
    LANGUAGES
        .iter()
        .find(|language| language.extensions.contains(&extension))
        .unwrap_or(&TYPESCRIPT)
}
