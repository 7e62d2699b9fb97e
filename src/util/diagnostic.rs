//! User-friendly diagnostic messages.
//!
//! Every error shown to the user carries the root cause, the offending values
//! and, where one exists, a list of ways to fix it.

use std::fmt;
use std::path::PathBuf;

/// Common suggestion messages.
pub mod suggestions {
    /// JSR scope documentation.
    pub const SCOPES_DOC: &str = "https://jsr.io/docs/scopes";

    /// Name remediation options, in the order they are offered.
    pub const ADD_JSR_NAME: &str = "add a `jsrName` field to package.json";
    pub const USE_SCOPED_NAME: &str = "use a scoped package name (ex: @author/package)";
    pub const ADD_NAME_AND_AUTHOR: &str = "add `name` & `author` fields to package.json \
        (ex: { \"name\": \"package\", \"author\": { \"name\": \"author\" } } \
        will be converted to \"@author/package\")";

    /// Suggestion when no package.json is found.
    pub const NO_MANIFEST: &str = "run `pkg-to-jsr` inside a package or pass `--root <DIR>`";

    /// Suggestion when exports cannot be resolved.
    pub const ADD_EXPORTS: &str =
        "add an `exports` field to package.json, or `exports` to pkg-to-jsr.toml";
}

/// An error message with optional suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Additional context lines
    pub context: Vec<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
    /// Related location (file path)
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            location: None,
        }
    }

    /// Add context to the diagnostic.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Add a suggestion for fixing the issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add a file location.
    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut output = String::new();

        let error_prefix = if color {
            "\x1b[1;31merror\x1b[0m"
        } else {
            "error"
        };
        output.push_str(&format!("{}: {}\n", error_prefix, self.message));

        if let Some(ref path) = self.location {
            output.push_str(&format!("  --> {}\n", path.display()));
        }

        for ctx in &self.context {
            output.push_str(&format!("  = {}\n", ctx));
        }

        if !self.suggestions.is_empty() {
            output.push('\n');
            let help_prefix = if color {
                "\x1b[1;32mhelp\x1b[0m"
            } else {
                "help"
            };
            output.push_str(&format!(
                "{}: to fix this issue, choose one of the following options:\n",
                help_prefix
            ));
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
            }
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

/// Print a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}
