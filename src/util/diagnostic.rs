//! User-facing diagnostic messages.
//!
//! Every error printed by the driver carries the root cause, the packages
//! involved and what to change.

use std::fmt;

/// Common suggestion messages.
pub mod suggestions {
    /// Suggestion when an upstream package cannot be resolved.
    pub const DECLARE_UPSTREAM: &str =
        "Declare it under [upstream.<name>] in .ctext/config.toml";

    /// Suggestion when the base list names a package by mistake.
    pub const CHECK_BASE: &str = "Check the `base` list in the [package] section";

    /// Suggestion when providers require each other.
    pub const BREAK_CYCLE: &str = "Remove one of the `deps` entries that closes the cycle";

    /// Suggestion when a package name is rejected.
    pub const RENAME: &str =
        "Use ASCII letters, digits, `_`, `.`, `+` or `-` only, e.g. `ctext`";
}

/// An error diagnostic with optional suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Additional context lines
    pub context: Vec<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
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

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut output = String::new();

        let error_prefix = if color {
            "\x1b[1;31merror\x1b[0m"
        } else {
            "error"
        };
        output.push_str(&format!("{}: {}\n", error_prefix, self.message));

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
            output.push_str(&format!("{}: consider:\n", help_prefix));
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
