//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::span::{SourceFile, SourceRange};

/// A source line quoted in a diagnostic, with a caret run under the range.
///
/// # Examples
///
/// ```
/// use moosec_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("var x = 'a", 1, 9, 11);
/// assert_eq!(snippet.format(), "  1 | var x = 'a\n    |         ^^");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Create a new snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
        }
    }

    /// Quote the first line of `range` from `file`.
    ///
    /// A range spanning several lines is underlined to the end of its first
    /// line. Returns `None` when the line does not exist.
    pub fn from_range(file: &SourceFile, range: &SourceRange) -> Option<Self> {
        let line_number = range.start.line as usize;
        let line = file.line_at(line_number)?;
        let start_column = range.start.column as usize;
        let end_column = if range.end.line == range.start.line {
            range.end.column as usize
        } else {
            line.chars().count() + 1
        };

        Some(Self::new(line, line_number, start_column, end_column))
    }

    /// Render the line and its caret run.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line);
        result.push_str(&format!("{:>width$} | ", ""));
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));
        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use moosec_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
///
/// let diag = DiagnosticBuilder::error("invalid character escape 'q'")
///     .code(DiagnosticCode::E_LEX_INVALID_ESCAPE)
///     .help("valid escapes are \\n, \\t, \\r, \\\" and \\x{..}")
///     .build();
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.helps.len(), 1);
/// ```
#[must_use = "a diagnostic builder does nothing until built or emitted"]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: SourceRange,
    code: Option<DiagnosticCode>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: SourceRange::ZERO,
            code: None,
            helps: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source range
    pub fn span(mut self, span: SourceRange) -> Self {
        self.span = span;
        self
    }

    /// Add a help suggestion
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            helps: self.helps,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
