//! Diagnostic module - Error reporting infrastructure.
//!
//! The lexer never aborts on malformed input: it reports each problem to a
//! [`Handler`] and keeps scanning. The driver then renders what the handler
//! collected.
//!
//! # Examples
//!
//! ```
//! use moosec_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use moosec_util::span::{SourceLocation, SourceRange};
//!
//! let handler = Handler::new();
//! let at = SourceLocation::new(2, 4);
//!
//! DiagnosticBuilder::error("invalid character escape 'q'")
//!     .code(DiagnosticCode::E_LEX_INVALID_ESCAPE)
//!     .span(SourceRange::new(at.clone(), at))
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! assert_eq!(
//!     handler.diagnostics()[0].to_string(),
//!     "error[E1003]: invalid character escape 'q'\n  --> unknown:2:4"
//! );
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use std::cell::RefCell;
use std::fmt;

use crate::span::{SourceFile, SourceRange};

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// An error; the file does not lex cleanly
    Error,
}

impl Level {
    /// Returns true for [`Level::Error`].
    #[inline]
    pub fn is_error(self) -> bool {
        self == Level::Error
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source range the message refers to
    pub span: SourceRange,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: SourceRange) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: SourceRange) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Render the diagnostic, quoting the offending line of `file` under
    /// its location.
    ///
    /// # Examples
    ///
    /// ```
    /// use moosec_util::diagnostic::Diagnostic;
    /// use moosec_util::span::{SourceFile, SourceLocation, SourceRange};
    ///
    /// let file = SourceFile::from_string("a.moose", "var c = 'x");
    /// let span = SourceRange::new(
    ///     SourceLocation::new(1, 9).with_offset(8),
    ///     SourceLocation::new(1, 11).with_offset(10),
    /// );
    /// let rendered = Diagnostic::error("invalid character literal 'x' in source file", span)
    ///     .render(&file);
    /// assert!(rendered.ends_with("  1 | var c = 'x\n    |         ^^"));
    /// ```
    pub fn render(&self, file: &SourceFile) -> String {
        let snippet = SourceSnippet::from_range(file, &self.span);
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_parts(&mut out, snippet.as_ref());
        out
    }

    fn write_parts(&self, f: &mut impl fmt::Write, snippet: Option<&SourceSnippet>) -> fmt::Result {
        write!(f, "{}", self.level)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)?;

        if self.span.start.line > 0 {
            write!(f, "\n  --> {}", self.span.start)?;
        }
        if let Some(snippet) = snippet {
            write!(f, "\n{}", snippet.format())?;
        }
        for help in &self.helps {
            write!(f, "\n  = help: {}", help)?;
        }
        Ok(())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_parts(f, None)
    }
}

/// Handler for collecting and reporting diagnostics
///
/// One handler serves one lexer run. It uses interior mutability so the
/// scanner can report through a shared reference.
///
/// # Examples
///
/// ```
/// use moosec_util::diagnostic::Handler;
///
/// let handler = Handler::new();
/// assert!(!handler.has_errors());
/// assert_eq!(handler.error_count(), 0);
/// ```
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Consume the handler, returning its diagnostics in report order.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("errors", &self.error_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::SourceLocation;

    fn at(line: u32, column: u32) -> SourceRange {
        let loc = SourceLocation::new(line, column);
        SourceRange::new(loc.clone(), loc)
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Error.to_string(), "error");
        assert!(Level::Error.is_error());
    }

    #[test]
    fn test_diagnostic_with_parts() {
        let diag = Diagnostic::error("unexpected EOF", at(1, 2))
            .with_code(DiagnosticCode::E_LEX_UNEXPECTED_EOF)
            .with_help("help 1");
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEX_UNEXPECTED_EOF));
        assert_eq!(diag.helps, vec!["help 1"]);
    }

    #[test]
    fn test_display_without_location() {
        let diag = Diagnostic::error("nothing to do", SourceRange::ZERO);
        assert_eq!(diag.to_string(), "error: nothing to do");
    }

    #[test]
    fn test_display_with_helps() {
        let diag = Diagnostic::error("invalid character escape 'q'", at(3, 7))
            .with_code(DiagnosticCode::E_LEX_INVALID_ESCAPE)
            .with_help("escape a backslash as \\\\");
        assert_eq!(
            diag.to_string(),
            "error[E1003]: invalid character escape 'q'\n  --> unknown:3:7\n  = help: escape a backslash as \\\\"
        );
    }

    #[test]
    fn test_render_quotes_line() {
        let file = SourceFile::from_string("r.moose", "if x\nvar @\n");
        let diag = Diagnostic::error("invalid character @ in source file", at(2, 5));
        let rendered = diag.render(&file);
        assert!(rendered.contains("  2 | var @"));
        assert!(rendered.ends_with("|     ^"));
    }

    #[test]
    fn test_render_puts_line_before_help() {
        let file = SourceFile::from_string("r.moose", "var s = \"\\q\"\n");
        let diag = Diagnostic::error("invalid character escape 'q'", at(1, 10))
            .with_help("valid escapes are \\n, \\t and \\r");
        let rendered = diag.render(&file);
        let quoted = rendered.find("  1 | ").unwrap();
        let help = rendered.find("= help:").unwrap();
        assert!(quoted < help);
    }

    #[test]
    fn test_render_without_line() {
        let file = SourceFile::from_string("r.moose", "");
        let diag = Diagnostic::error("unexpected EOF", at(4, 1));
        assert_eq!(diag.render(&file), diag.to_string());
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("e", at(1, 1)));
        handler.emit_diagnostic(Diagnostic::error("f", at(2, 1)));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 2);
        assert_eq!(handler.diagnostics().len(), 2);
    }

    #[test]
    fn test_handler_into_diagnostics_keeps_order() {
        let handler = Handler::new();
        DiagnosticBuilder::error("first").span(at(1, 1)).emit(&handler);
        DiagnosticBuilder::error("second").span(at(2, 1)).emit(&handler);
        let messages: Vec<_> = handler
            .into_diagnostics()
            .into_iter()
            .map(|d| d.message)
            .collect();
        assert_eq!(messages, vec!["first", "second"]);
    }
}
