//! Diagnostic codes for categorizing compiler errors.
//!
//! # Examples
//!
//! ```
//! use moosec_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEX_INVALID_CHARACTER;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}` with the number padded to four
/// digits, e.g. `E1001`.
///
/// # Examples
///
/// ```
/// use moosec_util::diagnostic::DiagnosticCode;
///
/// let code = DiagnosticCode::new("E", 7);
/// assert_eq!(code.as_str(), "E0007");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix, "E" for errors
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g. "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // Lexer errors (E1001-E1999)

    /// E1001: character that cannot start or continue a token
    pub const E_LEX_INVALID_CHARACTER: Self = Self::new("E", 1001);
    /// E1002: malformed character literal or `\x{..}` escape
    pub const E_LEX_INVALID_CHARACTER_LITERAL: Self = Self::new("E", 1002);
    /// E1003: unknown escape sequence
    pub const E_LEX_INVALID_ESCAPE: Self = Self::new("E", 1003);
    /// E1004: input ended inside a token
    pub const E_LEX_UNEXPECTED_EOF: Self = Self::new("E", 1004);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
