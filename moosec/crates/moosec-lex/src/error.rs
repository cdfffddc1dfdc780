//! Lexical errors.

use moosec_util::DiagnosticCode;
use thiserror::Error;

/// An error that aborts the current token.
///
/// Errors never abort the file: the lexer reports them to its
/// [`Handler`](moosec_util::Handler) and continues with the next token.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that cannot appear where it was found
    #[error("invalid character {0} in source file")]
    InvalidCharacter(char),

    /// A malformed character literal or `\x{..}` escape
    #[error("invalid character literal '{0}' in source file")]
    InvalidCharacterLiteral(String),

    /// A backslash followed by an unsupported character
    #[error("invalid character escape '{0}'")]
    InvalidEscape(char),

    /// Input ended inside a token
    #[error("unexpected EOF")]
    UnexpectedEof,
}

impl LexError {
    /// The diagnostic code reported for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::InvalidCharacter(_) => DiagnosticCode::E_LEX_INVALID_CHARACTER,
            LexError::InvalidCharacterLiteral(_) => DiagnosticCode::E_LEX_INVALID_CHARACTER_LITERAL,
            LexError::InvalidEscape(_) => DiagnosticCode::E_LEX_INVALID_ESCAPE,
            LexError::UnexpectedEof => DiagnosticCode::E_LEX_UNEXPECTED_EOF,
        }
    }

    /// A suggestion shown with the diagnostic, if there is one.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LexError::InvalidEscape(_) => {
                Some("supported escapes are \\n, \\t, \\r, \\\" and \\x{..}")
            },
            LexError::InvalidCharacterLiteral(_) => {
                Some("a character literal holds one byte between single quotes")
            },
            _ => None,
        }
    }
}

/// Result type alias for lexing a single token
pub type LexResult<T> = std::result::Result<T, LexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            LexError::InvalidCharacter('{').to_string(),
            "invalid character { in source file"
        );
        assert_eq!(
            LexError::InvalidCharacterLiteral("a".into()).to_string(),
            "invalid character literal 'a' in source file"
        );
        assert_eq!(
            LexError::InvalidEscape('q').to_string(),
            "invalid character escape 'q'"
        );
        assert_eq!(LexError::UnexpectedEof.to_string(), "unexpected EOF");
    }

    #[test]
    fn test_codes() {
        assert_eq!(LexError::InvalidCharacter('x').code().as_str(), "E1001");
        assert_eq!(LexError::InvalidCharacterLiteral(String::new()).code().as_str(), "E1002");
        assert_eq!(LexError::InvalidEscape('x').code().as_str(), "E1003");
        assert_eq!(LexError::UnexpectedEof.code().as_str(), "E1004");
    }

    #[test]
    fn test_help() {
        assert!(LexError::InvalidEscape('q').help().is_some());
        assert!(LexError::UnexpectedEof.help().is_none());
    }
}
