//! Token definitions.

use std::fmt;

use moosec_util::SourceRange;
use serde::{Deserialize, Serialize};

use crate::operator::BuiltinOperator;

/// A lexed token and the source range it covers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// What was lexed
    pub kind: TokenKind,
    /// Where it was lexed, `[start, end)`
    pub range: SourceRange,
}

impl Token {
    /// Create a new token
    #[inline]
    pub fn new(kind: TokenKind, range: SourceRange) -> Self {
        Self { kind, range }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}  {}",
            self.range.start.line, self.range.start.column, self.kind
        )
    }
}

/// The kinds of token the lexer produces.
///
/// Equality is structural, interpolation segments included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum TokenKind {
    /// Integer literal: `42`, `0x2A`, `1_000`
    Integer(i64),
    /// Real literal: `3.14`
    Real(f64),
    /// Character literal, one byte: `'a'`, `'\x{7f}'`
    Char(u8),
    /// String literal without interpolation
    String(String),
    /// String literal with at least one `\( … )` segment.
    ///
    /// Literal text is a one-element segment holding a [`TokenKind::String`]
    /// token; each interpolated expression is the segment of tokens lexed
    /// between its parentheses.
    StringInterpolation(Vec<Vec<Token>>),
    /// A known operator
    Operator(BuiltinOperator),
    /// A name that is not a keyword
    Identifier(String),

    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// A line feed. The range covers that one character; separators
    /// directly after it produce no further tokens.
    Newline,
    /// `;`, covering that one character
    Semicolon,
    /// `...`
    Ellipsis,

    /// `var`
    Var,
    /// `if`
    If,
    /// `else`
    Else,

    /// End of input; never part of the lexed token list
    Eof,

    /// Unrecognized punctuation or operator text, kept verbatim
    Unknown(String),
}

/// Maps a keyword spelling to its token kind.
///
/// # Example
///
/// ```
/// use moosec_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("var"), Some(TokenKind::Var));
/// assert_eq!(keyword_from_ident("variable"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    match ident {
        "var" => Some(TokenKind::Var),
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        _ => None,
    }
}

impl TokenKind {
    /// Classifies a word that is not a number: a keyword or an identifier.
    pub fn from_word(word: &str) -> Self {
        keyword_from_ident(word).unwrap_or_else(|| TokenKind::Identifier(word.to_string()))
    }

    /// Classifies punctuation text that is not a known operator.
    ///
    /// # Example
    ///
    /// ```
    /// use moosec_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_punctuation(")"), TokenKind::RightParen);
    /// assert_eq!(TokenKind::from_punctuation(""), TokenKind::Eof);
    /// assert_eq!(TokenKind::from_punctuation("=>"), TokenKind::Unknown("=>".into()));
    /// ```
    pub fn from_punctuation(text: &str) -> Self {
        match text {
            "(" => TokenKind::LeftParen,
            ")" => TokenKind::RightParen,
            ";" => TokenKind::Semicolon,
            "\n" => TokenKind::Newline,
            "..." => TokenKind::Ellipsis,
            "" => TokenKind::Eof,
            other => TokenKind::Unknown(other.to_string()),
        }
    }

    /// Returns true for `var`, `if` and `else`.
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::Var | TokenKind::If | TokenKind::Else)
    }

    /// Returns true for [`TokenKind::Eof`].
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Integer(value) => write!(f, "integer {}", value),
            TokenKind::Real(value) => write!(f, "real {:?}", value),
            TokenKind::Char(value) => write!(f, "char {:?}", char::from(*value)),
            TokenKind::String(text) => write!(f, "string {:?}", text),
            TokenKind::StringInterpolation(segments) => {
                write!(f, "interpolation")?;
                for segment in segments {
                    write!(f, " {{")?;
                    for (i, token) in segment.iter().enumerate() {
                        if i > 0 {
                            write!(f, ",")?;
                        }
                        write!(f, " {}", token.kind)?;
                    }
                    write!(f, " }}")?;
                }
                Ok(())
            },
            TokenKind::Operator(op) => write!(f, "operator {}", op),
            TokenKind::Identifier(name) => write!(f, "identifier {}", name),
            TokenKind::LeftParen => write!(f, "left-paren"),
            TokenKind::RightParen => write!(f, "right-paren"),
            TokenKind::Newline => write!(f, "newline"),
            TokenKind::Semicolon => write!(f, "semicolon"),
            TokenKind::Ellipsis => write!(f, "ellipsis"),
            TokenKind::Var => write!(f, "keyword var"),
            TokenKind::If => write!(f, "keyword if"),
            TokenKind::Else => write!(f, "keyword else"),
            TokenKind::Eof => write!(f, "eof"),
            TokenKind::Unknown(text) => write!(f, "unknown {:?}", text),
        }
    }
}
