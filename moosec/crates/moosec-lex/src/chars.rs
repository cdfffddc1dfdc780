//! Character classes and numeric literal parsing.
//!
//! Every class is ASCII-only: a non-ASCII character is never whitespace,
//! part of an identifier or an operator, so the lexer falls back to an
//! `Unknown` token for it.

/// Characters that may form an operator run.
pub const OPERATOR_CHARS: &str = "~*+-/<>=%^|&!";

/// Radix prefixes recognized by [`as_number`].
const RADIX_PREFIXES: [(&str, u32); 3] = [("0x", 16), ("0b", 2), ("0o", 8)];

/// Checks if a character is a decimal digit.
#[inline]
pub fn is_numeric(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is whitespace other than a line feed.
///
/// # Example
///
/// ```
/// use moosec_lex::chars::is_space;
///
/// assert!(is_space(' '));
/// assert!(is_space('\t'));
/// assert!(is_space('\r'));
/// assert!(!is_space('\n'));
/// ```
#[inline]
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\x0B' | '\x0C')
}

/// Checks if a character ends a statement: a line feed or `;`.
#[inline]
pub fn is_line_separator(c: char) -> bool {
    c == '\n' || c == ';'
}

/// Checks if a character may appear in an identifier or numeric literal.
///
/// # Example
///
/// ```
/// use moosec_lex::chars::is_identifier;
///
/// assert!(is_identifier('a'));
/// assert!(is_identifier('7'));
/// assert!(is_identifier('_'));
/// assert!(!is_identifier('é'));
/// assert!(!is_identifier('-'));
/// ```
#[inline]
pub fn is_identifier(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character belongs to [`OPERATOR_CHARS`].
#[inline]
pub fn is_operator(c: char) -> bool {
    OPERATOR_CHARS.contains(c)
}

/// Checks if a character is a hexadecimal digit.
#[inline]
pub fn is_hexadecimal(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Interprets an identifier run as an integer literal.
///
/// Underscores separate digits, and `0x`, `0b` and `0o` select radix 16, 2
/// and 8. Text of at most two characters is parsed as plain decimal, so `0x`
/// alone is not a number. Returns `None` when the text is not a literal, in
/// which case the lexer treats it as an identifier.
///
/// # Example
///
/// ```
/// use moosec_lex::chars::as_number;
///
/// assert_eq!(as_number("0x1F"), Some(31));
/// assert_eq!(as_number("0b101"), Some(5));
/// assert_eq!(as_number("0o17"), Some(15));
/// assert_eq!(as_number("1_000"), Some(1000));
/// assert_eq!(as_number("abc"), None);
/// ```
pub fn as_number(text: &str) -> Option<i64> {
    if text.chars().count() <= 2 {
        return text.parse().ok();
    }

    let digits = |s: &str| s.replace('_', "");
    for (prefix, radix) in RADIX_PREFIXES {
        if let Some(rest) = text.strip_prefix(prefix) {
            return i64::from_str_radix(&digits(rest), radix).ok();
        }
    }

    digits(text).parse().ok()
}
