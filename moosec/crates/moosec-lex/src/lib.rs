//! moosec-lex - Lexical Analyzer for the Moose Programming Language
//!
//! This crate turns Moose source text into a sequence of [`Token`]s, each
//! tagged with the [`SourceRange`](moosec_util::SourceRange) it covers.
//!
//! # Example Usage
//!
//! ```
//! use moosec_lex::{BuiltinOperator, Lexer, TokenKind};
//! use moosec_util::Handler;
//!
//! let handler = Handler::new();
//! let tokens = Lexer::new("var x = 0x10\nx += 1", &handler).lex();
//!
//! assert_eq!(tokens[0].kind, TokenKind::Var);
//! assert_eq!(tokens[3].kind, TokenKind::Integer(16));
//! assert_eq!(tokens[4].kind, TokenKind::Newline);
//! assert_eq!(tokens[6].kind, TokenKind::Operator(BuiltinOperator::PlusAssign));
//! assert!(!handler.has_errors());
//! ```
//!
//! # Module Structure
//!
//! - [`chars`] - character classes and integer literal parsing
//! - [`operator`] - the operator table and precedences
//! - [`token`] - token definitions
//! - [`cursor`] - character cursor for source traversal
//! - [`lexer`] - the scanner
//! - [`error`] - lexical errors
//!
//! # Tokens
//!
//! - **Keywords**: `var`, `if`, `else`
//! - **Identifiers**: runs of `[A-Za-z0-9_]` that are not numbers
//! - **Literals**: integers (`42`, `0x2A`, `0b101`, `0o52`, `1_000`), reals
//!   (`3.14`), characters (`'a'`, `'\x{7f}'`), strings with `\( … )`
//!   interpolation
//! - **Operators**: see [`BuiltinOperator`]
//! - **Punctuation**: `(`, `)`, `...`, newlines and `;`
//!
//! Anything else becomes a [`TokenKind::Unknown`] token. Malformed literals
//! are reported to the [`Handler`](moosec_util::Handler) and skipped.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod operator;
pub mod token;

pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use operator::{BuiltinOperator, PREFIX_ONLY_PRECEDENCE};
pub use token::{keyword_from_ident, Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;
    use moosec_util::Handler;
    use proptest::prelude::*;

    fn lex_tokens(source: &str) -> (Vec<Token>, Handler) {
        let handler = Handler::new();
        let tokens = Lexer::new(source, &handler).lex();
        (tokens, handler)
    }

    fn covered_text(source: &str, tokens: &[Token]) -> String {
        let chars: Vec<char> = source.chars().collect();
        tokens
            .iter()
            .flat_map(|token| token.range.slice(&chars).iter())
            .collect()
    }

    #[test]
    fn test_program() {
        let source = "\
// counter
var count = 0
if count < 10 {
    count += 1; print(\"n = \\(count)\")
} else ...
";
        let (tokens, handler) = lex_tokens(source);
        assert!(!handler.has_errors());

        let kinds: Vec<_> = tokens.iter().map(|t| &t.kind).collect();
        // The comment line still ends with a newline token.
        assert_eq!(kinds[0], &TokenKind::Newline);
        assert_eq!(kinds[1], &TokenKind::Var);
        assert_eq!(kinds[5], &TokenKind::Newline);
        assert_eq!(kinds[6], &TokenKind::If);
        assert_eq!(kinds[10], &TokenKind::Unknown("{".into()));
        assert_eq!(kinds[15], &TokenKind::Semicolon);
        assert!(kinds
            .iter()
            .any(|kind| matches!(kind, TokenKind::StringInterpolation(segments) if segments.len() == 2)));
        assert_eq!(kinds[kinds.len() - 2], &TokenKind::Ellipsis);
        assert_eq!(kinds[kinds.len() - 1], &TokenKind::Newline);
    }

    #[test]
    fn test_ranges_are_ordered() {
        let (tokens, _) = lex_tokens("var a = (b + 1.5) * 'c'\nif a ... \"s\\(a)\"");
        for pair in tokens.windows(2) {
            assert!(pair[0].range.start.char_offset <= pair[0].range.end.char_offset);
            assert!(pair[0].range.end.char_offset <= pair[1].range.start.char_offset);
        }
    }

    /// Whether `text` is only spaces, separators and comments.
    fn is_trivia(text: &str) -> bool {
        let mut rest = text;
        loop {
            rest = rest.trim_start_matches([' ', '\t', '\n', ';']);
            if rest.is_empty() {
                return true;
            }
            if let Some(comment) = rest.strip_prefix("//") {
                rest = comment.find('\n').map_or("", |end| &comment[end..]);
            } else if let Some(comment) = rest.strip_prefix("/*") {
                rest = comment.find("*/").map_or("", |end| &comment[end + 2..]);
            } else {
                return false;
            }
        }
    }

    fn fragment() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec![
            "x",
            "count_2",
            "var",
            "42",
            "0x1F",
            "1.5",
            "+",
            "<<=",
            "/",
            "*",
            "!",
            "(",
            ")",
            "...",
            "{",
            ";",
            "\n",
            "// note\n",
            "/* block */",
            "/* multi\nline */",
            "\"text\"",
            "\"a\\(x + 1)b\"",
            "\"\\(x /* c */)\"",
            "\"\\((a) // tail\n)\"",
            "\"\\t\\x{41}\"",
            "'a'",
            "'\\n'",
        ])
    }

    #[test]
    fn test_is_trivia() {
        assert!(is_trivia(" ;\n\t"));
        assert!(is_trivia(" // a\n /* b */ "));
        assert!(is_trivia("/* open"));
        assert!(!is_trivia(" x "));
        assert!(!is_trivia("/ /"));
    }

    proptest! {
        #[test]
        fn prop_gaps_between_tokens_are_trivia(
            fragments in prop::collection::vec(fragment(), 0..40)
        ) {
            let source = fragments.join(" ");
            let (tokens, handler) = lex_tokens(&source);
            prop_assert!(!handler.has_errors(), "errors in {:?}", source);

            let chars: Vec<char> = source.chars().collect();
            let mut covered = 0;
            for token in &tokens {
                let start = token.range.start.char_offset;
                prop_assert!(covered <= start, "overlapping tokens in {:?}", source);
                let gap: String = chars[covered..start].iter().collect();
                prop_assert!(is_trivia(&gap), "gap {:?} in {:?}", gap, source);
                covered = token.range.end.char_offset;
            }
            let tail: String = chars[covered..].iter().collect();
            prop_assert!(is_trivia(&tail), "tail {:?} in {:?}", tail, source);
        }

        #[test]
        fn prop_lex_terminates(source in "\\PC{0,200}") {
            let (tokens, _) = lex_tokens(&source);
            prop_assert!(tokens.iter().all(|t| !t.kind.is_eof()));
        }

        #[test]
        fn prop_lex_terminates_on_lexer_alphabet(source in "[a-z0-9_ \"'\\\\(){}.;\n/*+=<>!x]{0,120}") {
            let (tokens, _) = lex_tokens(&source);
            for token in &tokens {
                prop_assert!(token.range.start.char_offset <= token.range.end.char_offset);
            }
        }

        #[test]
        fn prop_ranges_cover_everything_but_whitespace(
            source in "[a-z0-9_ ()+\\-*<>=!&|^%~.\t]{0,120}"
        ) {
            let (tokens, handler) = lex_tokens(&source);
            prop_assert!(!handler.has_errors());
            let expected: String = source.chars().filter(|c| !matches!(c, ' ' | '\t')).collect();
            prop_assert_eq!(covered_text(&source, &tokens), expected);
        }

        #[test]
        fn prop_identifier_strings(input in "[a-zA-Z][a-zA-Z0-9_]{0,40}") {
            let (tokens, _) = lex_tokens(&input);
            prop_assert_eq!(tokens.len(), 1);
            let is_word = matches!(
                tokens[0].kind,
                TokenKind::Identifier(_) | TokenKind::Var | TokenKind::If | TokenKind::Else
            );
            prop_assert!(is_word);
        }

        #[test]
        fn prop_decimal_numbers(value in 0i64..=i64::MAX) {
            let (tokens, _) = lex_tokens(&value.to_string());
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(&tokens[0].kind, &TokenKind::Integer(value));
        }

        #[test]
        fn prop_plain_strings(body in "[^\"\\\\]{0,60}") {
            let source = format!("\"{}\"", body);
            let (tokens, handler) = lex_tokens(&source);
            prop_assert!(!handler.has_errors());
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(&tokens[0].kind, &TokenKind::String(body));
        }
    }
}
