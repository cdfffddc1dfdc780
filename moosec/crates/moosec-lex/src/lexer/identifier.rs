//! Identifier, keyword and number lexing.
//!
//! Identifiers and numbers share one character class: a run of
//! alphanumerics and underscores is a number when [`as_number`] accepts it
//! and a keyword or identifier otherwise.

use crate::chars::{as_number, is_identifier, is_numeric};
use crate::token::TokenKind;
use crate::Lexer;

impl Lexer<'_> {
    /// Lexes an identifier run.
    ///
    /// A number followed by `.` and a digit continues into a real literal;
    /// a `.` followed by anything else is left for the next token.
    pub(crate) fn lex_word(&mut self) -> TokenKind {
        let word = self.cursor.collect_while(is_identifier);
        let Some(value) = as_number(&word) else {
            return TokenKind::from_word(&word);
        };

        if self.cursor.peek() == Some('.') && self.cursor.peek_ahead(1).is_some_and(is_numeric) {
            self.cursor.advance();
            let fraction = self.cursor.collect_while(is_numeric);
            return format!("{}.{}", value, fraction)
                .parse()
                .map(TokenKind::Real)
                .unwrap_or(TokenKind::Integer(value));
        }

        TokenKind::Integer(value)
    }
}
