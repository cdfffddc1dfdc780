//! Operator and punctuation lexing.

use crate::chars::is_operator;
use crate::operator::BuiltinOperator;
use crate::token::TokenKind;
use crate::Lexer;

impl Lexer<'_> {
    /// Lexes `...`.
    pub(crate) fn lex_ellipsis(&mut self) -> TokenKind {
        self.cursor.advance_by(3);
        TokenKind::Ellipsis
    }

    /// Lexes a maximal run of operator characters.
    ///
    /// The whole run is looked up; there is no splitting into shorter
    /// operators, so `=-` is one unknown token rather than `=` and `-`.
    pub(crate) fn lex_operator(&mut self) -> TokenKind {
        let run = self.cursor.collect_while(is_operator);
        match BuiltinOperator::from_spelling(&run) {
            Some(op) => TokenKind::Operator(op),
            None => TokenKind::from_punctuation(&run),
        }
    }

    /// Lexes any other single character.
    pub(crate) fn lex_punctuation(&mut self) -> TokenKind {
        match self.cursor.advance() {
            Some(c) => TokenKind::from_punctuation(c.encode_utf8(&mut [0; 4])),
            None => TokenKind::Eof,
        }
    }
}
