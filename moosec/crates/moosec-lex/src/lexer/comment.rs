//! Whitespace and comment skipping.

use crate::chars::is_space;
use crate::Lexer;

impl Lexer<'_> {
    /// Skips spaces and comments in front of the next token.
    ///
    /// Line feeds are left alone: they are tokens. A line comment stops
    /// before its line feed, so the line still ends with a newline token.
    pub(crate) fn skip_trivia(&mut self) {
        loop {
            self.cursor.advance_while(is_space);

            if self.cursor.starts_with("//") {
                self.cursor.advance_while(|c| c != '\n');
            } else if self.cursor.starts_with("/*") {
                self.skip_block_comment();
            } else {
                return;
            }
        }
    }

    /// Skips a `/* … */` comment. Block comments do not nest; an unterminated
    /// one runs to the end of the input.
    fn skip_block_comment(&mut self) {
        self.cursor.advance_by(2);
        while !self.cursor.is_at_end() && !self.cursor.starts_with("*/") {
            self.cursor.advance();
        }
        self.cursor.advance_by(2);
    }
}
