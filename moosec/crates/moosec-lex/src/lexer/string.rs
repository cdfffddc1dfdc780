//! String and character literal lexing.
//!
//! Both literal forms decode the same escapes: `\n`, `\t`, `\r`, `\"` and
//! `\x{H..H}` for one byte. A string may also embed expressions with
//! `\( … )`; their tokens are lexed recursively on the same cursor.

use std::mem;

use moosec_util::SourceRange;

use crate::chars::is_hexadecimal;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Remaining stack below which an interpolation continues on a new segment.
const STACK_RED_ZONE: usize = 64 * 1024;

/// Size of each stack segment allocated for nested interpolations.
const STACK_SEGMENT: usize = 1024 * 1024;

impl Lexer<'_> {
    /// Lexes a character literal holding one byte.
    pub(crate) fn lex_char(&mut self) -> LexResult<TokenKind> {
        self.cursor.advance();
        let c = self.read_char()?;
        let byte = u8::try_from(c).map_err(|_| LexError::InvalidCharacterLiteral(c.to_string()))?;

        if !self.cursor.advance_if(|c| c == '\'') {
            return Err(LexError::InvalidCharacterLiteral(c.to_string()));
        }
        Ok(TokenKind::Char(byte))
    }

    /// Lexes a string literal, with or without interpolation.
    ///
    /// On error the rest of the literal is skipped so scanning resumes after
    /// its closing quote.
    pub(crate) fn lex_string(&mut self) -> LexResult<TokenKind> {
        let start = self.token_start.clone();
        self.cursor.advance();

        let result = self.lex_string_body();
        self.token_start = start;
        if result.is_err() {
            self.skip_string_rest();
        }
        result
    }

    fn lex_string_body(&mut self) -> LexResult<TokenKind> {
        let mut segments: Vec<Vec<Token>> = Vec::new();
        let mut text = String::new();
        let mut text_start = self.cursor.location().clone();

        let text_end = loop {
            match self.cursor.peek() {
                None => return Err(LexError::UnexpectedEof),
                Some('"') => {
                    let end = self.cursor.location().clone();
                    self.cursor.advance();
                    break end;
                },
                Some('\\') if self.cursor.peek_ahead(1) == Some('(') => {
                    if !text.is_empty() {
                        let range = self.cursor.range_from(text_start);
                        segments.push(vec![Token::new(TokenKind::String(mem::take(&mut text)), range)]);
                    }
                    self.cursor.advance_by(2);
                    segments.push(self.lex_interpolation()?);
                    text_start = self.cursor.location().clone();
                },
                Some(_) => text.push(self.read_char()?),
            }
        };

        if segments.is_empty() {
            return Ok(TokenKind::String(text));
        }
        if !text.is_empty() {
            let range = SourceRange::new(text_start, text_end);
            segments.push(vec![Token::new(TokenKind::String(text), range)]);
        }
        Ok(TokenKind::StringInterpolation(segments))
    }

    /// Lexes the tokens of one `\( … )` segment, up to and including the
    /// matching `)`.
    ///
    /// Strings nested inside the segment recurse back here, so each nested
    /// token is scanned on a stack that grows on the heap when it runs low.
    fn lex_interpolation(&mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut depth = 0usize;

        loop {
            self.skip_trivia();
            match self.cursor.peek() {
                None => return Err(LexError::UnexpectedEof),
                Some(')') if depth == 0 => {
                    self.cursor.advance();
                    return Ok(tokens);
                },
                Some(_) => {},
            }

            let token =
                stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT, || self.advance_to_next_token())?;
            match token.kind {
                TokenKind::Eof => return Err(LexError::UnexpectedEof),
                TokenKind::LeftParen => depth += 1,
                TokenKind::RightParen => depth = depth.saturating_sub(1),
                _ => {},
            }
            tokens.push(token);
        }
    }

    /// Decodes one possibly escaped character.
    pub(crate) fn read_char(&mut self) -> LexResult<char> {
        let c = self.cursor.advance().ok_or(LexError::UnexpectedEof)?;
        if c != '\\' {
            return Ok(c);
        }

        match self.cursor.advance().ok_or(LexError::UnexpectedEof)? {
            'n' => Ok('\n'),
            't' => Ok('\t'),
            'r' => Ok('\r'),
            '"' => Ok('"'),
            'x' => self.read_hex_escape(),
            other => Err(LexError::InvalidEscape(other)),
        }
    }

    /// Decodes the `{H..H}` part of a `\x` escape into one byte.
    fn read_hex_escape(&mut self) -> LexResult<char> {
        self.expect('{')?;
        let digits = self.cursor.collect_while(is_hexadecimal);
        self.expect('}')?;

        u8::from_str_radix(&digits, 16)
            .map(char::from)
            .map_err(|_| LexError::InvalidCharacterLiteral(format!("\\x{{{}}}", digits)))
    }

    fn expect(&mut self, expected: char) -> LexResult<()> {
        match self.cursor.peek() {
            Some(c) if c == expected => {
                self.cursor.advance();
                Ok(())
            },
            Some(c) => Err(LexError::InvalidCharacter(c)),
            None => Err(LexError::UnexpectedEof),
        }
    }

    /// Skips to just past the next unescaped `"`, or to the end of input.
    fn skip_string_rest(&mut self) {
        while let Some(c) = self.cursor.advance() {
            match c {
                '"' => return,
                '\\' => {
                    self.cursor.advance();
                },
                _ => {},
            }
        }
    }
}
