//! Core lexer implementation.

use std::path::Path;
use std::sync::Arc;

use moosec_util::{DiagnosticBuilder, Handler, SourceFile, SourceLocation, SourceResult};
use tracing::{debug, trace};

use crate::chars::{is_identifier, is_line_separator, is_operator, is_space};
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};

/// Lexer for the Moose programming language.
///
/// One lexer scans one file. Malformed tokens are reported to the handler
/// and skipped; the token stream itself never contains errors.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor,

    /// Error handler for reporting lexical errors.
    handler: &'a Handler,

    /// Location where the token being scanned starts.
    pub(crate) token_start: SourceLocation,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer for in-memory source with no file path.
    pub fn new(source: &str, handler: &'a Handler) -> Self {
        Self::from_parts(source, None, handler)
    }

    /// Creates a lexer whose locations carry `path`.
    pub fn with_path(source: &str, path: impl Into<Arc<str>>, handler: &'a Handler) -> Self {
        Self::from_parts(source, Some(path.into()), handler)
    }

    /// Reads `path` and creates a lexer over its content.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`](moosec_util::SourceError) when the file
    /// cannot be read or is not UTF-8.
    pub fn from_file(path: impl AsRef<Path>, handler: &'a Handler) -> SourceResult<Self> {
        let file = SourceFile::load(path)?;
        Ok(Self::from_source_file(&file, handler))
    }

    /// Creates a lexer over an already loaded file.
    pub fn from_source_file(file: &SourceFile, handler: &'a Handler) -> Self {
        Self::from_parts(file.content(), Some(file.path()), handler)
    }

    fn from_parts(source: &str, path: Option<Arc<str>>, handler: &'a Handler) -> Self {
        let cursor = Cursor::new(source, path);
        let token_start = cursor.location().clone();
        Self {
            cursor,
            handler,
            token_start,
        }
    }

    /// Lexes the whole input, in source order, without the final `Eof`.
    ///
    /// # Example
    ///
    /// ```
    /// use moosec_lex::{Lexer, TokenKind};
    /// use moosec_util::Handler;
    ///
    /// let handler = Handler::new();
    /// let kinds: Vec<_> = Lexer::new("if x var", &handler)
    ///     .lex()
    ///     .into_iter()
    ///     .map(|token| token.kind)
    ///     .collect();
    /// assert_eq!(kinds, vec![TokenKind::If, TokenKind::Identifier("x".into()), TokenKind::Var]);
    /// ```
    pub fn lex(&mut self) -> Vec<Token> {
        let tokens: Vec<Token> = self.by_ref().collect();
        debug!(
            file = self.cursor.location().basename(),
            tokens = tokens.len(),
            errors = self.handler.error_count(),
            "lexed file"
        );
        tokens
    }

    /// Returns the next token, reporting and skipping malformed ones.
    ///
    /// Returns a [`TokenKind::Eof`] token once the input is exhausted. Each
    /// failed attempt that consumed nothing skips one character, so repeated
    /// calls always reach the end.
    pub fn next_token(&mut self) -> Token {
        loop {
            let offset = self.cursor.offset();
            match self.advance_to_next_token() {
                Ok(token) => {
                    trace!(kind = %token.kind, at = %token.range.start, "token");
                    return token;
                },
                Err(err) => {
                    self.report(&err);
                    if self.cursor.offset() == offset {
                        self.cursor.advance();
                    }
                },
            }
        }
    }

    /// Scans one token, or fails with the error that aborted it.
    ///
    /// Whitespace, comments and the separators after a newline or semicolon
    /// are consumed along the way. Used directly by string interpolation,
    /// which propagates the first error of an embedded expression.
    pub fn advance_to_next_token(&mut self) -> LexResult<Token> {
        self.skip_trivia();
        self.token_start = self.cursor.location().clone();

        let Some(c) = self.cursor.peek() else {
            return Ok(self.finish(TokenKind::Eof));
        };

        if is_line_separator(c) {
            self.cursor.advance();
            let kind = if c == ';' {
                TokenKind::Semicolon
            } else {
                TokenKind::Newline
            };
            let token = self.finish(kind);
            self.cursor
                .advance_while(|c| is_space(c) || is_line_separator(c));
            return Ok(token);
        }

        let kind = match c {
            '\'' => self.lex_char()?,
            '"' => self.lex_string()?,
            c if is_identifier(c) => self.lex_word(),
            _ if self.cursor.starts_with("...") => self.lex_ellipsis(),
            c if is_operator(c) => self.lex_operator(),
            _ => self.lex_punctuation(),
        };

        Ok(self.finish(kind))
    }

    /// Builds a token covering `[token_start, current)`.
    pub(crate) fn finish(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.cursor.range_from(self.token_start.clone()))
    }

    /// Reports a lexical error covering the token that failed.
    fn report(&self, err: &LexError) {
        let mut diagnostic = DiagnosticBuilder::error(err.to_string())
            .code(err.code())
            .span(self.cursor.range_from(self.token_start.clone()));
        if let Some(help) = err.help() {
            diagnostic = diagnostic.help(help);
        }
        diagnostic.emit(self.handler);
    }

    /// Location of the next unread character.
    pub fn location(&self) -> &SourceLocation {
        self.cursor.location()
    }

    /// The decoded source characters, for slicing token ranges.
    pub fn source(&self) -> &[char] {
        self.cursor.chars()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
