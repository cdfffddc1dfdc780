//! Character cursor for traversing source code.
//!
//! The cursor owns the decoded characters of one file and the
//! [`SourceLocation`] of the next unread character. Positions only move
//! forward, one character at a time.

use std::sync::Arc;

use moosec_util::{SourceLocation, SourceRange};

/// A cursor over the characters of one source file.
///
/// # Example
///
/// ```
/// use moosec_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x", None);
/// assert_eq!(cursor.peek(), Some('v'));
/// let word = cursor.collect_while(|c| c.is_ascii_alphabetic());
/// assert_eq!(word, "var");
/// assert_eq!(cursor.location().column, 4);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor {
    /// Decoded source characters.
    chars: Vec<char>,

    /// Index of the next unread character.
    index: usize,

    /// Location of the next unread character.
    location: SourceLocation,
}

impl Cursor {
    /// Creates a cursor at line 1, column 1 of `source`.
    pub fn new(source: &str, file_path: Option<Arc<str>>) -> Self {
        Self {
            chars: source.chars().collect(),
            index: 0,
            location: SourceLocation::start_of(file_path),
        }
    }

    /// Returns the next unread character.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    /// Returns the character `offset` positions past the next unread one.
    ///
    /// # Example
    ///
    /// ```
    /// use moosec_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("ab", None);
    /// assert_eq!(cursor.peek_ahead(1), Some('b'));
    /// assert_eq!(cursor.peek_ahead(2), None);
    /// ```
    #[inline]
    pub fn peek_ahead(&self, offset: usize) -> Option<char> {
        self.chars.get(self.index + offset).copied()
    }

    /// Returns true if the unread input begins with `text`.
    pub fn starts_with(&self, text: &str) -> bool {
        let mut rest = self.chars[self.index..].iter();
        text.chars().all(|c| rest.next() == Some(&c))
    }

    /// Returns true if every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.index >= self.chars.len()
    }

    /// Consumes and returns the next character.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.index += 1;
        self.location.advance(c);
        Some(c)
    }

    /// Consumes up to `count` characters.
    pub fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Consumes the next character if `f` accepts it.
    pub fn advance_if(&mut self, f: impl FnOnce(char) -> bool) -> bool {
        match self.peek() {
            Some(c) if f(c) => {
                self.advance();
                true
            },
            _ => false,
        }
    }

    /// Consumes characters while `f` accepts them.
    pub fn advance_while(&mut self, mut f: impl FnMut(char) -> bool) {
        while self.advance_if(&mut f) {}
    }

    /// Consumes characters while `f` accepts them and returns them.
    pub fn collect_while(&mut self, mut f: impl FnMut(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if !f(c) {
                break;
            }
            text.push(c);
            self.advance();
        }
        text
    }

    /// Location of the next unread character.
    #[inline]
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// Number of characters consumed so far.
    #[inline]
    pub fn offset(&self) -> usize {
        self.index
    }

    /// The range from `start` to the current location.
    #[inline]
    pub fn range_from(&self, start: SourceLocation) -> SourceRange {
        SourceRange::new(start, self.location.clone())
    }

    /// All characters of the source.
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}
