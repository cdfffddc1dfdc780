//! Span module - Source location tracking.
//!
//! This module provides the position types attached to every token:
//! a [`SourceLocation`] marks one point of one file, a [`SourceRange`] is the
//! half-open span `[start, end)` a token covers.
//!
//! # Examples
//!
//! ```
//! use moosec_util::span::{SourceLocation, SourceRange};
//!
//! let mut loc = SourceLocation::start_of(Some("main.moose".into()));
//! let start = loc.clone();
//! loc.advance('x');
//!
//! let range = SourceRange::new(start, loc);
//! assert_eq!(range.len(), 1);
//! assert_eq!(range.to_string(), "main.moose:1:1-1:2");
//! ```

mod source_file;

pub use source_file::SourceFile;

use std::cmp::Ordering;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// One point in one source file.
///
/// Lines and columns are 1-based, `char_offset` counts Unicode scalar
/// values from the start of the file. A location only moves forward, through
/// [`SourceLocation::advance`].
///
/// # Equality and ordering
///
/// Two locations are equal when their offsets match, or when their line and
/// column both match. `a < b` holds when `a` has the smaller offset, else
/// when it has the smaller line, else when it has the smaller column. The two
/// relations do not form a total order: see the tests at the bottom of this
/// module for the combinations that disagree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Path of the originating file, if any
    pub file_path: Option<Arc<str>>,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
    /// Offset from the start of the file, in characters
    pub char_offset: usize,
}

impl SourceLocation {
    /// Sentinel location used by zero-width ranges.
    pub const ZERO: SourceLocation = SourceLocation {
        file_path: None,
        line: 0,
        column: 0,
        char_offset: 0,
    };

    /// Create a location at the given line and column, offset 0, no file.
    ///
    /// # Examples
    ///
    /// ```
    /// use moosec_util::span::SourceLocation;
    ///
    /// let loc = SourceLocation::new(3, 7);
    /// assert_eq!(loc.to_string(), "unknown:3:7");
    /// ```
    #[inline]
    pub fn new(line: u32, column: u32) -> Self {
        Self {
            file_path: None,
            line,
            column,
            char_offset: 0,
        }
    }

    /// The first position of a file: line 1, column 1, offset 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use moosec_util::span::SourceLocation;
    ///
    /// let loc = SourceLocation::start_of(Some("lib/main.moose".into()));
    /// assert_eq!((loc.line, loc.column, loc.char_offset), (1, 1, 0));
    /// assert_eq!(loc.to_string(), "main.moose:1:1");
    /// ```
    #[inline]
    pub fn start_of(file_path: Option<Arc<str>>) -> Self {
        Self {
            file_path,
            line: 1,
            column: 1,
            char_offset: 0,
        }
    }

    /// Set the absolute character offset.
    #[inline]
    pub fn with_offset(mut self, char_offset: usize) -> Self {
        self.char_offset = char_offset;
        self
    }

    /// Step past one consumed character.
    ///
    /// A line feed moves to column 1 of the next line; anything else moves
    /// one column right. The offset always grows by one.
    ///
    /// # Examples
    ///
    /// ```
    /// use moosec_util::span::SourceLocation;
    ///
    /// let mut loc = SourceLocation::start_of(None);
    /// loc.advance('a');
    /// loc.advance('\n');
    /// assert_eq!((loc.line, loc.column, loc.char_offset), (2, 1, 2));
    /// ```
    #[inline]
    pub fn advance(&mut self, consumed: char) {
        if consumed == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.char_offset += 1;
    }

    /// The raw `<` relation: smaller offset, else smaller line, else smaller
    /// column.
    ///
    /// # Examples
    ///
    /// ```
    /// use moosec_util::span::SourceLocation;
    ///
    /// let a = SourceLocation::new(1, 5).with_offset(4);
    /// let b = SourceLocation::new(2, 1).with_offset(10);
    /// assert!(a.precedes(&b));
    /// assert!(!b.precedes(&a));
    /// ```
    pub fn precedes(&self, other: &SourceLocation) -> bool {
        if self.char_offset < other.char_offset {
            return true;
        }
        if self.line < other.line {
            return true;
        }
        self.column < other.column
    }

    /// File name without its directories, or `unknown`.
    pub fn basename(&self) -> &str {
        self.file_path
            .as_deref()
            .and_then(|path| Path::new(path).file_name())
            .and_then(|name| name.to_str())
            .unwrap_or("unknown")
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for SourceLocation {
    fn eq(&self, other: &Self) -> bool {
        if self.char_offset == other.char_offset {
            return true;
        }
        self.line == other.line && self.column == other.column
    }
}

impl PartialOrd for SourceLocation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.precedes(other) {
            Some(Ordering::Less)
        } else if other.precedes(self) {
            Some(Ordering::Greater)
        } else if self == other {
            Some(Ordering::Equal)
        } else {
            None
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.basename(), self.line, self.column)
    }
}

/// The half-open span `[start, end)` covered by a token.
///
/// # Examples
///
/// ```
/// use moosec_util::span::{SourceLocation, SourceRange};
///
/// assert!(SourceRange::ZERO.is_empty());
///
/// let start = SourceLocation::new(1, 1);
/// let end = SourceLocation::new(1, 4).with_offset(3);
/// let range = SourceRange::new(start, end);
/// assert!(range.contains(2));
/// assert!(!range.contains(3));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceRange {
    /// First location covered
    pub start: SourceLocation,
    /// Location just past the last character covered
    pub end: SourceLocation,
}

impl SourceRange {
    /// Zero-width sentinel range.
    pub const ZERO: SourceRange = SourceRange {
        start: SourceLocation::ZERO,
        end: SourceLocation::ZERO,
    };

    /// Create a range from two locations.
    #[inline]
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        Self { start, end }
    }

    /// Number of characters covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.char_offset.saturating_sub(self.start.char_offset)
    }

    /// Returns true if the range covers no characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if this range covers a character offset.
    #[inline]
    pub fn contains(&self, char_offset: usize) -> bool {
        self.start.char_offset <= char_offset && char_offset < self.end.char_offset
    }

    /// The characters of `source` covered by this range, clamped to its
    /// bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use moosec_util::span::{SourceLocation, SourceRange};
    ///
    /// let chars: Vec<char> = "var x".chars().collect();
    /// let range = SourceRange::new(
    ///     SourceLocation::new(1, 5).with_offset(4),
    ///     SourceLocation::new(1, 6).with_offset(5),
    /// );
    /// assert_eq!(range.slice(&chars), &['x']);
    /// ```
    pub fn slice<'a>(&self, source: &'a [char]) -> &'a [char] {
        let end = self.end.char_offset.min(source.len());
        let start = self.start.char_offset.min(end);
        &source[start..end]
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}:{}", self.start, self.end.line, self.end.column)
    }
}
