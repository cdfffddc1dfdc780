//! Loaded source files.
//!
//! A [`SourceFile`] holds the decoded text of one `.moose` file together with
//! its line starts, so diagnostics can quote the offending line.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{SourceError, SourceResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use moosec_util::span::SourceFile;
///
/// let file = SourceFile::from_string("main.moose", "var x = 1\n");
/// assert_eq!(file.name(), "main.moose");
/// assert_eq!(file.line_at(1), Some("var x = 1"));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// Path or display name
    name: Arc<str>,
    /// Decoded content
    content: Arc<str>,
    /// Byte offsets at which each line starts
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Read and decode a file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Io`] if the file cannot be read and
    /// [`SourceError::InvalidUtf8`] if its bytes are not UTF-8.
    pub fn load(path: impl AsRef<Path>) -> SourceResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8(bytes).map_err(|err| SourceError::InvalidUtf8 {
            path: path.to_path_buf(),
            offset: err.utf8_error().valid_up_to(),
        })?;

        Ok(Self::from_string(path.to_string_lossy(), content))
    }

    /// Wrap in-memory text under a display name.
    pub fn from_string(name: impl Into<Arc<str>>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shared handle to the file name, suitable for a `SourceLocation`.
    #[inline]
    pub fn path(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// # Examples
    ///
    /// ```
    /// use moosec_util::span::SourceFile;
    ///
    /// let file = SourceFile::from_string("a.moose", "a\nb\nc");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get a specific source line (1-indexed), without its line ending.
    ///
    /// # Examples
    ///
    /// ```
    /// use moosec_util::span::SourceFile;
    ///
    /// let file = SourceFile::from_string("a.moose", "one\r\ntwo");
    /// assert_eq!(file.line_at(1), Some("one"));
    /// assert_eq!(file.line_at(2), Some("two"));
    /// assert_eq!(file.line_at(3), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        let start = *self.line_starts.get(line.checked_sub(1)?)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());

        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }
}

impl fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}
