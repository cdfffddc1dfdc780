//! Core error types for moosec-util crate
//!
//! Loading a source file is the only fatal failure in the front end: a file
//! that cannot be read or decoded is never handed to the lexer.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for source loading operations
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file could not be read
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid UTF-8
    #[error("{} is not valid UTF-8 (first invalid byte at offset {offset})", path.display())]
    InvalidUtf8 {
        /// Path that was being decoded
        path: PathBuf,
        /// Byte offset of the first invalid sequence
        offset: usize,
    },
}

/// Result type alias for source loading operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;
