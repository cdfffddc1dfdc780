//! Error handling for the moosec driver.
//!
//! Lexical errors are not driver errors: they are diagnostics collected per
//! file. A [`DriverError`] is something that stops a file (or the whole run)
//! from being processed at all.

use moosec_util::SourceError;
use thiserror::Error;

/// Main error type for the moosec driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Configuration could not be found, parsed or saved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A source file could not be loaded.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Token serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The lexing thread pool could not be started.
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
