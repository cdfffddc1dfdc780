//! moosec-util - Core Utilities and Foundation Types
//!
//! This crate holds the types shared by every phase of the Moose compiler
//! front end:
//!
//! - [`span`] - source positions ([`SourceLocation`]), the spans tokens cover
//!   ([`SourceRange`]) and loaded source files ([`SourceFile`])
//! - [`diagnostic`] - error reporting ([`Handler`],
//!   [`DiagnosticBuilder`], [`DiagnosticCode`])
//! - [`error`] - errors raised while loading source text
//!
//! # Example
//!
//! ```
//! use moosec_util::{DiagnosticBuilder, Handler, SourceLocation, SourceRange};
//!
//! let handler = Handler::new();
//! let start = SourceLocation::start_of(None);
//! let range = SourceRange::new(start.clone(), start);
//!
//! DiagnosticBuilder::error("unexpected EOF")
//!     .span(range)
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{SourceError, SourceResult};
pub use span::{SourceFile, SourceLocation, SourceRange};
