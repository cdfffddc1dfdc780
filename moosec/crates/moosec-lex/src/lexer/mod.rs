//! Lexer module.
//!
//! The scanner is split by token family:
//! - `core` - Lexer struct, dispatch and error recovery
//! - `comment` - whitespace, separator and comment skipping
//! - `identifier` - identifiers, keywords and numeric literals
//! - `string` - string and character literals, escapes, interpolation
//! - `operator` - operator runs, `...` and single-character punctuation

mod comment;
mod core;
mod identifier;
mod operator;
mod string;

pub use core::Lexer;
