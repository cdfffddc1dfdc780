//! End-to-End Tests for the moosec driver
//!
//! These tests run the `moosec` binary against the fixtures under
//! `tests/e2e/fixtures` and check its output and exit status.

mod cli_tests;
mod lexing_tests;

use std::path::PathBuf;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("e2e")
        .join("fixtures")
}

/// Get the path to the moosec binary
pub fn moosec_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_moosec"))
}
