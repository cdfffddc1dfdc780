//! CLI Interface E2E Tests
//!
//! Help and version output, input validation, configuration files and
//! exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::{fixtures_dir, moosec_bin};

fn moosec() -> Command {
    let mut cmd = Command::new(moosec_bin());
    cmd.env_remove("MOOSEC_CONFIG")
        .env_remove("MOOSEC_VERBOSE")
        .env_remove("MOOSEC_NO_COLOR");
    cmd
}

#[test]
fn test_cli_help() {
    moosec()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("--emit")));
}

#[test]
fn test_cli_version() {
    moosec()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("moosec "));
}

#[test]
fn test_cli_requires_inputs() {
    moosec().assert().failure();
}

#[test]
fn test_cli_invalid_input_is_skipped() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let notes = temp_dir.path().join("notes.txt");
    std::fs::write(&notes, "var x = 1").expect("Failed to write input");

    moosec()
        .arg(&notes)
        .arg(fixtures_dir().join("hello.moose"))
        .assert()
        .success()
        .stderr(predicate::str::contains(format!("invalid input: {}", notes.display())))
        .stdout(predicate::str::contains("keyword var"));
}

#[test]
fn test_cli_missing_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    moosec()
        .arg(temp_dir.path().join("missing.moose"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: cannot read"))
        .stderr(predicate::str::contains("error: could not read 1 file(s)"));
}

#[test]
fn test_cli_missing_config_fails() {
    moosec()
        .arg("--config")
        .arg("/nonexistent/moosec.toml")
        .arg(fixtures_dir().join("hello.moose"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_cli_config_sets_emit() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = temp_dir.path().join("moosec.toml");
    std::fs::write(&config, "emit = \"none\"\n").expect("Failed to write config");

    moosec()
        .arg("--config")
        .arg(&config)
        .arg(fixtures_dir().join("hello.moose"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_flag_overrides_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = temp_dir.path().join("moosec.toml");
    std::fs::write(&config, "emit = \"none\"\n").expect("Failed to write config");

    moosec()
        .arg("--config")
        .arg(&config)
        .arg("--emit")
        .arg("tokens")
        .arg(fixtures_dir().join("hello.moose"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1:1  keyword var"));
}

#[test]
fn test_cli_config_from_environment() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = temp_dir.path().join("moosec.toml");
    std::fs::write(&config, "[lex]\nfail_on_error = false\n").expect("Failed to write config");

    moosec()
        .env("MOOSEC_CONFIG", &config)
        .arg(fixtures_dir().join("errors.moose"))
        .assert()
        .success()
        .stderr(predicate::str::contains("error[E1003]"));
}

#[test]
fn test_cli_lex_errors_fail() {
    moosec()
        .arg(fixtures_dir().join("errors.moose"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: found 2 lexical error(s)"));
}

#[test]
fn test_cli_time() {
    moosec()
        .arg("--time")
        .arg("--emit")
        .arg("none")
        .arg(fixtures_dir().join("hello.moose"))
        .assert()
        .success()
        .stderr(predicate::str::is_match(r"read: \d+\.\d\ds\.\nlex: \d+\.\d\ds\.\nemit: \d+\.\d\ds\.\ntotal: \d+\.\d\ds\.").unwrap());
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    moosec()
        .arg("--verbose")
        .arg("--no-color")
        .arg("--emit")
        .arg("json")
        .arg(fixtures_dir().join("hello.moose"))
        .assert()
        .success()
        .stderr(predicate::str::contains("lexed file"))
        .stdout(predicate::str::starts_with("["));
}
