//! Lexing Pipeline E2E Tests
//!
//! Token and diagnostic output for the fixture programs.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

use crate::{fixtures_dir, moosec_bin};

fn moosec() -> Command {
    let mut cmd = Command::new(moosec_bin());
    cmd.env_remove("MOOSEC_CONFIG").env_remove("MOOSEC_VERBOSE");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run moosec");
    String::from_utf8(output.stdout).expect("stdout is not UTF-8")
}

#[test]
fn test_hello_tokens() {
    let stdout = stdout_of(moosec().arg(fixtures_dir().join("hello.moose")));
    let lines: Vec<_> = stdout.lines().collect();

    assert_eq!(
        &lines[..5],
        [
            "1:1  keyword var",
            "1:5  identifier greeting",
            "1:14  operator =",
            "1:16  string \"hello\"",
            "1:23  newline",
        ]
    );
    assert_eq!(lines[5], "2:1  keyword if");
    assert!(lines.contains(&"2:13  operator =="));
    assert!(lines.contains(&"2:24  unknown \"{\""));
    assert!(lines.contains(&"2:31  left-paren"));
}

#[test]
fn test_literal_tokens() {
    let stdout = stdout_of(moosec().arg(fixtures_dir().join("literals.moose")));

    assert!(stdout.starts_with("1:30  newline\n"));
    assert!(stdout.contains("2:9  integer 42\n"));
    assert!(stdout.contains("2:13  semicolon\n"));
    assert!(stdout.contains("2:23  real 2.5\n"));
    assert!(stdout.contains(
        "3:9  interpolation { string \"n is \" } { identifier n, operator +, integer 1 } { string \"!\" }\n"
    ));
    assert!(stdout.contains("4:9  char 'A'\n"));
}

#[test]
fn test_json_output() {
    let stdout = stdout_of(
        moosec()
            .arg("--emit")
            .arg("json")
            .arg(fixtures_dir().join("literals.moose")),
    );

    let tokens: Value = serde_json::from_str(stdout.trim_end()).expect("stdout is not JSON");
    let tokens = tokens.as_array().expect("expected a token array");

    let interpolation = tokens
        .iter()
        .find(|token| token["kind"]["kind"] == "StringInterpolation")
        .expect("no interpolation token");
    let segments = interpolation["kind"]["value"].as_array().expect("segments");
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[1][0]["kind"]["value"], "n");

    let integer = tokens
        .iter()
        .find(|token| token["kind"]["kind"] == "Integer")
        .expect("no integer token");
    assert_eq!(integer["kind"]["value"], 42);
    assert_eq!(integer["range"]["start"]["line"], 2);
    assert_eq!(integer["range"]["start"]["column"], 9);
}

#[test]
fn test_diagnostics_are_rendered() {
    moosec()
        .arg(fixtures_dir().join("errors.moose"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("2:16  semicolon"))
        .stdout(predicate::str::contains("2:18  identifier ok"))
        .stderr(predicate::str::contains("error[E1003]: invalid character escape 'q'"))
        .stderr(predicate::str::contains("--> errors.moose:2:11"))
        .stderr(predicate::str::contains("  2 | var esc = \"\\q\" ; ok"))
        .stderr(predicate::str::contains(
            "error[E1002]: invalid character literal '\\x{1FF}' in source file",
        ))
        .stderr(predicate::str::contains("--> errors.moose:3:11"));
}

#[test]
fn test_multiple_files_keep_order() {
    let stdout = stdout_of(
        moosec()
            .arg("-j")
            .arg("2")
            .arg(fixtures_dir().join("literals.moose"))
            .arg(fixtures_dir().join("hello.moose")),
    );

    let headers: Vec<_> = stdout.lines().filter(|line| line.ends_with(".moose:")).collect();
    assert_eq!(headers.len(), 2);
    assert!(headers[0].ends_with("literals.moose:"));
    assert!(headers[1].ends_with("hello.moose:"));
}
