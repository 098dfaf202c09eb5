#![cfg(feature = "cli")]

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use common::temp_path;

mod common;


const SYNOPSIS: &str = "synopsis:
  scm [ - | -c form | file ] ...

    -          reads from standard input.
    -c form    reads from the string form.
    file       reads from the file.

";

fn scm(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_scm"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn no_sources_is_a_usage_error() {
    let output = scm(&[], "");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), SYNOPSIS);
    assert!(output.stdout.is_empty());
}

#[test]
fn bad_flags_are_usage_errors() {
    for args in &[&["-c"][..], &["-q"][..], &["-c", "1", "-c"][..]] {
        let output = scm(args, "");
        assert_eq!(output.status.code(), Some(1), "{:?}", args);
        assert_eq!(stderr(&output), SYNOPSIS, "{:?}", args);
    }
}

#[test]
fn inline_form() {
    let output = scm(&["-c", "(1 2)"], "");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "(\n1\n2\n)\n");
}

#[test]
fn dump_format() {
    let output = scm(&["-c", "nil true false () \"s t\" sym -5"], "");
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "nil ()\ntrue #t\nfalse #f\nnil ()\n\"s t\"\nsym\n-5\n"
    );
}

#[test]
fn sources_in_order() {
    let path = temp_path("cli_sources.scm");
    fs::write(&path, "from-file").unwrap();
    let path_arg = path.to_string_lossy().to_string();

    let output = scm(&["-c", "first", "-", &path_arg, "-c", "last"], "from-stdin");
    fs::remove_file(&path).unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "first\nfrom-stdin\nfrom-file\nlast\n");
}

#[test]
fn read_errors_exit_after_earlier_output() {
    let output = scm(&["-c", "1 288230376151711744 2"], "");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "1\n");

    let err = stderr(&output);
    assert!(err.starts_with("error-003: integer literal overflow: <mem:"));
    assert!(err.ends_with(":1:2\n"));
}

#[test]
fn missing_file() {
    let path = temp_path("cli_missing.scm");
    let path_arg = path.to_string_lossy().to_string();

    let output = scm(&[&path_arg], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error-000: "));
    assert!(stderr(&output).contains(&path_arg));
}

#[test]
fn piped_diagnostics_are_plain() {
    let output = Command::new(env!("CARGO_BIN_EXE_scm"))
        .args(&["-c", "288230376151711744"])
        .env_remove("NO_COLOR")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let err = stderr(&output);
    assert!(!err.contains('\u{1b}'));
    assert!(err.starts_with("error-003: integer literal overflow: "));
}
