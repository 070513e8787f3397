// Copyright (c) 2026 - present gotest2action contributors
// SPDX-License-Identifier: MIT

//! End-to-end tests for gotest2action
//!
//! These tests feed a recorded `go test -json` stream for the fixture
//! package in `tests/fixtures/dummytest` through the whole pipeline, both
//! through the library entry point and through the compiled binary.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use gotest2action::report::{MessageSource, ReportOptions, output_failures};
use similar_asserts::assert_eq;

const ROOT_PACKAGE: &str = "github.com/willabides/gotest2action";

const PASSTHROUGH: &str = "=== RUN   TestPassing
--- PASS: TestPassing (0.00s)
=== RUN   TestFailing
--- FAIL: TestFailing (0.00s)
=== RUN   TestWithSubs
=== RUN   TestWithSubs/passing
=== RUN   TestWithSubs/failing
=== RUN   TestWithSubs/passing_with_println_output
hello
world
=== RUN   TestWithSubs/failing_with_println_output
hello
world
--- FAIL: TestWithSubs (0.00s)
    --- PASS: TestWithSubs/passing (0.00s)
    --- FAIL: TestWithSubs/failing (0.00s)
    --- PASS: TestWithSubs/passing_with_println_output (0.00s)
    --- FAIL: TestWithSubs/failing_with_println_output (0.00s)
FAIL
FAIL\tgithub.com/willabides/gotest2action/tests/fixtures/dummytest\t0.008s
";

const ANNOTATIONS: &str = "::error file=./tests/fixtures/dummytest/dummy_test.go,line=8,col=0::=== RUN   TestFailing%0A--- FAIL: TestFailing (0.00s)%0A
::error file=./tests/fixtures/dummytest/dummy_test.go,line=12,col=0::=== RUN   TestWithSubs%0A--- FAIL: TestWithSubs (0.00s)%0A
::error file=./tests/fixtures/dummytest/dummy_test.go,line=12,col=0::=== RUN   TestWithSubs/failing%0A    --- FAIL: TestWithSubs/failing (0.00s)%0A
::error file=./tests/fixtures/dummytest/dummy_test.go,line=12,col=0::=== RUN   TestWithSubs/failing_with_println_output%0Ahello%0Aworld%0A    --- FAIL: TestWithSubs/failing_with_println_output (0.00s)%0A
";

fn manifest_dir() -> PathBuf {
    PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"))
}

fn fixture_stream() -> Vec<u8> {
    std::fs::read(manifest_dir().join("tests/fixtures/go-test-run.jsonl"))
        .expect("Failed to read go-test-run.jsonl fixture")
}

fn run_report(input: &[u8], options: &ReportOptions) -> (usize, String) {
    let mut output = Vec::new();
    let failures = output_failures(input, &mut output, options).expect("report should succeed");
    (failures, String::from_utf8(output).expect("utf8 output"))
}

// ============================================================================
// Library entry point
// ============================================================================

#[test]
fn test_failures_with_passthrough() {
    let options = ReportOptions {
        passthrough: true,
        ..ReportOptions::new(manifest_dir(), ROOT_PACKAGE)
    };

    let (failures, output) = run_report(&fixture_stream(), &options);

    assert_eq!(failures, 4);
    assert_eq!(output, format!("{PASSTHROUGH}{ANNOTATIONS}"));
}

#[test]
fn test_failures_without_passthrough() {
    let options = ReportOptions::new(manifest_dir(), ROOT_PACKAGE);

    let (failures, output) = run_report(&fixture_stream(), &options);

    assert_eq!(failures, 4);
    assert_eq!(output, ANNOTATIONS);
}

#[test]
fn test_root_package_mismatch_reports_without_location() {
    let options = ReportOptions::new(manifest_dir(), "github.com/someone/else");

    let (failures, output) = run_report(&fixture_stream(), &options);

    assert_eq!(failures, 4);
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "::error::=== RUN   TestFailing%0A--- FAIL: TestFailing (0.00s)%0A"
    );
    assert!(lines.iter().all(|line| line.starts_with("::error::")));
}

#[test]
fn test_missing_fixture_directory_reports_without_location() {
    let tempdir = tempfile::TempDir::new().expect("temp dir");
    let options = ReportOptions::new(tempdir.path(), ROOT_PACKAGE);

    let (failures, output) = run_report(&fixture_stream(), &options);

    assert_eq!(failures, 4);
    assert!(output.lines().all(|line| line.starts_with("::error::")));
}

#[test]
fn test_result_message_source() {
    let input = r#"{"Action":"run","Package":"m","Test":"TestA"}
{"Action":"output","Package":"m","Test":"TestA","Output":"lots of\noutput\n"}
{"Action":"fail","Package":"m","Test":"TestA","Output":"final words\n"}
"#;
    let options = ReportOptions {
        message: MessageSource::ResultOutput,
        ..ReportOptions::new("/nonexistent", "m")
    };

    let (failures, output) = run_report(input.as_bytes(), &options);

    assert_eq!(failures, 1);
    assert_eq!(output, "::error::final words%0A\n");
}

#[test]
fn test_failure_without_output_uses_placeholder() {
    let input = r#"{"Action":"fail","Package":"m","Test":"TestQuiet"}"#;
    let options = ReportOptions::new("/nonexistent", "m");

    let (failures, output) = run_report(input.as_bytes(), &options);

    assert_eq!(failures, 1);
    assert_eq!(output, "::error::a test failed with no output ¯\\_(ツ)_/¯ \n");
}

#[test]
fn test_unfinished_test_is_not_reported() {
    let input = r#"{"Action":"run","Package":"m","Test":"TestHung"}
{"Action":"output","Package":"m","Test":"TestHung","Output":"still running\n"}
{"Action":"output","Package":"m","Output":"panic: test timed out after 10m0s\n"}
{"Action":"fail","Package":"m","Elapsed":600}
"#;
    let options = ReportOptions::new("/nonexistent", "m");

    let (failures, output) = run_report(input.as_bytes(), &options);

    assert_eq!(failures, 0);
    assert_eq!(output, "");
}

#[test]
fn test_empty_input() {
    let options = ReportOptions::new("/nonexistent", "m");
    let (failures, output) = run_report(b"", &options);
    assert_eq!(failures, 0);
    assert_eq!(output, "");
}

// ============================================================================
// Binary
// ============================================================================

fn run_binary(args: &[&str], stdin: &[u8]) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_gotest2action"))
        .args(args)
        .current_dir(manifest_dir())
        .env_remove("GOTEST2ACTION_ROOT_PKG")
        .env_remove("GOTEST2ACTION_ROOT_PATH")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn gotest2action");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin)
        .expect("write stdin");
    child.wait_with_output().expect("wait for gotest2action")
}

#[test]
fn test_binary_exits_nonzero_on_failures() {
    let output = run_binary(
        &["--root-pkg", ROOT_PACKAGE, "--passthrough"],
        &fixture_stream(),
    );

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(output.stdout).expect("utf8"),
        format!("{PASSTHROUGH}{ANNOTATIONS}")
    );
}

#[test]
fn test_binary_exits_zero_without_failures() {
    let input = br#"{"Action":"run","Package":"m","Test":"TestA"}
{"Action":"pass","Package":"m","Test":"TestA"}
"#;
    let output = run_binary(&["--root-pkg", "m", "-q"], input);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_binary_missing_root_path_reports_without_location() {
    let input = br#"{"Action":"output","Package":"m","Test":"TestA","Output":"boom\n"}
{"Action":"fail","Package":"m","Test":"TestA"}
"#;
    let output = run_binary(&["--root-pkg", "m", "--root-path", "no/such/dir"], input);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(output.stdout).expect("utf8"),
        "::error::boom%0A\n"
    );
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("Root path not found"), "stderr: {stderr}");
}

#[test]
fn test_binary_missing_root_path_passing_run_exits_zero() {
    let input = br#"{"Action":"pass","Package":"m","Test":"TestA"}
"#;
    let output = run_binary(&["--root-pkg", "m", "--root-path", "no/such/dir"], input);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_binary_empty_root_package_still_reports() {
    let input = br#"{"Action":"fail","Package":"m","Test":"TestA"}
"#;
    let output = run_binary(&["--root-pkg", ""], input);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(output.stdout).expect("utf8"),
        "::error::a test failed with no output ¯\\_(ツ)_/¯ \n"
    );
}
