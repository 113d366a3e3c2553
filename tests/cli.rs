//! CLI contract tests: one JSON line on stdout, exit code 0/1.
//!
//! These exercise only the paths that never reach the PDF engine (usage and
//! validation failures), so they run anywhere — no pdfium library and no PDF
//! fixtures required.

use pdf2img::ConversionReport;
use std::process::{Command, Output};

fn run_bin(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pdf2img"))
        .args(args)
        .output()
        .expect("binary should spawn")
}

/// stdout must hold exactly one line, parseable as the report shape.
fn parse_single_json_line(output: &Output) -> ConversionReport {
    let stdout = String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "expected one JSON line, got: {stdout:?}");
    serde_json::from_str(lines[0]).expect("stdout line parses as a report")
}

#[test]
fn no_arguments_is_a_usage_error() {
    let out = run_bin(&[]);

    let report = parse_single_json_line(&out);
    assert!(!report.ok);
    assert_eq!(report.page_count, 0);
    assert!(report.rendered.is_empty());
    assert!(report.error.starts_with("usage:"), "got: {}", report.error);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn too_few_arguments_is_a_usage_error() {
    let out = run_bin(&["input.pdf", "outdir"]);

    let report = parse_single_json_line(&out);
    assert!(!report.ok);
    assert!(report.error.starts_with("usage:"));
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn empty_paths_fail_with_exact_error_and_no_writes() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("never-created");

    let out = run_bin(&["", out_dir.to_str().unwrap(), "10", "200"]);

    let report = parse_single_json_line(&out);
    assert!(!report.ok);
    assert_eq!(report.error, "missing input path or output dir");
    assert_eq!(report.page_count, 0);
    assert!(report.rendered.is_empty());
    assert_eq!(out.status.code(), Some(1));
    assert!(!out_dir.exists(), "no file writes on validation failure");
}

#[test]
fn whitespace_output_dir_fails_validation() {
    let out = run_bin(&["input.pdf", "   ", "10", "200"]);

    let report = parse_single_json_line(&out);
    assert_eq!(report.error, "missing input path or output dir");
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn non_numeric_limits_are_tolerated() {
    // Junk max_pages/dpi must not be a usage error; the run proceeds and
    // fails later for the nonexistent input, not for the numbers.
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such.pdf");
    let out_dir = dir.path().join("out");

    let out = run_bin(&[
        missing.to_str().unwrap(),
        out_dir.to_str().unwrap(),
        "lots",
        "very-high",
    ]);

    let report = parse_single_json_line(&out);
    assert!(!report.ok);
    assert!(!report.error.starts_with("usage:"), "got: {}", report.error);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn negative_limits_reach_the_normalizer() {
    // "-5" is free-form numeric text, not a flag: it must pass argument
    // parsing and get clamped (max_pages → 1, dpi → 72), so the run fails
    // only later, for the nonexistent input.
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such.pdf");
    let out_dir = dir.path().join("out");

    let out = run_bin(&[
        missing.to_str().unwrap(),
        out_dir.to_str().unwrap(),
        "-5",
        "-300",
    ]);

    let report = parse_single_json_line(&out);
    assert!(!report.ok);
    assert!(!report.error.starts_with("usage:"), "got: {}", report.error);
    assert_eq!(out.status.code(), Some(1));
}
