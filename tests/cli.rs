//! End-to-end checks of the `cpu-schedule` binary: stdin in, report out.

use std::io::Write;
use std::process::{Command, Output, Stdio};

const REFERENCE_INPUT: &str = include_str!("data/reference.in");
const REFERENCE_OUTPUT: &str = include_str!("data/reference.out");

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cpu-schedule"))
        .args(args)
        .env_remove("CPUSCHED_DISCIPLINES")
        .env_remove("CPUSCHED_PRIORITY")
        .env_remove("CPUSCHED_PARALLEL")
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

fn assert_failed(output: &Output, line: usize) {
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(&format!("malformed input at line {line}")),
        "stderr: {stderr}"
    );
}

#[test]
fn test_reference_report() {
    let output = run(&["--discipline", "fcfs,rr"], REFERENCE_INPUT);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), REFERENCE_OUTPUT);
}

#[test]
fn test_env_selects_disciplines() {
    let output = Command::new(env!("CARGO_BIN_EXE_cpu-schedule"))
        .env("CPUSCHED_DISCIPLINES", "fcfs,rr")
        .env_remove("CPUSCHED_PRIORITY")
        .env_remove("CPUSCHED_PARALLEL")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            child
                .stdin
                .take()
                .unwrap()
                .write_all(REFERENCE_INPUT.as_bytes())?;
            child.wait_with_output()
        })
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), REFERENCE_OUTPUT);
}

#[test]
fn test_missing_process_line_fails() {
    assert_failed(&run(&[], "2\n0 5 2\n"), 3);
}

#[test]
fn test_zero_quantum_fails() {
    assert_failed(&run(&[], "1\n0 5 2\n0\n"), 3);
}

#[test]
fn test_json_output() {
    let output = run(&["--json", "--discipline", "sjf"], REFERENCE_INPUT);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["sections"][0]["result"]["discipline"], "sjf");
    assert_eq!(json["best_discipline"], "sjf");
}

#[test]
fn test_bad_flag_exits_with_usage_error() {
    let output = run(&["--discipline", "lottery"], REFERENCE_INPUT);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
