//! End-to-end CLI runtime tests
//!
//! Drives the Runtime the way the `rlox` binary does.

use std::fs;

use lox_cli::{CliError, Runtime};
use tempfile::TempDir;

fn run_file(source: &str) -> (Result<(), CliError>, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("script.lox");
    fs::write(&path, source).unwrap();

    let mut runtime = Runtime::with_output(Vec::new());
    let result = runtime.execute_file(&path).map(drop);
    let out = String::from_utf8(runtime.into_output()).unwrap();
    (result, out)
}

#[test]
fn test_file_ok() {
    let (result, out) = run_file("\"total: \" + \"ok\"\n");
    assert!(result.is_ok());
    assert_eq!(out, "total: ok\n");
}

#[test]
fn test_file_compile_error_exit_code() {
    let (result, out) = run_file("1 2");
    assert_eq!(result.unwrap_err().exit_code(), 65);
    assert!(out.is_empty());
}

#[test]
fn test_file_runtime_error_exit_code() {
    let (result, out) = run_file("\n\n1 + nil");
    let err = result.unwrap_err();
    assert_eq!(err.exit_code(), 70);
    assert!(err.to_string().ends_with("[line 3] in script"));
    assert!(out.is_empty());
}

#[test]
fn test_eval_lines_independently() {
    let mut runtime = Runtime::with_output(Vec::new());
    for line in ["1 + 1", "(", "\"x\" + \"y\"", "-true", "nil"] {
        let _ = runtime.execute_string(line);
    }
    let out = String::from_utf8(runtime.into_output()).unwrap();
    assert_eq!(out, "2\nxy\nnil\n");
}

#[test]
fn test_print_bytecode_then_result() {
    let mut runtime = Runtime::with_output(Vec::new()).with_print_bytecode(true);
    runtime.execute_string("1 < 2").unwrap();
    let out = String::from_utf8(runtime.into_output()).unwrap();
    assert_eq!(
        out,
        "== code ==\n\
         0000    1 constant            0 '1'\n\
         0002    | constant            1 '2'\n\
         0004    | less\n\
         0005    | return\n\
         true\n"
    );
}
