//! Integration tests for interpreter
//!
//! Tests the compile-then-run pipeline from source text

use core_types::Value;
use interpreter::{InterpretError, InterpretResult, Vm};

fn eval(source: &str) -> Result<Value, InterpretError> {
    Vm::with_output(Vec::new()).interpret(source)
}

fn eval_output(source: &str) -> String {
    let mut vm = Vm::with_output(Vec::new());
    vm.interpret(source).unwrap();
    String::from_utf8(vm.into_output()).unwrap()
}

#[test]
fn test_precedence() {
    assert_eq!(eval("2 + 3 * 4").unwrap(), Value::Number(14.0));
    assert_eq!(eval("(2 + 3) * 4").unwrap(), Value::Number(20.0));
    assert_eq!(eval("-2 + 3").unwrap(), Value::Number(1.0));
    assert_eq!(eval("-2 * 3").unwrap(), Value::Number(-6.0));
}

#[test]
fn test_printed_results() {
    assert_eq!(eval_output("2 + 3 * 4"), "14\n");
    assert_eq!(eval_output("1 / 4"), "0.25\n");
    assert_eq!(eval_output("1 / 0"), "inf\n");
    assert_eq!(eval_output("-1 / 0"), "-inf\n");
    assert_eq!(eval_output("!nil"), "true\n");
    assert_eq!(eval_output("nil"), "nil\n");
    assert_eq!(eval_output("\"st\" + \"ring\""), "string\n");
}

#[test]
fn test_comparisons() {
    assert_eq!(eval("1 < 2").unwrap(), Value::Boolean(true));
    assert_eq!(eval("2 <= 2").unwrap(), Value::Boolean(true));
    assert_eq!(eval("3 >= 4").unwrap(), Value::Boolean(false));
    assert_eq!(eval("3 > 2 == true").unwrap(), Value::Boolean(true));
    assert_eq!(eval("1 != 2").unwrap(), Value::Boolean(true));
}

#[test]
fn test_equality_is_type_sensitive() {
    assert_eq!(eval("1 == \"1\"").unwrap(), Value::Boolean(false));
    assert_eq!(eval("nil == false").unwrap(), Value::Boolean(false));
    assert_eq!(eval("nil == nil").unwrap(), Value::Boolean(true));
    assert_eq!(eval("\"a\" + \"b\" == \"ab\"").unwrap(), Value::Boolean(true));
}

#[test]
fn test_comparison_type_error() {
    let err = eval("1 < \"2\"").unwrap_err();
    assert_eq!(err.result(), InterpretResult::RuntimeError);
    assert_eq!(err.to_string(), "Operands must be numbers.\n[line 1] in script");
}

#[test]
fn test_runtime_error_line_on_multiline_source() {
    let err = eval("1 +\n2 *\n\"x\"").unwrap_err();
    match err {
        InterpretError::Runtime(err) => {
            assert_eq!(err.message, "Operands must be numbers.");
            assert_eq!(err.line, 3);
        }
        other => panic!("expected runtime error, got {:?}", other),
    }
}

#[test]
fn test_concatenation_crosses_inline_threshold() {
    let value = eval("\"0123456789\" + \"0123456789abcd\"").unwrap();
    let s = value.as_string();
    assert_eq!(s.len(), 24);
    assert!(!s.is_inline());

    let value = eval("\"0123456789\" + \"0123456789abc\"").unwrap();
    assert!(value.as_string().is_inline());
}

#[test]
fn test_compile_error_never_runs() {
    let mut vm = Vm::with_output(Vec::new());
    let err = vm.interpret("1 +").unwrap_err();
    assert_eq!(err.result(), InterpretResult::CompileError);
    assert!(vm.output().is_empty());
}

#[test]
fn test_unterminated_string() {
    let err = eval("\"abc").unwrap_err();
    assert_eq!(err.to_string(), "[line 1] Error: Unterminated string");
}

#[test]
fn test_vm_reusable_across_calls() {
    let mut vm = Vm::with_output(Vec::new());
    vm.interpret("1 + 1").unwrap();
    vm.interpret("-nil").unwrap_err();
    vm.interpret("\"ok\"").unwrap();
    assert_eq!(String::from_utf8(vm.into_output()).unwrap(), "2\nok\n");
}
