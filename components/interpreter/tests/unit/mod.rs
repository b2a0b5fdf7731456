//! Unit tests for interpreter components

use bytecode_system::{Chunk, OpCode};
use core_types::Value;
use interpreter::{Frame, InterpretError, InterpretResult, Vm, STACK_MAX};

fn constant_chunk(values: &[Value], ops: &[OpCode]) -> Chunk {
    let mut chunk = Chunk::new();
    for value in values {
        let idx = chunk.add_constant(value.clone());
        chunk.write_op(OpCode::Constant, 1);
        chunk.write(idx as u8, 1);
    }
    for op in ops {
        chunk.write_op(*op, 1);
    }
    chunk
}

fn run_chunk(chunk: &Chunk) -> Result<Value, InterpretError> {
    Vm::with_output(Vec::new()).run(chunk)
}

// ============================================================================
// VM Tests
// ============================================================================

#[test]
fn test_vm_creation() {
    let vm = Vm::with_output(Vec::new());
    assert!(vm.stack().is_empty());
    assert!(vm.output().is_empty());
}

#[test]
fn test_vm_literals() {
    for (op, expected) in [
        (OpCode::Nil, Value::Nil),
        (OpCode::True, Value::Boolean(true)),
        (OpCode::False, Value::Boolean(false)),
    ] {
        let chunk = constant_chunk(&[], &[op, OpCode::Return]);
        assert_eq!(run_chunk(&chunk).unwrap(), expected);
    }
}

#[test]
fn test_vm_subtract_operand_order() {
    let chunk = constant_chunk(
        &[Value::Number(10.0), Value::Number(4.0)],
        &[OpCode::Subtract, OpCode::Return],
    );
    assert_eq!(run_chunk(&chunk).unwrap(), Value::Number(6.0));
}

#[test]
fn test_vm_divide_operand_order() {
    let chunk = constant_chunk(
        &[Value::Number(1.0), Value::Number(4.0)],
        &[OpCode::Divide, OpCode::Return],
    );
    assert_eq!(run_chunk(&chunk).unwrap(), Value::Number(0.25));
}

#[test]
fn test_vm_greater_and_less() {
    let greater = constant_chunk(
        &[Value::Number(3.0), Value::Number(2.0)],
        &[OpCode::Greater, OpCode::Return],
    );
    assert_eq!(run_chunk(&greater).unwrap(), Value::Boolean(true));

    let less = constant_chunk(
        &[Value::Number(3.0), Value::Number(2.0)],
        &[OpCode::Less, OpCode::Return],
    );
    assert_eq!(run_chunk(&less).unwrap(), Value::Boolean(false));
}

#[test]
fn test_vm_equal_across_types() {
    let chunk = constant_chunk(
        &[Value::Number(1.0), Value::string("1")],
        &[OpCode::Equal, OpCode::Return],
    );
    assert_eq!(run_chunk(&chunk).unwrap(), Value::Boolean(false));
}

#[test]
fn test_vm_equal_strings_by_content() {
    let chunk = constant_chunk(
        &[Value::string("abc"), Value::string("abc")],
        &[OpCode::Equal, OpCode::Return],
    );
    assert_eq!(run_chunk(&chunk).unwrap(), Value::Boolean(true));
}

#[test]
fn test_vm_concatenate() {
    let chunk = constant_chunk(
        &[Value::string("foo"), Value::string("bar")],
        &[OpCode::Add, OpCode::Return],
    );
    assert_eq!(run_chunk(&chunk).unwrap(), Value::string("foobar"));
}

#[test]
fn test_vm_add_mixed_types_fails() {
    let chunk = constant_chunk(
        &[Value::string("a"), Value::Number(1.0)],
        &[OpCode::Add, OpCode::Return],
    );
    let err = run_chunk(&chunk).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Operands must be two numbers or two strings.\n[line 1] in script"
    );
    assert_eq!(err.result(), InterpretResult::RuntimeError);
}

#[test]
fn test_vm_not_truthiness() {
    let cases = [
        (Value::Nil, true),
        (Value::Boolean(false), true),
        (Value::Boolean(true), false),
        (Value::Number(0.0), false),
        (Value::string(""), false),
    ];
    for (value, expected) in cases {
        let chunk = constant_chunk(&[value], &[OpCode::Not, OpCode::Return]);
        assert_eq!(run_chunk(&chunk).unwrap(), Value::Boolean(expected));
    }
}

#[test]
fn test_vm_return_prints_value() {
    let chunk = constant_chunk(&[Value::string("hello")], &[OpCode::Return]);
    let mut vm = Vm::with_output(Vec::new());
    vm.run(&chunk).unwrap();
    assert_eq!(vm.into_output(), b"hello\n");
}

#[test]
fn test_vm_runtime_error_uses_failing_line() {
    let mut chunk = Chunk::new();
    chunk.write_op(OpCode::True, 1);
    chunk.write_op(OpCode::Negate, 7);
    chunk.write_op(OpCode::Return, 8);

    match run_chunk(&chunk) {
        Err(InterpretError::Runtime(err)) => assert_eq!(err.line, 7),
        other => panic!("expected runtime error, got {:?}", other),
    }
}

#[test]
fn test_vm_fills_stack_to_capacity() {
    let mut chunk = Chunk::new();
    for _ in 0..STACK_MAX {
        chunk.write_op(OpCode::True, 1);
    }
    chunk.write_op(OpCode::Return, 1);

    let mut vm = Vm::with_output(Vec::new());
    assert_eq!(vm.run(&chunk).unwrap(), Value::Boolean(true));
}

#[test]
fn test_vm_invalid_constant_index() {
    let mut chunk = Chunk::new();
    chunk.write_op(OpCode::Constant, 1);
    chunk.write(3, 1);

    let err = run_chunk(&chunk).unwrap_err();
    assert!(matches!(err, InterpretError::MalformedChunk { offset: 0, .. }));
}

#[test]
fn test_vm_run_resets_stack_between_runs() {
    let mut vm = Vm::with_output(Vec::new());
    let mut chunk = Chunk::new();
    chunk.write_op(OpCode::Nil, 1);
    chunk.write_op(OpCode::True, 1);
    chunk.write_op(OpCode::Return, 1);

    vm.run(&chunk).unwrap();
    assert_eq!(vm.stack(), &[Value::Nil]);
    vm.run(&chunk).unwrap();
    assert_eq!(vm.stack(), &[Value::Nil]);
}

#[test]
fn test_vm_equal_on_empty_stack_is_malformed() {
    let chunk = constant_chunk(&[], &[OpCode::Equal, OpCode::Return]);

    let mut vm = Vm::with_output(Vec::new());
    let err = vm.run(&chunk).unwrap_err();
    assert!(matches!(
        err,
        InterpretError::MalformedChunk {
            offset: 0,
            reason: "stack underflow"
        }
    ));
    assert_eq!(err.result(), InterpretResult::CompileError);
    assert!(vm.stack().is_empty());
    assert!(vm.output().is_empty());
}

#[test]
fn test_vm_return_on_empty_stack_is_malformed() {
    let chunk = constant_chunk(&[], &[OpCode::Return]);

    let mut vm = Vm::with_output(Vec::new());
    let err = vm.run(&chunk).unwrap_err();
    assert!(matches!(
        err,
        InterpretError::MalformedChunk {
            offset: 0,
            reason: "stack underflow"
        }
    ));
    assert!(vm.output().is_empty());
}

#[test]
fn test_vm_short_operand_stack_is_not_a_type_error() {
    // One operand where two are needed
    for op in [OpCode::Add, OpCode::Subtract, OpCode::Greater] {
        let chunk = constant_chunk(&[Value::Number(1.0)], &[op, OpCode::Return]);
        let err = run_chunk(&chunk).unwrap_err();
        assert!(
            matches!(
                err,
                InterpretError::MalformedChunk {
                    offset: 2,
                    reason: "stack underflow"
                }
            ),
            "{:?}: {:?}",
            op,
            err
        );
    }

    let chunk = constant_chunk(&[], &[OpCode::Negate, OpCode::Return]);
    assert!(matches!(
        run_chunk(&chunk),
        Err(InterpretError::MalformedChunk { offset: 0, .. })
    ));
}

// ============================================================================
// Frame Tests
// ============================================================================

#[test]
fn test_frame_walks_chunk() {
    let chunk = constant_chunk(&[Value::Number(1.0)], &[OpCode::Return]);
    let mut frame = Frame::new(&chunk);

    assert_eq!(frame.read_byte(), Some(OpCode::Constant as u8));
    assert_eq!(frame.read_constant(), Some(&Value::Number(1.0)));
    assert_eq!(frame.read_byte(), Some(OpCode::Return as u8));
    assert_eq!(frame.read_byte(), None);
    assert_eq!(frame.ip(), chunk.len());
}
