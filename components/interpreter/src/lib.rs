//! Bytecode interpreter for Lox expressions
//!
//! This crate provides the stack virtual machine and the compile-then-run
//! pipeline:
//! - Fixed-capacity value stack with guarded overflow
//! - Type-checked arithmetic, comparison and string concatenation
//! - Source line reporting for runtime errors
//! - Per-instruction trace at the `trace` log level
//!
//! # Example
//!
//! ```
//! use interpreter::Vm;
//! use bytecode_system::{Chunk, OpCode};
//! use core_types::Value;
//!
//! let mut vm = Vm::with_output(Vec::new());
//! let mut chunk = Chunk::new();
//!
//! let idx = chunk.add_constant(Value::Number(42.0));
//! chunk.write_op(OpCode::Constant, 1);
//! chunk.write(idx as u8, 1);
//! chunk.write_op(OpCode::Return, 1);
//!
//! let result = vm.run(&chunk).unwrap();
//! assert_eq!(result, Value::Number(42.0));
//! assert_eq!(vm.output(), b"42\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod vm;

// Re-export main types at crate root
pub use context::Frame;
pub use error::{InterpretError, InterpretResult};
pub use vm::{interpret, Vm, STACK_MAX};
