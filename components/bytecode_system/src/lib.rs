//! Bytecode system for the Lox virtual machine
//!
//! This crate provides the instruction set, the chunk container the
//! compiler writes into and the VM reads from, and a disassembler.
//!
//! # Features
//!
//! - Stack-based bytecode with single-byte opcodes
//! - Per-byte source line table for error reporting
//! - Constant pool addressed by a one-byte index
//! - Human-readable disassembly
//!
//! # Example
//!
//! ```
//! use bytecode_system::{Chunk, OpCode};
//! use core_types::Value;
//!
//! let mut chunk = Chunk::new();
//!
//! // Add constants
//! let idx = chunk.add_constant(Value::Number(42.0));
//!
//! // Emit instructions
//! chunk.write_op(OpCode::Constant, 1);
//! chunk.write(idx as u8, 1);
//! chunk.write_op(OpCode::Return, 1);
//!
//! assert_eq!(chunk.len(), 3);
//! assert_eq!(chunk.lines(), &[1, 1, 1]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chunk;
pub mod disassembler;
pub mod opcode;

// Re-export main types at crate root
pub use chunk::{Chunk, MAX_CONSTANTS};
pub use disassembler::{disassemble_chunk, disassemble_instruction};
pub use opcode::{OpCode, UnknownOpcode};
