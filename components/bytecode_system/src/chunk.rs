//! Bytecode chunk - compiled bytecode container
//!
//! Contains the instruction bytes, one source line per byte, and the
//! constant pool.

use core_types::Value;

use crate::opcode::OpCode;

/// Largest number of constants a chunk can address with a one-byte index
pub const MAX_CONSTANTS: usize = u8::MAX as usize + 1;

/// A compiled bytecode chunk
///
/// `lines[i]` is the source line that produced `code[i]`, so both buffers
/// always have the same length. Constants are append-only and their indices
/// stay valid for the lifetime of the chunk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chunk {
    code: Vec<u8>,
    lines: Vec<u32>,
    constants: Vec<Value>,
}

impl Chunk {
    /// Create a new empty chunk
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one byte and record the line that produced it
    pub fn write(&mut self, byte: u8, line: u32) {
        self.code.push(byte);
        self.lines.push(line);
    }

    /// Append an opcode byte
    pub fn write_op(&mut self, op: OpCode, line: u32) {
        self.write(op.into(), line);
    }

    /// Add a constant to the pool and return its index
    ///
    /// The pool itself does not enforce [`MAX_CONSTANTS`]; the compiler
    /// checks [`Chunk::constants_full`] before adding.
    pub fn add_constant(&mut self, value: Value) -> usize {
        self.constants.push(value);
        self.constants.len() - 1
    }

    /// Whether another constant would overflow a one-byte index
    pub fn constants_full(&self) -> bool {
        self.constants.len() >= MAX_CONSTANTS
    }

    /// Instruction bytes
    pub fn code(&self) -> &[u8] {
        &self.code
    }

    /// Source line per instruction byte
    pub fn lines(&self) -> &[u32] {
        &self.lines
    }

    /// Constant pool
    pub fn constants(&self) -> &[Value] {
        &self.constants
    }

    /// Constant at a pool index
    pub fn constant(&self, index: usize) -> Option<&Value> {
        self.constants.get(index)
    }

    /// Source line of the byte at `offset`
    pub fn line(&self, offset: usize) -> Option<u32> {
        self.lines.get(offset).copied()
    }

    /// Number of instruction bytes
    pub fn len(&self) -> usize {
        self.code.len()
    }

    /// Returns true if no bytes were written
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}
