//! Human-readable bytecode listing
//!
//! One line per instruction: byte offset, source line (or `|` when it
//! repeats the previous byte's line), mnemonic, and for `constant` the pool
//! index and printed value.

use std::fmt::Write;

use crate::chunk::Chunk;
use crate::opcode::OpCode;

/// Disassemble a whole chunk under a `== name ==` header
///
/// # Example
///
/// ```
/// use bytecode_system::{disassemble_chunk, Chunk, OpCode};
/// use core_types::Value;
///
/// let mut chunk = Chunk::new();
/// let idx = chunk.add_constant(Value::Number(1.2));
/// chunk.write_op(OpCode::Constant, 123);
/// chunk.write(idx as u8, 123);
/// chunk.write_op(OpCode::Return, 123);
///
/// let listing = disassemble_chunk(&chunk, "test chunk");
/// assert_eq!(
///     listing,
///     "== test chunk ==\n0000  123 constant            0 '1.2'\n0002    | return\n"
/// );
/// ```
pub fn disassemble_chunk(chunk: &Chunk, name: &str) -> String {
    let mut out = format!("== {} ==\n", name);
    let mut offset = 0;
    while offset < chunk.len() {
        offset = disassemble_instruction(chunk, offset, &mut out);
    }
    out
}

/// Disassemble the instruction at `offset` into `out`
///
/// Returns the offset of the next instruction. An offset past the end of
/// the chunk is listed as `<out of range>` and skipped.
pub fn disassemble_instruction(chunk: &Chunk, offset: usize, out: &mut String) -> usize {
    let _ = write!(out, "{:04} ", offset);
    let (Some(&byte), Some(line)) = (chunk.code().get(offset), chunk.line(offset)) else {
        out.push_str("<out of range>\n");
        return offset + 1;
    };

    if offset > 0 && chunk.line(offset - 1) == Some(line) {
        out.push_str("   | ");
    } else {
        let _ = write!(out, "{:4} ", line);
    }

    match OpCode::try_from(byte) {
        Ok(OpCode::Constant) => constant_instruction(chunk, offset, out),
        Ok(op) => {
            let _ = writeln!(out, "{}", op.mnemonic());
            offset + 1
        }
        Err(_) => {
            let _ = writeln!(out, "Unknown opcode {}", byte);
            offset + 1
        }
    }
}

fn constant_instruction(chunk: &Chunk, offset: usize, out: &mut String) -> usize {
    let name = OpCode::Constant.mnemonic();
    let Some(&index) = chunk.code().get(offset + 1) else {
        let _ = writeln!(out, "{:<16} <missing operand>", name);
        return offset + 1;
    };

    match chunk.constant(index as usize) {
        Some(value) => {
            let _ = writeln!(out, "{:<16} {:4} '{}'", name, index, value);
        }
        None => {
            let _ = writeln!(out, "{:<16} {:4} <invalid>", name, index);
        }
    }
    offset + 2
}
