//! Interpreter error and status types

use core_types::{CompileErrors, RuntimeError};
use thiserror::Error;

/// Why an interpret call failed
#[derive(Debug, Error)]
pub enum InterpretError {
    /// The source did not compile
    #[error(transparent)]
    Compile(#[from] CompileErrors),

    /// Execution stopped on a type error or stack overflow
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    /// The chunk contains a byte that is not an opcode
    #[error("Unknown opcode {byte} at offset {offset}")]
    UnknownOpcode {
        /// The offending byte
        byte: u8,
        /// Its offset in the chunk
        offset: usize,
    },

    /// The chunk ended early or referenced a missing constant
    #[error("Malformed chunk at offset {offset}: {reason}")]
    MalformedChunk {
        /// Offset of the failing instruction
        offset: usize,
        /// What was wrong
        reason: &'static str,
    },

    /// The result could not be written to the output sink
    #[error("Failed to write result: {0}")]
    Output(#[from] std::io::Error),
}

impl InterpretError {
    /// Status category of this error
    ///
    /// Bad bytecode counts as a compile error since only a broken compiler
    /// can produce it.
    pub fn result(&self) -> InterpretResult {
        match self {
            InterpretError::Compile(_)
            | InterpretError::UnknownOpcode { .. }
            | InterpretError::MalformedChunk { .. } => InterpretResult::CompileError,
            InterpretError::Runtime(_) | InterpretError::Output(_) => InterpretResult::RuntimeError,
        }
    }
}

/// Outcome of an interpret call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpretResult {
    /// Compiled and ran to `return`
    Ok,
    /// Compilation failed; nothing ran
    CompileError,
    /// Execution stopped on a runtime error
    RuntimeError,
}

impl InterpretResult {
    /// Process exit code for this outcome
    pub fn exit_code(self) -> u8 {
        match self {
            InterpretResult::Ok => 0,
            InterpretResult::CompileError => 65,
            InterpretResult::RuntimeError => 70,
        }
    }
}

impl<T> From<&Result<T, InterpretError>> for InterpretResult {
    fn from(result: &Result<T, InterpretError>) -> Self {
        match result {
            Ok(_) => InterpretResult::Ok,
            Err(err) => err.result(),
        }
    }
}
