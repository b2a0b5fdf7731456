//! Execution context for one run of a chunk

use bytecode_system::Chunk;
use core_types::Value;

/// Read cursor over a borrowed chunk
///
/// Holds the instruction pointer: the offset of the next byte to fetch.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    chunk: &'a Chunk,
    ip: usize,
}

impl<'a> Frame<'a> {
    /// Create a frame positioned at the first instruction
    pub fn new(chunk: &'a Chunk) -> Self {
        Self { chunk, ip: 0 }
    }

    /// The chunk being executed
    pub fn chunk(&self) -> &'a Chunk {
        self.chunk
    }

    /// Offset of the next byte to fetch
    pub fn ip(&self) -> usize {
        self.ip
    }

    /// Fetch the next byte and advance
    pub fn read_byte(&mut self) -> Option<u8> {
        let byte = self.chunk.code().get(self.ip).copied()?;
        self.ip += 1;
        Some(byte)
    }

    /// Fetch a one-byte constant index and look it up
    pub fn read_constant(&mut self) -> Option<&'a Value> {
        let index = self.read_byte()?;
        self.chunk.constant(index as usize)
    }

    /// Source line of the byte fetched last
    ///
    /// Returns 0 before anything has been fetched.
    pub fn current_line(&self) -> u32 {
        self.ip
            .checked_sub(1)
            .and_then(|offset| self.chunk.line(offset))
            .unwrap_or(0)
    }
}
