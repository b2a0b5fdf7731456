//! Bytecode opcodes
//!
//! Every instruction is one opcode byte, optionally followed by operand
//! bytes. Only [`OpCode::Constant`] takes an operand.

use thiserror::Error;

/// Bytecode opcodes for the stack machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpCode {
    /// Push constant-pool entry; one operand byte (pool index)
    Constant = 0,
    /// Push nil
    Nil = 1,
    /// Push boolean true
    True = 2,
    /// Push boolean false
    False = 3,
    /// Pop two values, push whether they are equal
    Equal = 4,
    /// Pop two numbers, push `a > b`
    Greater = 5,
    /// Pop two numbers, push `a < b`
    Less = 6,
    /// Add two numbers or concatenate two strings
    Add = 7,
    /// Subtract top from second-top
    Subtract = 8,
    /// Multiply top two stack values
    Multiply = 9,
    /// Divide second-top by top
    Divide = 10,
    /// Logical NOT (invert truthiness)
    Not = 11,
    /// Negate top value
    Negate = 12,
    /// Pop and print the result, stop execution
    Return = 13,
}

/// Byte that does not name any opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown opcode {0}")]
pub struct UnknownOpcode(pub u8);

impl OpCode {
    /// All opcodes in encoding order
    pub const ALL: [OpCode; 14] = [
        OpCode::Constant,
        OpCode::Nil,
        OpCode::True,
        OpCode::False,
        OpCode::Equal,
        OpCode::Greater,
        OpCode::Less,
        OpCode::Add,
        OpCode::Subtract,
        OpCode::Multiply,
        OpCode::Divide,
        OpCode::Not,
        OpCode::Negate,
        OpCode::Return,
    ];

    /// Number of operand bytes following the opcode byte
    pub fn operand_count(self) -> usize {
        match self {
            OpCode::Constant => 1,
            _ => 0,
        }
    }

    /// Mnemonic used by the disassembler
    pub fn mnemonic(self) -> &'static str {
        match self {
            OpCode::Constant => "constant",
            OpCode::Nil => "nil",
            OpCode::True => "true",
            OpCode::False => "false",
            OpCode::Equal => "equal",
            OpCode::Greater => "greater",
            OpCode::Less => "less",
            OpCode::Add => "add",
            OpCode::Subtract => "subtract",
            OpCode::Multiply => "multiply",
            OpCode::Divide => "divide",
            OpCode::Not => "not",
            OpCode::Negate => "negate",
            OpCode::Return => "return",
        }
    }
}

impl From<OpCode> for u8 {
    fn from(op: OpCode) -> u8 {
        op as u8
    }
}

impl TryFrom<u8> for OpCode {
    type Error = UnknownOpcode;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        OpCode::ALL
            .get(byte as usize)
            .copied()
            .ok_or(UnknownOpcode(byte))
    }
}
