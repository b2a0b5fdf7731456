//! Tests for the OpCode enum and its byte encoding

use bytecode_system::{OpCode, UnknownOpcode};

#[test]
fn test_opcode_byte_values() {
    assert_eq!(u8::from(OpCode::Constant), 0);
    assert_eq!(u8::from(OpCode::Nil), 1);
    assert_eq!(u8::from(OpCode::True), 2);
    assert_eq!(u8::from(OpCode::False), 3);
    assert_eq!(u8::from(OpCode::Equal), 4);
    assert_eq!(u8::from(OpCode::Greater), 5);
    assert_eq!(u8::from(OpCode::Less), 6);
    assert_eq!(u8::from(OpCode::Add), 7);
    assert_eq!(u8::from(OpCode::Subtract), 8);
    assert_eq!(u8::from(OpCode::Multiply), 9);
    assert_eq!(u8::from(OpCode::Divide), 10);
    assert_eq!(u8::from(OpCode::Not), 11);
    assert_eq!(u8::from(OpCode::Negate), 12);
    assert_eq!(u8::from(OpCode::Return), 13);
}

#[test]
fn test_every_opcode_decodes_to_itself() {
    for op in OpCode::ALL {
        assert_eq!(OpCode::try_from(u8::from(op)), Ok(op));
    }
}

#[test]
fn test_bytes_past_the_table_are_unknown() {
    for byte in 14..=u8::MAX {
        assert_eq!(OpCode::try_from(byte), Err(UnknownOpcode(byte)));
    }
}

#[test]
fn test_only_constant_has_operands() {
    for op in OpCode::ALL {
        let expected = if op == OpCode::Constant { 1 } else { 0 };
        assert_eq!(op.operand_count(), expected, "{:?}", op);
    }
}

#[test]
fn test_mnemonics_are_unique() {
    let mut names: Vec<_> = OpCode::ALL.iter().map(|op| op.mnemonic()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), OpCode::ALL.len());
}

#[test]
fn test_unknown_opcode_message() {
    assert_eq!(UnknownOpcode(99).to_string(), "unknown opcode 99");
}
