//! Single-pass compiler from source text to bytecode
//!
//! Tokens are pulled from the scanner one at a time and bytecode is emitted
//! as soon as each construct is recognized; there is no syntax tree.

use bytecode_system::{Chunk, OpCode};
use core_types::{CompileError, CompileErrors, ObjString, Value};

use crate::error::error_at;
use crate::rules::{Infix, ParseRule, Precedence, Prefix};
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

/// Most expression levels that may be open at once
///
/// Each grouping or unary operand opens one level. Past this the compiler
/// reports an error instead of recursing further.
pub const MAX_NESTING: usize = 2000;

/// Compile one expression into a chunk
///
/// On success the chunk ends with a `return` instruction. On failure the
/// reported diagnostics are returned and no chunk is produced.
///
/// # Example
///
/// ```
/// use bytecode_system::OpCode;
/// use compiler::compile;
///
/// let chunk = compile("1 + 2").unwrap();
/// assert_eq!(chunk.code().last(), Some(&u8::from(OpCode::Return)));
///
/// let errors = compile("1 +").unwrap_err();
/// assert_eq!(errors.to_string(), "[line 1] Error at end: Expect expression.");
/// ```
pub fn compile(source: &str) -> Result<Chunk, CompileErrors> {
    Compiler::new(source).compile()
}

/// Parser state for one compile call
#[derive(Debug)]
struct Parser<'src> {
    current: Token<'src>,
    previous: Token<'src>,
    had_error: bool,
    panic_mode: bool,
    errors: Vec<CompileError>,
}

/// Compiler for one source unit
#[derive(Debug)]
pub struct Compiler<'src> {
    scanner: Scanner<'src>,
    parser: Parser<'src>,
    chunk: Chunk,
    depth: usize,
}

impl<'src> Compiler<'src> {
    /// Create a compiler over `source`
    pub fn new(source: &'src str) -> Self {
        Self {
            scanner: Scanner::new(source),
            parser: Parser {
                current: Token::placeholder(),
                previous: Token::placeholder(),
                had_error: false,
                panic_mode: false,
                errors: Vec::new(),
            },
            chunk: Chunk::new(),
            depth: 0,
        }
    }

    /// Parse exactly one expression followed by end of input
    pub fn compile(mut self) -> Result<Chunk, CompileErrors> {
        self.advance();
        self.expression();
        self.consume(TokenKind::Eof, "Expect end of expression.");
        self.end_compiler();

        if self.parser.had_error {
            log::debug!(
                "compilation failed with {} reported error(s)",
                self.parser.errors.len()
            );
            return Err(CompileErrors(self.parser.errors));
        }

        log::debug!(
            "compiled {} bytes, {} constants",
            self.chunk.len(),
            self.chunk.constants().len()
        );
        Ok(self.chunk)
    }

    fn advance(&mut self) {
        self.parser.previous = self.parser.current;
        loop {
            self.parser.current = self.scanner.scan_token();
            log::trace!("token {:?}", self.parser.current);
            if self.parser.current.kind != TokenKind::Error {
                break;
            }
            let message = self.parser.current.lexeme;
            self.error_at_current(message);
        }
    }

    fn consume(&mut self, kind: TokenKind, message: &str) {
        if self.parser.current.kind == kind {
            self.advance();
            return;
        }
        self.error_at_current(message);
    }

    fn expression(&mut self) {
        self.parse_precedence(Precedence::Assignment);
    }

    fn parse_precedence(&mut self, precedence: Precedence) {
        if self.depth >= MAX_NESTING {
            self.error_at_current("Expression nests too deeply.");
            return;
        }
        self.depth += 1;
        self.parse_operand(precedence);
        self.depth -= 1;
    }

    fn parse_operand(&mut self, precedence: Precedence) {
        self.advance();
        let prefix = ParseRule::for_kind(self.parser.previous.kind).prefix;
        if prefix == Prefix::None {
            self.error("Expect expression.");
            return;
        }
        self.prefix(prefix);

        while precedence <= ParseRule::for_kind(self.parser.current.kind).precedence {
            self.advance();
            match ParseRule::for_kind(self.parser.previous.kind).infix {
                Infix::Binary => self.binary(),
                Infix::None => break,
            }
        }
    }

    fn prefix(&mut self, prefix: Prefix) {
        match prefix {
            Prefix::Grouping => self.grouping(),
            Prefix::Unary => self.unary(),
            Prefix::Number => self.number(),
            Prefix::String => self.string(),
            Prefix::Literal => self.literal(),
            Prefix::None => {}
        }
    }

    fn grouping(&mut self) {
        self.expression();
        self.consume(TokenKind::RightParen, "Expect ')' after expression.");
    }

    fn unary(&mut self) {
        let operator = self.parser.previous.kind;

        // Compile the operand
        self.parse_precedence(Precedence::Unary);

        match operator {
            TokenKind::Minus => self.emit_op(OpCode::Negate),
            TokenKind::Bang => self.emit_op(OpCode::Not),
            _ => {}
        }
    }

    fn binary(&mut self) {
        let operator = self.parser.previous.kind;
        let rule = ParseRule::for_kind(operator);
        self.parse_precedence(rule.precedence.next());

        match operator {
            TokenKind::BangEqual => self.emit_ops(OpCode::Equal, OpCode::Not),
            TokenKind::EqualEqual => self.emit_op(OpCode::Equal),
            TokenKind::Greater => self.emit_op(OpCode::Greater),
            TokenKind::GreaterEqual => self.emit_ops(OpCode::Less, OpCode::Not),
            TokenKind::Less => self.emit_op(OpCode::Less),
            TokenKind::LessEqual => self.emit_ops(OpCode::Greater, OpCode::Not),
            TokenKind::Plus => self.emit_op(OpCode::Add),
            TokenKind::Minus => self.emit_op(OpCode::Subtract),
            TokenKind::Star => self.emit_op(OpCode::Multiply),
            TokenKind::Slash => self.emit_op(OpCode::Divide),
            _ => {}
        }
    }

    fn number(&mut self) {
        match self.parser.previous.lexeme.parse::<f64>() {
            Ok(value) => self.emit_constant(Value::Number(value)),
            Err(_) => self.error("Invalid number format."),
        }
    }

    fn string(&mut self) {
        let lexeme = self.parser.previous.lexeme;
        let contents = &lexeme[1..lexeme.len() - 1];
        self.emit_constant(Value::from(ObjString::new(contents)));
    }

    fn literal(&mut self) {
        match self.parser.previous.kind {
            TokenKind::False => self.emit_op(OpCode::False),
            TokenKind::Nil => self.emit_op(OpCode::Nil),
            TokenKind::True => self.emit_op(OpCode::True),
            _ => {}
        }
    }

    fn end_compiler(&mut self) {
        self.emit_op(OpCode::Return);
    }

    fn emit_byte(&mut self, byte: u8) {
        let line = self.parser.previous.line;
        self.chunk.write(byte, line);
    }

    fn emit_op(&mut self, op: OpCode) {
        self.emit_byte(op.into());
    }

    fn emit_ops(&mut self, first: OpCode, second: OpCode) {
        self.emit_op(first);
        self.emit_op(second);
    }

    fn emit_constant(&mut self, value: Value) {
        let index = self.make_constant(value);
        self.emit_op(OpCode::Constant);
        self.emit_byte(index);
    }

    fn make_constant(&mut self, value: Value) -> u8 {
        if self.chunk.constants_full() {
            self.error("Too many constants in one chunk.");
            return 0;
        }
        self.chunk.add_constant(value) as u8
    }

    fn error(&mut self, message: &str) {
        let token = self.parser.previous;
        self.error_at(token, message);
    }

    fn error_at_current(&mut self, message: &str) {
        let token = self.parser.current;
        self.error_at(token, message);
    }

    fn error_at(&mut self, token: Token<'src>, message: &str) {
        self.parser.had_error = true;
        if self.parser.panic_mode {
            return;
        }
        self.parser.panic_mode = true;
        self.parser.errors.push(error_at(&token, message));
    }
}
