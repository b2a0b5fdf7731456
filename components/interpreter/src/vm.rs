//! Virtual Machine for bytecode execution
//!
//! Main entry point for running compiled Lox expressions.

use std::fmt::Write as _;
use std::io::{self, Write};

use arrayvec::ArrayVec;
use bytecode_system::{disassemble_instruction, Chunk, OpCode};
use core_types::{RuntimeError, Value};

use crate::context::Frame;
use crate::error::{InterpretError, InterpretResult};

/// Maximum depth of the value stack
pub const STACK_MAX: usize = 256;

/// Stack-based virtual machine
///
/// Holds a fixed-capacity value stack and the sink that `return` prints
/// results to. The stack is cleared at the start of every run and after
/// every error, so one VM can run any number of chunks.
#[derive(Debug)]
pub struct Vm<W = io::Stdout> {
    stack: ArrayVec<Value, STACK_MAX>,
    out: W,
}

impl Vm {
    /// Create a VM that prints results to standard output
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Vm {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Vm<W> {
    /// Create a VM that prints results to `out`
    pub fn with_output(out: W) -> Self {
        Self {
            stack: ArrayVec::new(),
            out,
        }
    }

    /// The output sink
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Mutable access to the output sink
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consume the VM and return its output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Values currently on the stack, bottom first
    pub fn stack(&self) -> &[Value] {
        &self.stack
    }

    /// Compile `source` into a fresh chunk and run it
    ///
    /// A compile failure returns before the VM is touched.
    ///
    /// # Example
    ///
    /// ```
    /// use interpreter::Vm;
    /// use core_types::Value;
    ///
    /// let mut vm = Vm::with_output(Vec::new());
    /// let result = vm.interpret("(2 + 3) * 4").unwrap();
    /// assert_eq!(result, Value::Number(20.0));
    /// assert_eq!(vm.output(), b"20\n");
    /// ```
    pub fn interpret(&mut self, source: &str) -> Result<Value, InterpretError> {
        let chunk = compiler::compile(source)?;
        self.run(&chunk)
    }

    /// Execute `chunk` from its first byte until `return`
    ///
    /// The returned value has also been printed to the output sink.
    pub fn run(&mut self, chunk: &Chunk) -> Result<Value, InterpretError> {
        self.stack.clear();
        let mut frame = Frame::new(chunk);
        let result = self.execute(&mut frame);
        if let Err(err) = &result {
            log::debug!("execution stopped at offset {}: {:?}", frame.ip(), err);
            self.stack.clear();
        }
        result
    }

    fn execute(&mut self, frame: &mut Frame<'_>) -> Result<Value, InterpretError> {
        loop {
            if log::log_enabled!(log::Level::Trace) {
                self.trace(frame);
            }

            let offset = frame.ip();
            let byte = frame.read_byte().ok_or(InterpretError::MalformedChunk {
                offset,
                reason: "missing return",
            })?;
            let op = OpCode::try_from(byte)
                .map_err(|_| InterpretError::UnknownOpcode { byte, offset })?;

            match op {
                OpCode::Constant => {
                    let value = frame
                        .read_constant()
                        .ok_or(InterpretError::MalformedChunk {
                            offset,
                            reason: "invalid constant index",
                        })?
                        .clone();
                    self.push(value, frame)?;
                }
                OpCode::Nil => self.push(Value::Nil, frame)?,
                OpCode::True => self.push(Value::Boolean(true), frame)?,
                OpCode::False => self.push(Value::Boolean(false), frame)?,
                OpCode::Equal => {
                    let b = self.pop(frame)?;
                    let a = self.pop(frame)?;
                    self.push(Value::Boolean(a == b), frame)?;
                }
                OpCode::Greater => self.comparison(frame, |a, b| a > b)?,
                OpCode::Less => self.comparison(frame, |a, b| a < b)?,
                OpCode::Add => self.add(frame)?,
                OpCode::Subtract => self.arithmetic(frame, |a, b| a - b)?,
                OpCode::Multiply => self.arithmetic(frame, |a, b| a * b)?,
                OpCode::Divide => self.arithmetic(frame, |a, b| a / b)?,
                OpCode::Not => {
                    let value = self.pop(frame)?;
                    self.push(Value::Boolean(value.is_falsey()), frame)?;
                }
                OpCode::Negate => {
                    self.require_depth(1, frame)?;
                    let n = match self.peek(0) {
                        Some(Value::Number(n)) => *n,
                        _ => return Err(runtime_error(frame, "Operand must be a number.")),
                    };
                    self.pop(frame)?;
                    self.push(Value::Number(-n), frame)?;
                }
                OpCode::Return => {
                    let value = self.pop(frame)?;
                    writeln!(self.out, "{}", value)?;
                    return Ok(value);
                }
            }
        }
    }

    fn push(&mut self, value: Value, frame: &Frame<'_>) -> Result<(), InterpretError> {
        self.stack
            .try_push(value)
            .map_err(|_| runtime_error(frame, "Stack overflow."))
    }

    fn pop(&mut self, frame: &Frame<'_>) -> Result<Value, InterpretError> {
        self.stack.pop().ok_or_else(|| stack_underflow(frame))
    }

    /// Fail unless at least `depth` values are on the stack
    fn require_depth(&self, depth: usize, frame: &Frame<'_>) -> Result<(), InterpretError> {
        if self.stack.len() < depth {
            return Err(stack_underflow(frame));
        }
        Ok(())
    }

    fn peek(&self, distance: usize) -> Option<&Value> {
        self.stack.iter().rev().nth(distance)
    }

    fn number_operands(&self) -> Option<(f64, f64)> {
        match (self.peek(1), self.peek(0)) {
            (Some(Value::Number(a)), Some(Value::Number(b))) => Some((*a, *b)),
            _ => None,
        }
    }

    fn arithmetic(
        &mut self,
        frame: &Frame<'_>,
        op: impl Fn(f64, f64) -> f64,
    ) -> Result<(), InterpretError> {
        self.require_depth(2, frame)?;
        let (a, b) = self
            .number_operands()
            .ok_or_else(|| runtime_error(frame, "Operands must be numbers."))?;
        self.pop(frame)?;
        self.pop(frame)?;
        self.push(Value::Number(op(a, b)), frame)
    }

    fn comparison(
        &mut self,
        frame: &Frame<'_>,
        op: impl Fn(f64, f64) -> bool,
    ) -> Result<(), InterpretError> {
        self.require_depth(2, frame)?;
        let (a, b) = self
            .number_operands()
            .ok_or_else(|| runtime_error(frame, "Operands must be numbers."))?;
        self.pop(frame)?;
        self.pop(frame)?;
        self.push(Value::Boolean(op(a, b)), frame)
    }

    fn add(&mut self, frame: &Frame<'_>) -> Result<(), InterpretError> {
        self.require_depth(2, frame)?;
        let result = match (self.peek(1), self.peek(0)) {
            (Some(a), Some(b)) if a.is_string() && b.is_string() => {
                Value::from(a.as_string().concat(b.as_string()))
            }
            (Some(Value::Number(a)), Some(Value::Number(b))) => Value::Number(a + b),
            _ => {
                return Err(runtime_error(
                    frame,
                    "Operands must be two numbers or two strings.",
                ))
            }
        };
        self.pop(frame)?;
        self.pop(frame)?;
        self.push(result, frame)
    }

    fn trace(&self, frame: &Frame<'_>) {
        let mut stack = String::from("          ");
        for value in &self.stack {
            let _ = write!(stack, "[ {} ]", value);
        }
        log::trace!("{}", stack);

        if frame.ip() < frame.chunk().len() {
            let mut instruction = String::new();
            disassemble_instruction(frame.chunk(), frame.ip(), &mut instruction);
            log::trace!("{}", instruction.trim_end());
        }
    }
}

// Every popping instruction is a single byte, so it starts at ip - 1
fn stack_underflow(frame: &Frame<'_>) -> InterpretError {
    InterpretError::MalformedChunk {
        offset: frame.ip().saturating_sub(1),
        reason: "stack underflow",
    }
}

fn runtime_error(frame: &Frame<'_>, message: &str) -> InterpretError {
    InterpretError::Runtime(RuntimeError::new(message, frame.current_line()))
}

/// Compile and run `source` on a fresh VM printing to standard output
///
/// Diagnostics go to standard error.
pub fn interpret(source: &str) -> InterpretResult {
    let mut vm = Vm::new();
    let result = vm.interpret(source);
    if let Err(err) = &result {
        eprintln!("{}", err);
    }
    InterpretResult::from(&result)
}
