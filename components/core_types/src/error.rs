//! Compile-time and runtime error types.
//!
//! The two classes are kept apart: a [`CompileError`] means the chunk was
//! never executed, a [`RuntimeError`] means execution stopped at a specific
//! instruction.

use std::fmt;

use thiserror::Error;

/// Where in the source a compile error points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorLocation {
    /// The error is at the end of input
    AtEnd,
    /// The error is at the given lexeme
    At(String),
    /// No location; the message already describes the offending text
    Unspecified,
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorLocation::AtEnd => write!(f, " at end"),
            ErrorLocation::At(lexeme) => write!(f, " at '{}'", lexeme),
            ErrorLocation::Unspecified => Ok(()),
        }
    }
}

/// A lexical or syntactic error reported by the compiler.
///
/// # Examples
///
/// ```
/// use core_types::{CompileError, ErrorLocation};
///
/// let error = CompileError {
///     line: 3,
///     location: ErrorLocation::At(")".to_string()),
///     message: "Expect expression.".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "[line 3] Error at ')': Expect expression.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[line {line}] Error{location}: {message}")]
pub struct CompileError {
    /// Source line of the offending token
    pub line: u32,
    /// Location context
    pub location: ErrorLocation,
    /// Human-readable message
    pub message: String,
}

/// Every diagnostic reported during one compile call.
///
/// Never empty: a compile fails only after at least one error was reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileErrors(pub Vec<CompileError>);

impl CompileErrors {
    /// Iterate over the reported errors
    pub fn iter(&self) -> std::slice::Iter<'_, CompileError> {
        self.0.iter()
    }

    /// Number of reported errors
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing was reported
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CompileErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for CompileErrors {}

impl<'a> IntoIterator for &'a CompileErrors {
    type Item = &'a CompileError;
    type IntoIter = std::slice::Iter<'a, CompileError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// An error raised while executing bytecode.
///
/// # Examples
///
/// ```
/// use core_types::RuntimeError;
///
/// let error = RuntimeError::new("Operand must be a number.", 1);
/// assert_eq!(error.to_string(), "Operand must be a number.\n[line 1] in script");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}\n[line {line}] in script")]
pub struct RuntimeError {
    /// Human-readable message
    pub message: String,
    /// Source line of the failing instruction
    pub line: u32,
}

impl RuntimeError {
    /// Create a runtime error at a given line
    pub fn new(message: impl Into<String>, line: u32) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}
