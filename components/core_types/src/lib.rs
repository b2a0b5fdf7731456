//! Core value types and error handling.
//!
//! This crate provides the foundational types shared by the compiler and
//! the virtual machine: the runtime value representation, heap objects and
//! the two error classes.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of runtime values
//! - [`Obj`] / [`ObjString`] - Heap objects (strings with small-string optimization)
//! - [`CompileError`] - Lexical or syntax error with source line
//! - [`RuntimeError`] - Execution error with source line
//!
//! # Examples
//!
//! ```
//! use core_types::{RuntimeError, Value};
//!
//! let num = Value::Number(42.0);
//! assert!(!num.is_falsey());
//! assert_eq!(num.type_name(), "number");
//!
//! let error = RuntimeError::new("Operands must be numbers.", 1);
//! assert_eq!(error.line, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod object;
mod value;

pub use error::{CompileError, CompileErrors, ErrorLocation, RuntimeError};
pub use object::{Obj, ObjString, SSO_THRESHOLD};
pub use value::{format_number, Value};
