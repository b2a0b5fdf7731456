//! Lox expression compiler
//!
//! Scans source text lazily and compiles a single expression straight to
//! bytecode with a Pratt parser. No syntax tree is built.
//!
//! # Overview
//!
//! - [`Scanner`] - Produces [`Token`]s on demand
//! - [`ParseRule`] - Prefix/infix handlers and binding power per [`TokenKind`]
//! - [`Compiler`] - Emits a [`bytecode_system::Chunk`] for one expression
//!
//! # Example
//!
//! ```
//! use bytecode_system::OpCode;
//! use compiler::compile;
//!
//! let chunk = compile("-(1 + 2)").unwrap();
//! assert_eq!(chunk.constants().len(), 2);
//! assert_eq!(chunk.code()[4], u8::from(OpCode::Add));
//! assert_eq!(chunk.code()[5], u8::from(OpCode::Negate));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compiler;
pub mod error;
pub mod rules;
pub mod scanner;
pub mod token;

pub use compiler::{compile, Compiler};
pub use error::error_at;
pub use rules::{Infix, ParseRule, Precedence, Prefix};
pub use scanner::Scanner;
pub use token::{Token, TokenKind};
