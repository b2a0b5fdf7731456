//! Lox interpreter CLI library
//!
//! Provides the Runtime struct and supporting modules for the `rlox` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod repl;
pub mod runtime;

pub use cli::Cli;
pub use error::{CliError, CliResult, EXIT_DATA_ERROR, EXIT_IO_ERROR, EXIT_USAGE};
pub use repl::ReplCommand;
pub use runtime::Runtime;
