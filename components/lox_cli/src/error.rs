//! Error types for the CLI

use std::path::PathBuf;

use interpreter::InterpretError;
use rustyline::error::ReadlineError;
use thiserror::Error;

/// Exit code for an unreadable input file
pub const EXIT_IO_ERROR: u8 = 74;

/// Exit code for input data that is not in the expected format
pub const EXIT_DATA_ERROR: u8 = 65;

/// Exit code for bad command-line usage
pub const EXIT_USAGE: u8 = 64;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Compile or runtime failure
    #[error(transparent)]
    Interpret(#[from] InterpretError),

    /// The script file could not be read
    #[error("Could not open file \"{}\": {}", .path.display(), .source)]
    Io {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The script file was read but is not UTF-8 text
    #[error("File \"{}\" is not valid UTF-8: {}", .path.display(), .source)]
    InvalidUtf8 {
        /// Path that was requested
        path: PathBuf,
        /// Position of the first invalid byte
        #[source]
        source: std::str::Utf8Error,
    },

    /// The line editor failed
    #[error("REPL error: {0}")]
    Repl(#[from] ReadlineError),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Interpret(err) => err.result().exit_code(),
            CliError::InvalidUtf8 { .. } => EXIT_DATA_ERROR,
            CliError::Io { .. } | CliError::Repl(_) => EXIT_IO_ERROR,
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
