//! Runtime orchestration for Lox execution
//!
//! The Runtime struct ties the compiler to a VM and applies the
//! command-line options that affect execution.

use std::io::{self, Write};
use std::path::Path;

use bytecode_system::disassemble_chunk;
use core_types::Value;
use interpreter::{InterpretError, Vm};

use crate::error::{CliError, CliResult};

/// Compiles and runs Lox source on a VM it owns
#[derive(Debug)]
pub struct Runtime<W = io::Stdout> {
    /// Whether to print the disassembled chunk before execution
    print_bytecode: bool,
    /// VM reused across calls; its stack is reset on every run
    vm: Vm<W>,
}

impl Runtime {
    /// Create a runtime that prints to standard output
    ///
    /// # Example
    /// ```
    /// use lox_cli::Runtime;
    ///
    /// let runtime = Runtime::new();
    /// assert!(!runtime.is_print_bytecode_enabled());
    /// ```
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Runtime<W> {
    /// Create a runtime that prints results and listings to `out`
    pub fn with_output(out: W) -> Self {
        Self {
            print_bytecode: false,
            vm: Vm::with_output(out),
        }
    }

    /// Enable bytecode printing
    pub fn with_print_bytecode(mut self, enabled: bool) -> Self {
        self.print_bytecode = enabled;
        self
    }

    /// Check if bytecode printing is enabled
    pub fn is_print_bytecode_enabled(&self) -> bool {
        self.print_bytecode
    }

    /// Get access to the VM
    pub fn vm(&self) -> &Vm<W> {
        &self.vm
    }

    /// Consume the runtime and return its output sink
    pub fn into_output(self) -> W {
        self.vm.into_output()
    }

    /// Execute a Lox source file
    ///
    /// # Errors
    /// Returns `CliError::Io` if the file cannot be read and
    /// `CliError::InvalidUtf8` if its bytes are not UTF-8. Otherwise returns
    /// any compile or runtime failure.
    ///
    /// # Example
    /// ```no_run
    /// use lox_cli::Runtime;
    ///
    /// let mut runtime = Runtime::new();
    /// let result = runtime.execute_file("example.lox").unwrap();
    /// ```
    pub fn execute_file(&mut self, path: impl AsRef<Path>) -> CliResult<Value> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("read {} bytes from {}", bytes.len(), path.display());
        let source = std::str::from_utf8(&bytes).map_err(|source| CliError::InvalidUtf8 {
            path: path.to_path_buf(),
            source,
        })?;

        self.execute_string(source)
    }

    /// Execute a Lox source string
    ///
    /// The result is printed to the output sink by the VM and also returned.
    ///
    /// # Example
    /// ```
    /// use lox_cli::Runtime;
    /// use core_types::Value;
    ///
    /// let mut runtime = Runtime::with_output(Vec::new());
    /// let result = runtime.execute_string("1 + 2").unwrap();
    /// assert_eq!(result, Value::Number(3.0));
    /// ```
    pub fn execute_string(&mut self, source: &str) -> CliResult<Value> {
        let chunk = compiler::compile(source).map_err(InterpretError::from)?;

        if self.print_bytecode {
            let listing = disassemble_chunk(&chunk, "code");
            self.vm
                .output_mut()
                .write_all(listing.as_bytes())
                .map_err(InterpretError::from)?;
        }

        Ok(self.vm.run(&chunk)?)
    }

    /// Start the REPL (Read-Eval-Print Loop)
    ///
    /// # Errors
    /// Returns `CliError::Repl` if the line editor fails
    pub fn repl(&mut self) -> CliResult<()> {
        crate::repl::run_repl(self)
    }
}
