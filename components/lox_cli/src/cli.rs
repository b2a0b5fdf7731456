//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

/// Lox expression interpreter
///
/// Runs a script file, a `--eval` expression, or an interactive prompt when
/// neither is given.
#[derive(Debug, Parser)]
#[command(name = "rlox", version)]
pub struct Cli {
    /// UTF-8 script to run; starts the REPL when omitted
    pub path: Option<PathBuf>,

    /// Evaluate an expression instead of reading a file
    #[arg(short, long, value_name = "CODE", conflicts_with = "path")]
    pub eval: Option<String>,

    /// Print the disassembled chunk before running it
    #[arg(long)]
    pub print_bytecode: bool,

    /// Log every executed instruction with the stack contents
    #[arg(long)]
    pub trace: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level requested on the command line
    ///
    /// `None` leaves the choice to `RUST_LOG`.
    pub fn log_level(&self) -> Option<LevelFilter> {
        if self.trace || self.verbose >= 2 {
            Some(LevelFilter::Trace)
        } else if self.verbose == 1 {
            Some(LevelFilter::Debug)
        } else {
            None
        }
    }
}
