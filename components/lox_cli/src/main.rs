//! rlox - Lox expression interpreter
//!
//! Entry point. Parses CLI arguments, installs the logger and delegates to
//! the Runtime for execution.

use std::process::ExitCode;

use clap::Parser as ClapParser;
use lox_cli::{Cli, Runtime, EXIT_USAGE};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(&cli);

    let mut runtime = Runtime::new().with_print_bytecode(cli.print_bytecode);

    let result = if let Some(code) = &cli.eval {
        runtime.execute_string(code).map(drop)
    } else if let Some(path) = &cli.path {
        runtime.execute_file(path).map(drop)
    } else {
        runtime.repl()
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_logging(cli: &Cli) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = cli.log_level() {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).init();
}
