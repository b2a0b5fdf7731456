//! REPL (Read-Eval-Print Loop) implementation

use std::io::Write;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::CliResult;
use crate::runtime::Runtime;

const PROMPT: &str = "> ";

/// Meta-command typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// `.help`
    Help,
    /// `.exit`
    Exit,
    /// Any other word starting with a dot
    Unknown(String),
}

impl ReplCommand {
    /// Recognize a meta-command; `None` means the line is source code
    pub fn parse(line: &str) -> Option<Self> {
        let word = line.trim();
        if !word.starts_with('.') {
            return None;
        }
        Some(match word {
            ".help" => ReplCommand::Help,
            ".exit" => ReplCommand::Exit,
            _ => ReplCommand::Unknown(word.to_string()),
        })
    }
}

/// Run the interactive REPL
///
/// Each line is compiled and run on its own. Errors are reported and the
/// loop continues. Returns when the user types `.exit` or sends end of
/// input.
pub fn run_repl<W: Write>(runtime: &mut Runtime<W>) -> CliResult<()> {
    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());

                match ReplCommand::parse(&line) {
                    Some(ReplCommand::Exit) => break,
                    Some(ReplCommand::Help) => print_help(),
                    Some(ReplCommand::Unknown(word)) => {
                        println!("Unknown command: {}", word);
                        println!("Type .help for available commands");
                    }
                    None => {
                        if let Err(err) = runtime.execute_string(&line) {
                            eprintln!("{}", err);
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Press Ctrl-D or type .exit to quit");
            }
            Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn print_help() {
    println!("Enter an expression to evaluate it.");
    println!("  .help     - Show this help message");
    println!("  .exit     - Exit the REPL");
}
