//! Interactive read-eval-print loop.
//!
//! Lines are appended to a buffer until the buffer parses. A parse that
//! fails only because the input ended keeps the buffer open and switches
//! the prompt to `... `; any other parse error is reported and the buffer
//! is dropped. Variables live in one [`Environment`] for the whole session.

use std::io::{self, BufRead, Write};

use falcon_eval::{reporting_units, Environment};
use tracing::debug;

use crate::commands::Console;
use crate::pipeline::{format_result, prepare};

const PROMPT: &str = "> ";
const CONTINUATION_PROMPT: &str = "... ";
const EXIT_COMMAND: &str = "exit();";

/// REPL options.
#[derive(Copy, Clone, Debug, Default)]
pub struct ReplConfig {
    /// Print each statement's syntax tree before its result.
    pub verbose: bool,
}

/// What feeding one line did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReplStep {
    /// The buffer is an incomplete program; keep reading.
    NeedMore,
    /// The buffer was run (or rejected) and cleared.
    Done,
    /// The user asked to leave.
    Exit,
}

pub struct Repl {
    env: Environment,
    buffer: String,
    config: ReplConfig,
}

impl Repl {
    pub fn new(config: ReplConfig) -> Self {
        Repl {
            env: Environment::new(),
            buffer: String::new(),
            config,
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Prompt for the next line.
    pub fn prompt(&self) -> &'static str {
        if self.buffer.is_empty() {
            PROMPT
        } else {
            CONTINUATION_PROMPT
        }
    }

    /// Feed one line of input (without its newline).
    pub fn feed_line<W: Write, E: Write>(
        &mut self,
        line: &str,
        console: &mut Console<W, E>,
    ) -> io::Result<ReplStep> {
        if self.buffer.is_empty() && line.trim() == EXIT_COMMAND {
            return Ok(ReplStep::Exit);
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
        if self.buffer.trim().is_empty() {
            self.buffer.clear();
            return Ok(ReplStep::Done);
        }

        let source = std::mem::take(&mut self.buffer);
        let prepared = match prepare(&source) {
            Ok(prepared) => prepared,
            Err(err) if err.is_incomplete() => {
                debug!(bytes = source.len(), "incomplete input, buffering");
                self.buffer = source;
                return Ok(ReplStep::NeedMore);
            }
            Err(err) => {
                console.report(&source, &[err.to_diagnostic()]);
                return Ok(ReplStep::Done);
            }
        };

        console.report(&source, prepared.warnings());
        let execution = prepared.execute(&mut self.env);
        let mut results = execution.output.results.iter();
        'statements: for statement in execution.program.children() {
            if self.config.verbose {
                write!(console.out, "{}", statement.display_tree())?;
            }
            for _ in reporting_units(statement) {
                let Some(result) = results.next() else {
                    break 'statements;
                };
                if let Some(line) = format_result(result) {
                    writeln!(console.out, "{line}")?;
                }
            }
        }
        console.out.flush()?;
        if let Some(diag) = execution.error_diagnostic() {
            console.report(&source, &[diag]);
        }
        Ok(ReplStep::Done)
    }

    /// Run until `exit();` or end of input.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        mut input: R,
        console: &mut Console<W, E>,
    ) -> io::Result<()> {
        writeln!(
            console.out,
            "Falcon {} (type `{EXIT_COMMAND}` to leave)",
            env!("CARGO_PKG_VERSION")
        )?;
        let mut line = String::new();
        loop {
            write!(console.out, "{}", self.prompt())?;
            console.out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(console.out)?;
                break;
            }
            let line = line.trim_end_matches(['\n', '\r']);
            if self.feed_line(line, console)? == ReplStep::Exit {
                break;
            }
        }
        writeln!(console.out, "bye!")?;
        console.out.flush()
    }
}
