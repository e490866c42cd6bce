//! Command handlers for the Falcon CLI.
//!
//! Each submodule implements one subcommand. Handlers write through a
//! [`Console`], so they can be pointed at buffers in tests.

use std::io::{self, IsTerminal, Write};

use falcon_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use falcon_diagnostic::Diagnostic;

mod debug;
mod run;

pub use debug::{lex_file, lex_text, parse_file, parse_text};
pub use run::{run_file, run_text};

/// Output streams plus how diagnostics are colored.
pub struct Console<W: Write, E: Write> {
    pub out: W,
    pub err: E,
    color: ColorMode,
    err_is_tty: bool,
}

impl Console<io::Stdout, io::Stderr> {
    /// Stdout for results, stderr for diagnostics.
    pub fn stdio(color: ColorMode) -> Self {
        let err = io::stderr();
        let err_is_tty = err.is_terminal();
        Console {
            out: io::stdout(),
            err,
            color,
            err_is_tty,
        }
    }
}

impl<W: Write, E: Write> Console<W, E> {
    /// A console over arbitrary writers. The error stream is treated as
    /// not being a terminal.
    pub fn new(out: W, err: E, color: ColorMode) -> Self {
        Console {
            out,
            err,
            color,
            err_is_tty: false,
        }
    }

    /// Render diagnostics against `source`.
    pub fn report(&mut self, source: &str, diagnostics: &[Diagnostic]) {
        if diagnostics.is_empty() {
            return;
        }
        let mut emitter = TerminalEmitter::with_color_mode(&mut self.err, self.color, self.err_is_tty)
            .with_source(source);
        emitter.emit_all(diagnostics);
        emitter.flush();
    }

    /// Print the closing error and warning counts.
    pub fn summarize(&mut self, error_count: usize, warning_count: usize) {
        if error_count == 0 && warning_count == 0 {
            return;
        }
        let mut emitter = TerminalEmitter::with_color_mode(&mut self.err, self.color, self.err_is_tty);
        emitter.emit_summary(error_count, warning_count);
        emitter.flush();
    }

    pub fn into_parts(self) -> (W, E) {
        (self.out, self.err)
    }
}

/// Read a source file, or print why not and exit.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
                io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}
