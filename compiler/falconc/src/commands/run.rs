//! The `run` command: execute a source file once.

use std::io::Write;

use falcon_diagnostic::emitter::ColorMode;
use falcon_eval::Environment;

use super::{read_file, Console};
use crate::pipeline::{format_result, run_source};

/// Run a Falcon source file, exiting with status 1 on failure.
pub fn run_file(path: &str, color: ColorMode) {
    let source = read_file(path);
    let mut console = Console::stdio(color);
    if !run_text(&source, &mut console) {
        std::process::exit(1);
    }
}

/// Run `source` in a fresh environment.
///
/// Each statement that produces a value is printed. Warnings and the first
/// fatal error go to the error stream. Returns `false` if an error occurred.
pub fn run_text<W: Write, E: Write>(source: &str, console: &mut Console<W, E>) -> bool {
    let mut env = Environment::new();
    let execution = match run_source(source, &mut env) {
        Ok(execution) => execution,
        Err(err) => {
            console.report(source, &[err.to_diagnostic()]);
            console.summarize(1, 0);
            return false;
        }
    };

    console.report(source, &execution.warnings);
    for line in execution.output.results.iter().filter_map(format_result) {
        let _ = writeln!(console.out, "{line}");
    }
    let _ = console.out.flush();

    let error = execution.error_diagnostic();
    if let Some(diag) = &error {
        console.report(source, std::slice::from_ref(diag));
    }
    let error_count = usize::from(error.is_some());
    console.summarize(error_count, execution.warnings.len());
    error.is_none()
}
