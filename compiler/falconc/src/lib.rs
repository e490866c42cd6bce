//! Falcon command line driver.
//!
//! Wires the phases together: [`pipeline`] runs lex, parse, annotate and
//! evaluate over one source text; [`commands`] implements the `run`, `lex`
//! and `parse` subcommands; [`repl`] is the interactive loop.

pub mod commands;
pub mod pipeline;
pub mod repl;
mod tracing_setup;

pub use pipeline::{format_result, prepare, run_source, Execution, Prepared};
pub use repl::{Repl, ReplConfig, ReplStep};
pub use tracing_setup::init_tracing;
