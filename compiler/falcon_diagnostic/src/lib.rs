//! Diagnostic system for error reporting.
//!
//! Every phase of the pipeline reports failures the same way:
//! - Error codes for searchability
//! - A message (what went wrong)
//! - At most one labeled span (where it went wrong)
//! - Notes (extra context)
//!
//! Phase errors (`LexError`, `ParseError`, `EvalError`) stay typed inside
//! their crates and convert into a [`Diagnostic`] only at the edge, where the
//! CLI hands them to an [`emitter::DiagnosticEmitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
