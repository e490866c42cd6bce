#![deny(clippy::arithmetic_side_effects)]
//! Falcon Eval - tree-walking evaluator.
//!
//! # Architecture
//!
//! - [`Environment`]: a stack of frames, one per entered scope. Each frame
//!   links to the frame of its *lexically* enclosing scope, found by
//!   searching the stack for that scope, so shadowing and loop bodies see
//!   the right variables.
//! - [`Interpreter`]: evaluates one node at a time. Entering a scope goes
//!   through a [`ScopedInterpreter`] guard that pops the frame on every exit
//!   path.
//! - [`Completion`]: what a statement produced. `break` and `continue`
//!   travel up as [`ControlSignal`]s in the `Ok` channel; errors use `Err`.
//! - [`evaluate_program`]: runs a program statement by statement against a
//!   persistent environment and reports each statement's result.
//!
//! All arithmetic is checked 32-bit signed integer arithmetic.

mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod program;
mod value;

pub use environment::{Environment, Slot};
pub use errors::{EvalError, EvalErrorKind};
pub use interpreter::{Interpreter, ScopedInterpreter};
pub use operators::{
    evaluate_binary, evaluate_unary, evaluate_update, AssignOp, BinaryOp, UnaryOp, UpdateOp,
};
pub use program::{evaluate_program, reporting_units, ProgramOutput, StatementResult};
pub use value::{Completion, ControlSignal, Value};

/// Result of evaluating one node.
pub type EvalResult = Result<Completion, EvalError>;
