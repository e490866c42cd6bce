//! One pass of the interpreter pipeline over a source text.

use falcon_diagnostic::Diagnostic;
use falcon_eval::{evaluate_program, Environment, EvalError, ProgramOutput, StatementResult};
use falcon_ir::Node;
use falcon_parse::{parse, ParseError};
use falcon_scope::{annotate_scopes, ScopeMap};
use tracing::debug;

/// A parsed and annotated program, ready to run.
#[derive(Debug)]
pub struct Prepared {
    pub program: Node,
    scopes: ScopeMap,
}

impl Prepared {
    /// Annotator warnings, such as a `break` outside any loop.
    pub fn warnings(&self) -> &[Diagnostic] {
        self.scopes.warnings()
    }

    /// Evaluate against `env`.
    pub fn execute(self, env: &mut Environment) -> Execution {
        let output = evaluate_program(env, &self.program, &self.scopes);
        Execution {
            warnings: self.scopes.warnings().to_vec(),
            program: self.program,
            output,
        }
    }
}

/// Everything a successful parse led to.
#[derive(Debug)]
pub struct Execution {
    pub program: Node,
    pub warnings: Vec<Diagnostic>,
    pub output: ProgramOutput,
}

impl Execution {
    /// The runtime error as a diagnostic, if evaluation stopped early.
    pub fn error_diagnostic(&self) -> Option<Diagnostic> {
        self.output.error.as_ref().map(EvalError::to_diagnostic)
    }
}

/// Parse and annotate `source`.
pub fn prepare(source: &str) -> Result<Prepared, ParseError> {
    debug!(bytes = source.len(), "parsing");
    let program = parse(source)?;
    debug!(nodes = program.subtree_len(), "annotating scopes");
    let scopes = annotate_scopes(&program);
    Ok(Prepared { program, scopes })
}

/// Parse, annotate and evaluate `source` against `env`.
///
/// A syntax or lexical error is returned before anything runs. Once parsing
/// succeeds the program always executes; a runtime error is reported in
/// [`Execution::output`] alongside the results that preceded it.
pub fn run_source(source: &str, env: &mut Environment) -> Result<Execution, ParseError> {
    prepare(source).map(|prepared| prepared.execute(env))
}

/// How a statement result is shown to the user.
///
/// `(*)` marks a newly declared variable. Statements without a value show
/// nothing.
pub fn format_result(result: &StatementResult) -> Option<String> {
    let value = result.value?;
    Some(match (&result.name, result.is_new_variable) {
        (Some(name), true) => format!("(*){name}: {value}"),
        (Some(name), false) => format!("{name}: {value}"),
        (None, _) => value.to_string(),
    })
}
