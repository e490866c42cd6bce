//! Statement-by-statement program execution.

use falcon_ir::{Node, NodeKind};
use falcon_scope::ScopeMap;
use tracing::debug;

use crate::{Completion, Environment, EvalError, Interpreter};

/// What one top-level statement reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatementResult {
    /// The value, for declarations and expression statements.
    pub value: Option<i32>,
    /// `true` when the statement declared a variable.
    pub is_new_variable: bool,
    /// Variable declared, assigned or read, if any.
    pub name: Option<String>,
}

impl StatementResult {
    fn from_completion(statement: &Node, completion: &Completion) -> Self {
        let value = completion.value().map(crate::Value::get);
        let name = match statement.kind() {
            NodeKind::IntDeclaration | NodeKind::Identifier => Some(statement.text()),
            NodeKind::Assignment => statement
                .child(0)
                .filter(|target| target.kind() == NodeKind::Identifier)
                .map(Node::text),
            _ => None,
        };
        StatementResult {
            value,
            is_new_variable: statement.kind() == NodeKind::IntDeclaration,
            name: value.and(name).map(str::to_string),
        }
    }
}

/// Results of running a program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgramOutput {
    /// One entry per reporting unit that completed.
    pub results: Vec<StatementResult>,
    /// The error that stopped execution, if any.
    pub error: Option<EvalError>,
}

impl ProgramOutput {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// The nodes that each report one result for `statement`.
///
/// `int a, b = 2;` reports `a` and `b` separately; every other statement
/// reports once.
pub fn reporting_units(statement: &Node) -> &[Node] {
    match statement.kind() {
        NodeKind::DeclarationList => statement.children(),
        _ => std::slice::from_ref(statement),
    }
}

/// Run each statement of `program` against `env`.
///
/// Execution stops at the first error. Bindings made by earlier statements
/// stay in `env`, and no inner frame is left pushed.
pub fn evaluate_program(env: &mut Environment, program: &Node, scopes: &ScopeMap) -> ProgramOutput {
    debug!(statements = program.children().len(), "evaluating program");
    let mut output = ProgramOutput::default();
    let mut interpreter = Interpreter::new(env, scopes);
    let units = program.children().iter().flat_map(reporting_units);
    for unit in units {
        match interpreter.eval(unit) {
            Ok(completion) => output
                .results
                .push(StatementResult::from_completion(unit, &completion)),
            Err(err) => {
                debug!(%err, "evaluation stopped");
                output.error = Some(err);
                break;
            }
        }
    }
    output
}
