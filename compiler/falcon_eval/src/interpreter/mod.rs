//! Tree-walking interpreter for Falcon.
//!
//! [`Interpreter::eval`] dispatches on the node kind. Expressions complete
//! with a [`Value`], statements with [`Completion::Void`], and `break` or
//! `continue` with a [`Completion::Signal`] that loops consume and every
//! other statement passes upward untouched.
//!
//! Scope-bearing nodes (`Block`, and a `for` that declares its counter)
//! run inside a [`ScopedInterpreter`], so their frame is popped however
//! evaluation leaves them.

mod scope_guard;

pub use scope_guard::ScopedInterpreter;

use falcon_ir::{ForParts, Node, NodeKind};
use falcon_scope::ScopeMap;
use falcon_stack::ensure_sufficient_stack;

use crate::errors::{
    duplicate_declaration, invalid_assignment_target, invalid_literal, malformed_tree,
    undefined_variable,
};
use crate::operators::{
    evaluate_binary, evaluate_unary, evaluate_update, AssignOp, BinaryOp, UnaryOp, UpdateOp,
};
use crate::{Completion, ControlSignal, Environment, EvalError, EvalResult, Slot, Value};

/// Evaluates nodes against an environment.
///
/// The interpreter borrows both the environment and the scope map of the
/// tree being run; it owns no state of its own.
pub struct Interpreter<'a> {
    pub(crate) env: &'a mut Environment,
    scopes: &'a ScopeMap,
}

impl<'a> Interpreter<'a> {
    pub fn new(env: &'a mut Environment, scopes: &'a ScopeMap) -> Self {
        Interpreter { env, scopes }
    }

    pub fn env(&self) -> &Environment {
        self.env
    }

    /// Evaluate a node.
    pub fn eval(&mut self, node: &Node) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(node))
    }

    fn eval_inner(&mut self, node: &Node) -> EvalResult {
        match node.kind() {
            NodeKind::Program => self.eval_statements(node.children()),
            NodeKind::Block => self.eval_block(node),
            NodeKind::IntDeclaration => self.eval_declaration(node),
            NodeKind::DeclarationList => self.eval_declaration_list(node),
            NodeKind::Assignment => self.eval_assignment(node),
            NodeKind::Conditional => self.eval_conditional(node),
            NodeKind::Logical
            | NodeKind::Relational
            | NodeKind::Additive
            | NodeKind::Multiplicative => self.eval_binary(node),
            NodeKind::Unary => self.eval_unary(node),
            NodeKind::PrefixUpdate => self.eval_update(node, true),
            NodeKind::PostfixUpdate => self.eval_update(node, false),
            NodeKind::IntLiteral => eval_int(node),
            NodeKind::Identifier => self.eval_identifier(node),
            NodeKind::If => self.eval_if(node),
            NodeKind::For => self.eval_for(node),
            NodeKind::While => self.eval_while(node),
            NodeKind::DoWhile => self.eval_do_while(node),
            NodeKind::Break => Ok(self.eval_jump(node, ControlSignal::Break)),
            NodeKind::Continue => Ok(self.eval_jump(node, ControlSignal::Continue)),
            NodeKind::Empty => Ok(Completion::Void),
        }
    }

    /// Evaluate an expression that must produce a value.
    fn eval_value(&mut self, node: &Node) -> Result<Value, EvalError> {
        match self.eval(node)? {
            Completion::Value(value) => Ok(value),
            Completion::Signal(_) | Completion::Void => Err(malformed_tree(node.kind(), node.span())),
        }
    }

    fn eval_operand(&mut self, node: &Node) -> Result<i32, EvalError> {
        self.eval_value(node).map(|value| value.get())
    }

    /// Evaluate an expression that must name a variable.
    fn eval_cell(&mut self, node: &Node) -> Result<Slot, EvalError> {
        self.eval_value(node)?
            .as_cell()
            .cloned()
            .ok_or_else(|| invalid_assignment_target(node.span()))
    }

    fn eval_condition(&mut self, node: &Node) -> Result<bool, EvalError> {
        self.eval_value(node).map(|value| value.is_truthy())
    }

    /// Run statements in order, stopping at the first signal.
    fn eval_statements(&mut self, statements: &[Node]) -> EvalResult {
        for statement in statements {
            let completion = self.eval(statement)?;
            if completion.signal().is_some() {
                return Ok(completion);
            }
        }
        Ok(Completion::Void)
    }

    fn eval_block(&mut self, node: &Node) -> EvalResult {
        let scope = self
            .scopes
            .scope_of(node.id())
            .ok_or_else(|| malformed_tree(node.kind(), node.span()))?;
        self.with_frame(scope, |scoped| scoped.eval_statements(node.children()))
    }

    fn eval_declaration(&mut self, node: &Node) -> EvalResult {
        let name = node.text();
        if self.env.is_declared_in_current(name) {
            return Err(duplicate_declaration(name, node.span()));
        }
        let initial = match node.child(0) {
            Some(init) => self.eval_operand(init)?,
            None => 0,
        };
        let slot = self.env.declare(name, initial);
        Ok(Completion::Value(Value::Cell(slot)))
    }

    /// Declarators run left to right, so later ones see earlier ones.
    fn eval_declaration_list(&mut self, node: &Node) -> EvalResult {
        for declarator in node.children() {
            self.eval(declarator)?;
        }
        Ok(Completion::Void)
    }

    fn eval_identifier(&mut self, node: &Node) -> EvalResult {
        self.env
            .lookup(node.text())
            .map(|slot| Completion::Value(Value::Cell(slot)))
            .ok_or_else(|| undefined_variable(node.text(), node.span()))
    }

    fn eval_assignment(&mut self, node: &Node) -> EvalResult {
        let (target, value) = match node.children() {
            [target, value] => (target, value),
            _ => return Err(malformed_tree(node.kind(), node.span())),
        };
        let op = AssignOp::from_symbol(node.text())
            .ok_or_else(|| malformed_tree(node.kind(), node.span()))?;
        let slot = self.eval_cell(target)?;
        let value = self.eval_operand(value)?;
        // The target is read after the right side, which may have changed it.
        let new_value = op
            .apply(slot.get(), value)
            .map_err(|kind| EvalError::from(kind).with_span(node.span()))?;
        slot.set(new_value);
        Ok(Completion::Value(Value::Immediate(new_value)))
    }

    /// `++a` yields the new value, `a++` the old one.
    fn eval_update(&mut self, node: &Node, prefix: bool) -> EvalResult {
        let (Some(operand), Some(op)) = (node.child(0), UpdateOp::from_symbol(node.text())) else {
            return Err(malformed_tree(node.kind(), node.span()));
        };
        let slot = self.eval_cell(operand)?;
        let old_value = slot.get();
        let new_value = evaluate_update(old_value, op)
            .map_err(|kind| EvalError::from(kind).with_span(node.span()))?;
        slot.set(new_value);
        let result = if prefix { new_value } else { old_value };
        Ok(Completion::Value(Value::Immediate(result)))
    }

    /// Only the chosen branch runs, and its value passes through unchanged,
    /// so a conditional over two variables is itself assignable.
    fn eval_conditional(&mut self, node: &Node) -> EvalResult {
        let [condition, then_branch, else_branch] = node.children() else {
            return Err(malformed_tree(node.kind(), node.span()));
        };
        let branch = if self.eval_condition(condition)? {
            then_branch
        } else {
            else_branch
        };
        self.eval_value(branch).map(Completion::Value)
    }

    fn eval_binary(&mut self, node: &Node) -> EvalResult {
        let (left, right) = match node.children() {
            [left, right] => (left, right),
            _ => return Err(malformed_tree(node.kind(), node.span())),
        };
        let op = BinaryOp::from_symbol(node.text())
            .ok_or_else(|| malformed_tree(node.kind(), node.span()))?;
        let left = self.eval_operand(left)?;
        let right = self.eval_operand(right)?;
        evaluate_binary(left, right, op)
            .map(|v| Completion::Value(Value::Immediate(v)))
            .map_err(|kind| EvalError::from(kind).with_span(node.span()))
    }

    fn eval_unary(&mut self, node: &Node) -> EvalResult {
        let (Some(operand), Some(op)) = (node.child(0), UnaryOp::from_symbol(node.text())) else {
            return Err(malformed_tree(node.kind(), node.span()));
        };
        let operand = self.eval_operand(operand)?;
        evaluate_unary(operand, op)
            .map(|v| Completion::Value(Value::Immediate(v)))
            .map_err(|kind| EvalError::from(kind).with_span(node.span()))
    }

    /// Only a signal escapes an `if`; the taken branch's value does not.
    fn eval_if(&mut self, node: &Node) -> EvalResult {
        let (Some(condition), Some(then_branch)) = (node.child(0), node.child(1)) else {
            return Err(malformed_tree(node.kind(), node.span()));
        };
        let branch = if self.eval_condition(condition)? {
            Some(then_branch)
        } else {
            node.child(2)
        };
        match branch {
            Some(branch) => Ok(signal_or_void(self.eval(branch)?)),
            None => Ok(Completion::Void),
        }
    }

    fn eval_while(&mut self, node: &Node) -> EvalResult {
        let (Some(condition), Some(body)) = (node.child(0), node.child(1)) else {
            return Err(malformed_tree(node.kind(), node.span()));
        };
        while self.eval_condition(condition)? {
            if self.eval(body)?.signal() == Some(ControlSignal::Break) {
                break;
            }
        }
        Ok(Completion::Void)
    }

    fn eval_do_while(&mut self, node: &Node) -> EvalResult {
        let (Some(body), Some(condition)) = (node.child(0), node.child(1)) else {
            return Err(malformed_tree(node.kind(), node.span()));
        };
        loop {
            if self.eval(body)?.signal() == Some(ControlSignal::Break) {
                break;
            }
            if !self.eval_condition(condition)? {
                break;
            }
        }
        Ok(Completion::Void)
    }

    fn eval_for(&mut self, node: &Node) -> EvalResult {
        let parts = node
            .for_parts()
            .ok_or_else(|| malformed_tree(node.kind(), node.span()))?;
        match self.scopes.scope_of(node.id()) {
            Some(scope) => self.with_frame(scope, |scoped| scoped.run_for(parts)),
            None => self.run_for(parts),
        }
    }

    /// `continue` still runs the update before the next condition check.
    fn run_for(&mut self, parts: ForParts<'_>) -> EvalResult {
        if let Some(init) = parts.init {
            self.eval(init)?;
        }
        loop {
            if let Some(condition) = parts.condition {
                if !self.eval_condition(condition)? {
                    break;
                }
            }
            if self.eval(parts.body)?.signal() == Some(ControlSignal::Break) {
                break;
            }
            if let Some(update) = parts.update {
                self.eval(update)?;
            }
        }
        Ok(Completion::Void)
    }

    /// A jump outside any loop does nothing; the annotator already warned.
    fn eval_jump(&self, node: &Node, signal: ControlSignal) -> Completion {
        if self.scopes.is_stray_jump(node.id()) {
            Completion::Void
        } else {
            Completion::Signal(signal)
        }
    }
}

/// Decimal literal, kept verbatim by the lexer.
fn eval_int(node: &Node) -> EvalResult {
    node.text()
        .parse::<i32>()
        .map(|v| Completion::Value(Value::Immediate(v)))
        .map_err(|_| invalid_literal(node.text(), node.span()))
}

fn signal_or_void(completion: Completion) -> Completion {
    match completion {
        Completion::Signal(_) => completion,
        Completion::Value(_) | Completion::Void => Completion::Void,
    }
}
