//! Evaluation errors and their constructors.
//!
//! Every runtime failure is an [`EvalError`]: a structured
//! [`EvalErrorKind`] plus the span of the node that failed. Build them
//! through the constructor functions below so spans are never forgotten.

use std::fmt;

use falcon_diagnostic::{Diagnostic, ErrorCode};
use falcon_ir::{NodeKind, Span};

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("variable `{name}` is already declared in this scope")]
    DuplicateDeclaration { name: String },

    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String },

    #[error("invalid assignment target")]
    InvalidAssignmentTarget,

    /// `/` or `%` with a zero right operand.
    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in `{operation}`")]
    IntegerOverflow { operation: &'static str },

    #[error("integer literal `{text}` is out of range")]
    InvalidLiteral { text: String },

    /// A node shape the parser never produces.
    #[error("malformed syntax tree: unexpected {kind} node")]
    MalformedTree { kind: NodeKind },
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::DuplicateDeclaration { .. } => ErrorCode::E2001,
            EvalErrorKind::UndefinedVariable { .. } => ErrorCode::E2002,
            EvalErrorKind::InvalidAssignmentTarget => ErrorCode::E2003,
            EvalErrorKind::DivisionByZero => ErrorCode::E2004,
            EvalErrorKind::IntegerOverflow { .. } => ErrorCode::E2005,
            EvalErrorKind::InvalidLiteral { .. } => ErrorCode::E2006,
            EvalErrorKind::MalformedTree { .. } => ErrorCode::E9001,
        }
    }
}

/// A runtime failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Span of the failing node, when known.
    pub span: Option<Span>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach a span unless one is already set.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Convert to a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::new(self.code()).with_message(self.kind.to_string());
        if let Some(span) = self.span {
            let label = match &self.kind {
                EvalErrorKind::DuplicateDeclaration { .. } => "declared again here",
                EvalErrorKind::UndefinedVariable { .. } => "not found in any enclosing scope",
                EvalErrorKind::InvalidAssignmentTarget => "cannot assign to this",
                EvalErrorKind::DivisionByZero => "right operand is zero",
                EvalErrorKind::IntegerOverflow { .. } => "result does not fit in 32 bits",
                EvalErrorKind::InvalidLiteral { .. } => "must be at most 2147483647",
                EvalErrorKind::MalformedTree { .. } => "here",
            };
            diag = diag.with_label(span, label);
        }
        if let EvalErrorKind::DuplicateDeclaration { name } = &self.kind {
            diag = diag.with_note(format!(
                "an inner block may shadow `{name}`, but one scope holds one `{name}`"
            ));
        }
        diag
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(span) = self.span {
            write!(f, " at position {}", span.position())?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

// Constructors

#[cold]
pub fn duplicate_declaration(name: &str, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::DuplicateDeclaration {
        name: name.to_string(),
    })
    .with_span(span)
}

#[cold]
pub fn undefined_variable(name: &str, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
    .with_span(span)
}

#[cold]
pub fn invalid_assignment_target(span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidAssignmentTarget).with_span(span)
}

#[cold]
pub fn invalid_literal(text: &str, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidLiteral {
        text: text.to_string(),
    })
    .with_span(span)
}

#[cold]
pub fn malformed_tree(kind: NodeKind, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::MalformedTree { kind }).with_span(span)
}

#[cfg(test)]
mod tests;
