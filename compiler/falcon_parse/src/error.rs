//! Parse error types.

use falcon_diagnostic::{Diagnostic, ErrorCode};
use falcon_ir::{Span, TokenKind};
use falcon_lexer::LexError;

/// A syntax error. Positions in messages are 1-based.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ParseError {
    /// `expect` found a different token than the grammar requires.
    #[error("syntax error at position {}: expected {expected}, found {found}", .span.position())]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },

    /// No expression can start with the lookahead token.
    #[error("syntax error at position {}: expected expression, found {found}", .span.position())]
    ExpectedExpression { found: TokenKind, span: Span },

    /// The tokenizer failed.
    #[error(transparent)]
    Lexical(#[from] LexError),
}

impl ParseError {
    /// Location of the offending token.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. } | ParseError::ExpectedExpression { span, .. } => {
                *span
            }
            ParseError::Lexical(err) => err.span(),
        }
    }

    /// 1-based position of the offending token.
    pub fn position(&self) -> u32 {
        self.span().position()
    }

    /// The input ended before the construct was complete.
    ///
    /// The REPL keeps buffering lines while this holds.
    pub fn is_incomplete(&self) -> bool {
        match self {
            ParseError::UnexpectedToken { found, .. } | ParseError::ExpectedExpression { found, .. } => {
                *found == TokenKind::EndOfInput
            }
            ParseError::Lexical(_) => false,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseError::ExpectedExpression { .. } => ErrorCode::E1002,
            ParseError::Lexical(err) => err.code(),
        }
    }

    /// Convert to a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ParseError::UnexpectedToken {
                expected,
                found,
                span,
            } => Diagnostic::new(self.code())
                .with_message(format!("expected {expected}, found {found}"))
                .with_label(*span, format!("unexpected {found}")),
            ParseError::ExpectedExpression { found, span } => Diagnostic::new(self.code())
                .with_message(format!("expected expression, found {found}"))
                .with_label(*span, "expected an identifier, literal or `(` here"),
            ParseError::Lexical(err) => err.to_diagnostic(),
        }
    }
}
