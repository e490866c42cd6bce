//! Lexer errors.

use falcon_diagnostic::{Diagnostic, ErrorCode};
use falcon_ir::Span;

/// A tokenizer failure. Positions in messages are 1-based byte offsets.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("unrecognized character `{ch}` at position {}", .span.position())]
    UnrecognizedCharacter { ch: char, span: Span },

    /// `&`, `|` or `!` without its partner character.
    #[error("incomplete operator `{op}` at position {}: expected `{expected}`", .span.position())]
    IncompleteOperator {
        op: char,
        expected: &'static str,
        span: Span,
    },
}

impl LexError {
    /// Location of the offending character.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnrecognizedCharacter { span, .. }
            | LexError::IncompleteOperator { span, .. } => *span,
        }
    }

    /// 1-based byte position of the offending character.
    pub fn position(&self) -> u32 {
        self.span().position()
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::UnrecognizedCharacter { .. } => ErrorCode::E0001,
            LexError::IncompleteOperator { .. } => ErrorCode::E0002,
        }
    }

    /// Convert to a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            LexError::UnrecognizedCharacter { ch, span } => Diagnostic::new(self.code())
                .with_message(format!("unrecognized character `{}`", ch.escape_debug()))
                .with_label(*span, "not part of any token"),
            LexError::IncompleteOperator { op, expected, span } => {
                Diagnostic::new(self.code())
                    .with_message(format!("incomplete operator `{op}`"))
                    .with_label(*span, format!("expected `{expected}`"))
                    .with_note(format!("`{op}` is only valid as part of `{expected}`"))
            }
        }
    }
}
