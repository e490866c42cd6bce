//! Error codes for all diagnostics.
//!
//! Grouped by phase:
//! - E0xxx: lexer
//! - E1xxx: parser
//! - E2xxx: evaluator
//! - W3xxx: scope annotator warnings
//! - E9xxx: internal errors

use std::fmt;

/// Error codes, one per distinct failure.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unrecognized character
    E0001,
    /// Incomplete two-character operator (`&`, `|`, `!` alone)
    E0002,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,

    // Evaluator Errors (E2xxx)
    /// Variable declared twice in the same scope
    E2001,
    /// Undefined variable
    E2002,
    /// Assignment target is not a variable
    E2003,
    /// Division or remainder by zero
    E2004,
    /// Integer overflow
    E2005,
    /// Integer literal out of range
    E2006,

    // Annotator Warnings (W3xxx)
    /// `break` or `continue` outside of a loop
    W3001,

    // Internal Errors (E9xxx)
    /// Syntax tree shape the evaluator cannot handle
    E9001,
}

impl ErrorCode {
    /// The code as written in diagnostics, e.g. `"E1001"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::W3001 => "W3001",
            ErrorCode::E9001 => "E9001",
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W3001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
