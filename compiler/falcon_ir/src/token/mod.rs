//! Token types produced by the lexer.

use std::fmt;

use crate::Span;

/// Token kinds.
///
/// `int` is lexed by dedicated automaton states and reported as
/// [`TokenKind::IntKeyword`]; the remaining keywords are classified from the
/// finished identifier text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// `[a-zA-Z_][a-zA-Z0-9_]*`
    Identifier,
    /// `int`
    IntKeyword,
    /// `[0-9]+`, kept verbatim (leading zeros included).
    IntLiteral,

    // Keywords
    If,
    Else,
    For,
    While,
    Do,
    Break,
    Continue,

    // Punctuation
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,

    // Operators
    Assignment,
    PlusAssign,
    MinusAssign,
    StarAssign,
    SlashAssign,
    PercentAssign,
    Or,
    And,
    Equal,
    NotEqual,
    GT,
    GE,
    LT,
    LE,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Increment,
    Decrement,
    Question,
    Colon,

    /// End of input. Repeated calls after the end keep producing it.
    EndOfInput,
}

impl TokenKind {
    /// Human-readable description used in syntax errors.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::IntKeyword => "`int`",
            TokenKind::IntLiteral => "integer literal",
            TokenKind::If => "`if`",
            TokenKind::Else => "`else`",
            TokenKind::For => "`for`",
            TokenKind::While => "`while`",
            TokenKind::Do => "`do`",
            TokenKind::Break => "`break`",
            TokenKind::Continue => "`continue`",
            TokenKind::Semicolon => "`;`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Comma => "`,`",
            TokenKind::Assignment => "`=`",
            TokenKind::PlusAssign => "`+=`",
            TokenKind::MinusAssign => "`-=`",
            TokenKind::StarAssign => "`*=`",
            TokenKind::SlashAssign => "`/=`",
            TokenKind::PercentAssign => "`%=`",
            TokenKind::Or => "`||`",
            TokenKind::And => "`&&`",
            TokenKind::Equal => "`==`",
            TokenKind::NotEqual => "`!=`",
            TokenKind::GT => "`>`",
            TokenKind::GE => "`>=`",
            TokenKind::LT => "`<`",
            TokenKind::LE => "`<=`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Percent => "`%`",
            TokenKind::Increment => "`++`",
            TokenKind::Decrement => "`--`",
            TokenKind::Question => "`?`",
            TokenKind::Colon => "`:`",
            TokenKind::EndOfInput => "end of input",
        }
    }

    /// `=` and the compound forms `+= -= *= /= %=`.
    pub fn is_assignment_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Assignment
                | TokenKind::PlusAssign
                | TokenKind::MinusAssign
                | TokenKind::StarAssign
                | TokenKind::SlashAssign
                | TokenKind::PercentAssign
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A token with its source text and location.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    /// The end-of-input token at `offset`.
    pub fn end_of_input(offset: u32) -> Self {
        Token {
            kind: TokenKind::EndOfInput,
            text: String::new(),
            span: Span::point(offset),
        }
    }

    /// Returns `true` if this token marks the end of input.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}]", self.kind)?;
        if !self.text.is_empty() {
            write!(f, ": {}", self.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
