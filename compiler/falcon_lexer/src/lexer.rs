//! The tokenizer automaton.
//!
//! Each call to [`Lexer::next_token`] starts in `State::Initial` and feeds
//! one byte at a time through [`transition`] until a token is accepted.
//! The table below is the whole machine:
//!
//! | state        | on                   | step                          |
//! |--------------|----------------------|-------------------------------|
//! | `Initial`    | whitespace           | skip                          |
//! |              | `i`                  | shift `IntKw1`                |
//! |              | other ident start    | shift `Identifier`            |
//! |              | digit                | shift `IntLiteral`            |
//! |              | `> < = ! & \| + - * / %` | shift the operator prefix |
//! |              | single-char token    | accept                        |
//! | `IntKw1`     | `n`                  | shift `IntKw2`                |
//! | `IntKw2`     | `t`                  | shift `IntKw3`                |
//! | `IntKw1..3`  | other ident char     | shift `Identifier`            |
//! | `IntKw3`     | anything else        | finish `IntKeyword`           |
//! | `Plus`       | `+` / `=`            | accept `++` / `+=`            |
//! | `Minus`      | `-` / `=`            | accept `--` / `-=`            |
//! | `Star`, `Percent` | `=`             | accept `*=` / `%=`            |
//! | `Slash`      | `/`                  | drop the rest of the line     |
//! |              | `=`                  | accept `/=`                   |
//!
//! "Finish" leaves the cursor on the byte that did not extend the token,
//! which is what gives maximal munch.

use falcon_ir::{Span, Token, TokenKind};
use tracing::trace;

use crate::keywords;
use crate::LexError;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum State {
    Initial,
    Identifier,
    /// Seen `i`.
    IntKw1,
    /// Seen `in`.
    IntKw2,
    /// Seen `int`.
    IntKw3,
    IntLiteral,
    Greater,
    Less,
    Assign,
    Bang,
    Ampersand,
    Pipe,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
}

/// What the automaton does with the current byte.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Step {
    /// Consume the byte and move to a new state.
    Shift(State),
    /// Consume a whitespace byte between tokens.
    Skip,
    /// Consume the byte and finish the token.
    Accept(TokenKind),
    /// Finish the token without consuming the byte.
    Finish(TokenKind),
    /// Second `/` of a line comment.
    LineComment,
    Unrecognized,
    Incomplete { op: char, expected: &'static str },
    End,
}

#[inline]
fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

#[inline]
fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// The transition function. `None` is end of input.
fn transition(state: State, byte: Option<u8>) -> Step {
    match state {
        State::Initial => match byte {
            None => Step::End,
            Some(b' ' | b'\t' | b'\r' | b'\n') => Step::Skip,
            Some(b'i') => Step::Shift(State::IntKw1),
            Some(b) if is_ident_start(b) => Step::Shift(State::Identifier),
            Some(b'0'..=b'9') => Step::Shift(State::IntLiteral),
            Some(b'>') => Step::Shift(State::Greater),
            Some(b'<') => Step::Shift(State::Less),
            Some(b'=') => Step::Shift(State::Assign),
            Some(b'!') => Step::Shift(State::Bang),
            Some(b'&') => Step::Shift(State::Ampersand),
            Some(b'|') => Step::Shift(State::Pipe),
            Some(b'+') => Step::Shift(State::Plus),
            Some(b'-') => Step::Shift(State::Minus),
            Some(b'*') => Step::Shift(State::Star),
            Some(b'/') => Step::Shift(State::Slash),
            Some(b'%') => Step::Shift(State::Percent),
            Some(b';') => Step::Accept(TokenKind::Semicolon),
            Some(b',') => Step::Accept(TokenKind::Comma),
            Some(b'(') => Step::Accept(TokenKind::LParen),
            Some(b')') => Step::Accept(TokenKind::RParen),
            Some(b'{') => Step::Accept(TokenKind::LBrace),
            Some(b'}') => Step::Accept(TokenKind::RBrace),
            Some(b'?') => Step::Accept(TokenKind::Question),
            Some(b':') => Step::Accept(TokenKind::Colon),
            Some(_) => Step::Unrecognized,
        },

        State::Identifier => match byte {
            Some(b) if is_ident_continue(b) => Step::Shift(State::Identifier),
            _ => Step::Finish(TokenKind::Identifier),
        },
        State::IntKw1 => match byte {
            Some(b'n') => Step::Shift(State::IntKw2),
            Some(b) if is_ident_continue(b) => Step::Shift(State::Identifier),
            _ => Step::Finish(TokenKind::Identifier),
        },
        State::IntKw2 => match byte {
            Some(b't') => Step::Shift(State::IntKw3),
            Some(b) if is_ident_continue(b) => Step::Shift(State::Identifier),
            _ => Step::Finish(TokenKind::Identifier),
        },
        State::IntKw3 => match byte {
            Some(b) if is_ident_continue(b) => Step::Shift(State::Identifier),
            _ => Step::Finish(TokenKind::IntKeyword),
        },

        State::IntLiteral => match byte {
            Some(b'0'..=b'9') => Step::Shift(State::IntLiteral),
            _ => Step::Finish(TokenKind::IntLiteral),
        },

        State::Greater => match byte {
            Some(b'=') => Step::Accept(TokenKind::GE),
            _ => Step::Finish(TokenKind::GT),
        },
        State::Less => match byte {
            Some(b'=') => Step::Accept(TokenKind::LE),
            _ => Step::Finish(TokenKind::LT),
        },
        State::Assign => match byte {
            Some(b'=') => Step::Accept(TokenKind::Equal),
            _ => Step::Finish(TokenKind::Assignment),
        },
        State::Bang => match byte {
            Some(b'=') => Step::Accept(TokenKind::NotEqual),
            _ => Step::Incomplete {
                op: '!',
                expected: "!=",
            },
        },
        State::Ampersand => match byte {
            Some(b'&') => Step::Accept(TokenKind::And),
            _ => Step::Incomplete {
                op: '&',
                expected: "&&",
            },
        },
        State::Pipe => match byte {
            Some(b'|') => Step::Accept(TokenKind::Or),
            _ => Step::Incomplete {
                op: '|',
                expected: "||",
            },
        },
        State::Plus => match byte {
            Some(b'+') => Step::Accept(TokenKind::Increment),
            Some(b'=') => Step::Accept(TokenKind::PlusAssign),
            _ => Step::Finish(TokenKind::Plus),
        },
        State::Minus => match byte {
            Some(b'-') => Step::Accept(TokenKind::Decrement),
            Some(b'=') => Step::Accept(TokenKind::MinusAssign),
            _ => Step::Finish(TokenKind::Minus),
        },
        State::Star => match byte {
            Some(b'=') => Step::Accept(TokenKind::StarAssign),
            _ => Step::Finish(TokenKind::Star),
        },
        State::Slash => match byte {
            Some(b'/') => Step::LineComment,
            Some(b'=') => Step::Accept(TokenKind::SlashAssign),
            _ => Step::Finish(TokenKind::Slash),
        },
        State::Percent => match byte {
            Some(b'=') => Step::Accept(TokenKind::PercentAssign),
            _ => Step::Finish(TokenKind::Percent),
        },
    }
}

/// Pull-based tokenizer over a source string.
///
/// Cheap to clone; a clone is an independent cursor over the same text.
#[derive(Clone, Debug)]
pub struct Lexer<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer { source, pos: 0 }
    }

    /// The text being tokenized.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Byte offset of the cursor.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move the cursor back to a position previously returned by
    /// [`position`](Self::position).
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(pos <= self.source.len(), "cursor past end of input");
        self.pos = pos.min(self.source.len());
    }

    /// `true` when only whitespace and comments remain.
    pub fn done(&self) -> bool {
        self.clone().next_token().is_ok_and(|token| token.is_end())
    }

    /// Produce the next token.
    ///
    /// Whitespace and `//` comments before the token are consumed. At the
    /// end of input every call returns `EndOfInput`.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let bytes = self.source.as_bytes();
        let mut state = State::Initial;
        let mut start = self.pos;

        loop {
            match transition(state, bytes.get(self.pos).copied()) {
                Step::Shift(next) => {
                    self.pos += 1;
                    state = next;
                }
                Step::Skip => {
                    self.pos += 1;
                    start = self.pos;
                }
                Step::Accept(kind) => {
                    self.pos += 1;
                    return Ok(self.emit(kind, start));
                }
                Step::Finish(kind) => return Ok(self.emit(kind, start)),
                Step::LineComment => {
                    // Leave the newline itself for `Skip`.
                    self.pos = memchr::memchr(b'\n', &bytes[self.pos..])
                        .map_or(bytes.len(), |offset| self.pos + offset);
                    state = State::Initial;
                    start = self.pos;
                }
                Step::Unrecognized => {
                    let ch = self.source[self.pos..].chars().next().unwrap_or('\u{FFFD}');
                    let span = Span::from_range(self.pos..self.pos + ch.len_utf8());
                    return Err(LexError::UnrecognizedCharacter { ch, span });
                }
                Step::Incomplete { op, expected } => {
                    return Err(LexError::IncompleteOperator {
                        op,
                        expected,
                        span: Span::from_range(start..self.pos),
                    });
                }
                Step::End => {
                    trace!(offset = start, "end of input");
                    return Ok(Token::end_of_input(Span::from_range(start..start).start));
                }
            }
        }
    }

    fn emit(&self, kind: TokenKind, start: usize) -> Token {
        let text = &self.source[start..self.pos];
        let kind = if kind == TokenKind::Identifier {
            keywords::lookup(text).unwrap_or(kind)
        } else {
            kind
        };
        let token = Token::new(kind, text, Span::from_range(start..self.pos));
        trace!(kind = ?token.kind, text = %token.text, span = ?token.span, "token");
        token
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, reason = "Tests use expect for brevity")]
mod tests;
