//! Falcon tokenizer.
//!
//! A hand-written deterministic automaton that turns source text into
//! [`Token`]s on demand. Nothing is materialized up front: the parser pulls
//! one token at a time from a [`Lexer`] and may rewind it with
//! [`Lexer::set_position`] when it backtracks.
//!
//! ```
//! use falcon_ir::TokenKind;
//!
//! let kinds: Vec<_> = falcon_lexer::tokenize("int a = 10;")
//!     .map(|tok| tok.map(|t| t.kind))
//!     .collect::<Result<_, _>>()
//!     .unwrap_or_default();
//!
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::IntKeyword,
//!         TokenKind::Identifier,
//!         TokenKind::Assignment,
//!         TokenKind::IntLiteral,
//!         TokenKind::Semicolon,
//!         TokenKind::EndOfInput,
//!     ]
//! );
//! ```

mod keywords;
mod lex_error;
mod lexer;

use std::iter::FusedIterator;

use falcon_ir::Token;

pub use lex_error::LexError;
pub use lexer::Lexer;

/// Tokenize `source` lazily.
///
/// The stream yields `EndOfInput` once and then ends; after the first
/// error it ends as well.
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens {
        lexer: Lexer::new(source),
        finished: false,
    }
}

/// Iterator returned by [`tokenize`].
#[derive(Clone, Debug)]
pub struct Tokens<'src> {
    lexer: Lexer<'src>,
    finished: bool,
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.lexer.next_token();
        match &item {
            Ok(token) => self.finished = token.is_end(),
            Err(_) => self.finished = true,
        }
        Some(item)
    }
}

impl FusedIterator for Tokens<'_> {}
