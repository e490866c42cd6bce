//! Parser snapshots for speculative parsing.
//!
//! A snapshot is the lookahead token plus the lexer cursor. Both must be
//! restored together: the lexer position alone would re-lex the token the
//! parser already holds, and the token alone would leave the lexer ahead.
//!
//! Speculation must not build nodes. The only speculative path is the
//! assignment prefix check, which just inspects two tokens:
//!
//! ```ignore
//! let snapshot = self.snapshot();
//! if self.eat_assignment_prefix() {
//!     // committed: `Identifier assignOp` matched
//! } else {
//!     self.restore(snapshot);
//!     // parse as an expression
//! }
//! ```

use falcon_ir::Token;

/// Saved parser state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserSnapshot {
    /// The token that was in lookahead.
    pub(crate) ahead: Token,
    /// Lexer cursor just past `ahead`.
    pub(crate) lexer_pos: usize,
}

impl ParserSnapshot {
    #[inline]
    pub(crate) fn new(ahead: Token, lexer_pos: usize) -> Self {
        ParserSnapshot { ahead, lexer_pos }
    }
}
