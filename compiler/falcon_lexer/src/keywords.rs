//! Keyword table.
//!
//! `int` never reaches this table: the automaton recognizes it letter by
//! letter. Everything else that looks like an identifier is checked here
//! once the identifier is complete.

use falcon_ir::TokenKind;

/// Look up a keyword by its full text.
///
/// Returns `None` for ordinary identifiers.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    // All keywords are 2-8 lowercase ASCII letters.
    if !(2..=8).contains(&text.len()) {
        return None;
    }
    match text {
        "if" => Some(TokenKind::If),
        "do" => Some(TokenKind::Do),
        "for" => Some(TokenKind::For),
        "else" => Some(TokenKind::Else),
        "while" => Some(TokenKind::While),
        "break" => Some(TokenKind::Break),
        "continue" => Some(TokenKind::Continue),
        _ => None,
    }
}
