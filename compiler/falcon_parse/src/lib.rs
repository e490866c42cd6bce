//! Parser for Falcon source text.
//!
//! Recursive descent with one token of lookahead. Operator precedence comes
//! from layering one function per tier:
//!
//! ```text
//! assignOrExpr := Identifier assignOp assignOrExpr | conditional
//! assignOp     := "=" | "+=" | "-=" | "*=" | "/=" | "%="
//! conditional  := orExp ( "?" assignOrExpr ":" conditional )?
//! orExp        := andExp   ( "||" andExp )*
//! andExp       := equalExp ( "&&" equalExp )*
//! equalExp     := relExp   ( ("==" | "!=") relExp )*
//! relExp       := addExp   ( (">" | "<" | ">=" | "<=") addExp )*
//! addExp       := mulExp   ( ("+" | "-") mulExp )*
//! mulExp       := unaryExp ( ("*" | "/" | "%") unaryExp )*
//! unaryExp     := ("-" | "++" | "--") unaryExp | postfixExp
//! postfixExp   := priExp ( "++" | "--" )*
//! priExp       := Identifier | IntLiteral | "(" assignOrExpr ")"
//! ```
//!
//! `assignOrExpr` cannot be decided from one token: `a = 1` and `a + 1`
//! both start with an identifier. The parser snapshots its state, checks for
//! `Identifier assignOp`, and on failure restores the snapshot and parses a
//! `conditional` instead. See [`snapshot`].

mod error;
mod parser;
pub mod snapshot;

pub use error::ParseError;
pub use parser::Parser;

use falcon_ir::Node;

/// Parse a whole program.
pub fn parse(source: &str) -> Result<Node, ParseError> {
    Parser::new(source)?.parse_program()
}
