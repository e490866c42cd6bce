//! Static scope annotation.
//!
//! One walk over a parsed program, before anything runs. It decides which
//! nodes open a lexical scope, links each scope to the one enclosing it,
//! and flags `break`/`continue` statements that have no loop around them.
//!
//! Scope-bearing nodes:
//! - the `Program` root, always [`ScopeId::GLOBAL`]
//! - every `Block`
//! - a `For` whose init part declares a variable
//!
//! The result is a [`ScopeMap`] side table keyed by `NodeId`; the tree
//! itself is left untouched.

mod annotate;
mod scope_tree;

pub use annotate::{annotate_scopes, ScopeMap};
pub use scope_tree::{Scope, ScopeId, ScopeTree};
