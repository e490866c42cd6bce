//! Falcon IR - shared data structures for the interpreter pipeline.
//!
//! This crate contains the types every phase agrees on:
//! - Spans for source locations
//! - Tokens produced by the lexer
//! - AST nodes produced by the parser and walked by the annotator and evaluator
//!
//! # Design
//!
//! The AST is a strictly child-owning tree. Nodes carry a `NodeId` so later
//! passes can attach side tables (see `falcon_scope::ScopeMap`) without
//! pointers back into the tree.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod span;
mod token;

pub use ast::{ForParts, Node, NodeId, NodeKind, TreeDisplay};
pub use span::Span;
pub use token::{Token, TokenKind};
