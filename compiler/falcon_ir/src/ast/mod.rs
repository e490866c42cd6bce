//! AST node types.
//!
//! A tagged-node tree: every node is `{ id, kind, text, span, children }`.
//! `text` carries the operator symbol, identifier name or literal digits;
//! the meaning of each child position is fixed per kind:
//!
//! | kind             | text        | children                              |
//! |------------------|-------------|---------------------------------------|
//! | `Program`        | empty       | statements                            |
//! | `Block`          | empty       | statements                            |
//! | `IntDeclaration` | name        | `[]` or `[initializer]`               |
//! | `DeclarationList`| empty       | two or more `IntDeclaration`s         |
//! | `Assignment`     | `=`, `+=`.. | `[target, value]`                     |
//! | `Conditional`    | `?`         | `[cond, then, else]`                  |
//! | binary tiers     | operator    | `[left, right]`                       |
//! | `Unary`          | operator    | `[operand]`                           |
//! | `PrefixUpdate`   | `++`, `--`  | `[operand]`                           |
//! | `PostfixUpdate`  | `++`, `--`  | `[operand]`                           |
//! | `If`             | empty       | `[cond, then]` or `[cond, then, else]`|
//! | `For`            | empty       | `[init, cond, update, body]`          |
//! | `While`          | empty       | `[cond, body]`                        |
//! | `DoWhile`        | empty       | `[body, cond]`                        |
//!
//! Absent `for` header parts are `Empty` nodes so the positions stay fixed.

use std::fmt;

use crate::Span;

/// Identifier of a node, unique within one parse.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        NodeId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Node kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    Program,
    IntDeclaration,
    /// `int a, b = 2;`
    DeclarationList,
    /// `=` or a compound assignment; the operator is the node text.
    Assignment,
    /// `cond ? then : else`
    Conditional,
    /// `||`, `&&`
    Logical,
    /// `==`, `!=`, `>`, `<`, `>=`, `<=`
    Relational,
    /// `+`, `-`
    Additive,
    /// `*`, `/`, `%`
    Multiplicative,
    /// Prefix `-`
    Unary,
    /// `++x`, `--x`
    PrefixUpdate,
    /// `x++`, `x--`
    PostfixUpdate,
    IntLiteral,
    Identifier,
    If,
    For,
    While,
    DoWhile,
    Break,
    Continue,
    Block,
    /// Placeholder for an omitted `for` header part.
    Empty,
}

impl NodeKind {
    /// Returns `true` for the three loop forms.
    #[inline]
    pub fn is_loop(self) -> bool {
        matches!(self, NodeKind::For | NodeKind::While | NodeKind::DoWhile)
    }

    /// `true` for `int` statements, with one declarator or several.
    #[inline]
    pub fn is_declaration(self) -> bool {
        matches!(self, NodeKind::IntDeclaration | NodeKind::DeclarationList)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// An AST node. Owns its children; the root is owned by the caller.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    text: String,
    span: Span,
    children: Vec<Node>,
}

/// Borrowed view of a `for` node's fixed child positions.
#[derive(Copy, Clone, Debug)]
pub struct ForParts<'a> {
    pub init: Option<&'a Node>,
    pub condition: Option<&'a Node>,
    pub update: Option<&'a Node>,
    pub body: &'a Node,
}

impl Node {
    /// Create a leaf node.
    pub fn new(id: NodeId, kind: NodeKind, text: impl Into<String>, span: Span) -> Self {
        Node {
            id,
            kind,
            text: text.into(),
            span,
            children: Vec::new(),
        }
    }

    /// Create a node with children.
    pub fn with_children(
        id: NodeId,
        kind: NodeKind,
        text: impl Into<String>,
        span: Span,
        children: Vec<Node>,
    ) -> Self {
        Node {
            id,
            kind,
            text: text.into(),
            span,
            children,
        }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child at `index`, if present.
    #[inline]
    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    /// Returns `true` for `Empty` placeholder nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kind == NodeKind::Empty
    }

    /// Split a `For` node into its header parts and body.
    ///
    /// Returns `None` if this is not a well-formed `For` node.
    pub fn for_parts(&self) -> Option<ForParts<'_>> {
        if self.kind != NodeKind::For {
            return None;
        }
        match self.children.as_slice() {
            [init, condition, update, body] => Some(ForParts {
                init: Some(init).filter(|n| !n.is_empty()),
                condition: Some(condition).filter(|n| !n.is_empty()),
                update: Some(update).filter(|n| !n.is_empty()),
                body,
            }),
            _ => None,
        }
    }

    /// Count of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_len).sum::<usize>()
    }

    /// Render this subtree as an indented tree.
    pub fn display_tree(&self) -> TreeDisplay<'_> {
        TreeDisplay { root: self }
    }
}

/// Tree renderer for [`Node`].
///
/// ```text
/// [Program]
/// └── [IntDeclaration] (a)
///     └── [IntLiteral] (10)
/// ```
pub struct TreeDisplay<'a> {
    root: &'a Node,
}

impl TreeDisplay<'_> {
    fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, prefix: &str) -> fmt::Result {
        write!(f, "[{}]", node.kind)?;
        if !node.text.is_empty() {
            write!(f, " ({})", node.text)?;
        }
        writeln!(f)?;

        let last = node.children.len().saturating_sub(1);
        for (i, child) in node.children.iter().enumerate() {
            let (branch, indent) = if i == last {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };
            write!(f, "{prefix}{branch}")?;
            Self::write_node(f, child, &format!("{prefix}{indent}"))?;
        }
        Ok(())
    }
}

impl fmt::Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_node(f, self.root, "")
    }
}
