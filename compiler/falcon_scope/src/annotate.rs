//! The annotation walk and its result.

use falcon_diagnostic::{Diagnostic, ErrorCode};
use falcon_ir::{Node, NodeId, NodeKind};
use falcon_stack::ensure_sufficient_stack;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace, warn};

use crate::{ScopeId, ScopeTree};

/// Side table produced by [`annotate_scopes`].
#[derive(Clone, Debug, Default)]
pub struct ScopeMap {
    tree: ScopeTree,
    node_scopes: FxHashMap<NodeId, ScopeId>,
    stray_jumps: FxHashSet<NodeId>,
    warnings: Vec<Diagnostic>,
}

impl ScopeMap {
    pub fn tree(&self) -> &ScopeTree {
        &self.tree
    }

    /// The scope a scope-bearing node opens, or `None` for other nodes.
    pub fn scope_of(&self, node: NodeId) -> Option<ScopeId> {
        self.node_scopes.get(&node).copied()
    }

    /// `true` for a `break`/`continue` with no enclosing loop.
    pub fn is_stray_jump(&self, node: NodeId) -> bool {
        self.stray_jumps.contains(&node)
    }

    /// W3001 warnings, in source order.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }
}

struct Annotator {
    map: ScopeMap,
    current: ScopeId,
    in_loop: bool,
}

/// Build the scope table for `program`. The root maps to [`ScopeId::GLOBAL`].
pub fn annotate_scopes(program: &Node) -> ScopeMap {
    debug_assert_eq!(program.kind(), NodeKind::Program, "annotate the program root");

    let mut annotator = Annotator {
        map: ScopeMap::default(),
        current: ScopeId::GLOBAL,
        in_loop: false,
    };
    annotator
        .map
        .node_scopes
        .insert(program.id(), ScopeId::GLOBAL);
    annotator.visit_children(program);

    let map = annotator.map;
    debug!(
        scopes = map.tree.len(),
        stray_jumps = map.stray_jumps.len(),
        "annotated scopes"
    );
    map
}

impl Annotator {
    fn visit(&mut self, node: &Node) {
        ensure_sufficient_stack(|| match node.kind() {
            NodeKind::Block => self.in_new_scope(node, |this| this.visit_children(node)),
            NodeKind::For => {
                debug_assert!(node.for_parts().is_some(), "malformed for node");
                let declares = node
                    .for_parts()
                    .and_then(|parts| parts.init)
                    .is_some_and(|init| init.kind().is_declaration());
                if declares {
                    self.in_new_scope(node, |this| this.in_loop_body(node));
                } else {
                    self.in_loop_body(node);
                }
            }
            kind if kind.is_loop() => self.in_loop_body(node),
            NodeKind::Break | NodeKind::Continue => self.check_jump(node),
            _ => self.visit_children(node),
        });
    }

    fn visit_children(&mut self, node: &Node) {
        for child in node.children() {
            self.visit(child);
        }
    }

    fn in_new_scope(&mut self, node: &Node, f: impl FnOnce(&mut Self)) {
        let scope = self.map.tree.push(self.current);
        trace!(node = %node.id(), ?scope, enclosing = ?self.current, "enter scope");
        self.map.node_scopes.insert(node.id(), scope);

        let saved = std::mem::replace(&mut self.current, scope);
        f(self);
        self.current = saved;
    }

    fn in_loop_body(&mut self, node: &Node) {
        let saved = std::mem::replace(&mut self.in_loop, true);
        self.visit_children(node);
        self.in_loop = saved;
    }

    fn check_jump(&mut self, node: &Node) {
        if self.in_loop {
            return;
        }
        let keyword = if node.kind() == NodeKind::Break {
            "break"
        } else {
            "continue"
        };
        warn!(node = %node.id(), position = node.span().position(), "`{keyword}` outside of a loop");
        self.map.stray_jumps.insert(node.id());
        self.map.warnings.push(
            Diagnostic::new(ErrorCode::W3001)
                .with_message(format!("`{keyword}` outside of a loop"))
                .with_label(node.span(), format!("this `{keyword}` has no effect")),
        );
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, reason = "Tests use expect for brevity")]
mod tests;
