//! Runtime frames for variable bindings.
//!
//! The environment is a stack of frames, one per scope currently being
//! executed. The bottom frame belongs to the global scope and is never
//! popped, which is what lets a REPL keep its variables between inputs.
//!
//! A frame's parent is the frame of its *lexically* enclosing scope, not
//! simply the frame below it. Name lookup follows the parent chain.

use std::cell::Cell;
use std::rc::Rc;

use falcon_scope::ScopeId;
use rustc_hash::FxHashMap;
use tracing::trace;

/// Shared, mutable storage for one variable.
pub type Slot = Rc<Cell<i32>>;

/// The live bindings of one scope instance.
#[derive(Debug)]
struct Frame {
    scope: ScopeId,
    bindings: FxHashMap<String, Slot>,
    /// Index of the lexically enclosing frame. `None` only for the global frame.
    parent: Option<usize>,
}

impl Frame {
    fn new(scope: ScopeId, parent: Option<usize>) -> Self {
        Frame {
            scope,
            bindings: FxHashMap::default(),
            parent,
        }
    }
}

/// Stack of frames, global frame at the bottom.
#[derive(Debug)]
pub struct Environment {
    frames: Vec<Frame>,
}

impl Environment {
    /// Create an environment holding only an empty global frame.
    pub fn new() -> Self {
        Environment {
            frames: vec![Frame::new(ScopeId::GLOBAL, None)],
        }
    }

    /// Number of frames on the stack, the global frame included.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    fn top(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }

    /// Push a frame for `scope`.
    ///
    /// The parent is the innermost frame whose scope is `enclosing`. If no
    /// such frame is active the top of the stack is used.
    pub fn push_frame(&mut self, scope: ScopeId, enclosing: Option<ScopeId>) {
        let parent = enclosing
            .and_then(|enclosing| self.frames.iter().rposition(|f| f.scope == enclosing))
            .unwrap_or_else(|| self.top());
        trace!(?scope, parent, depth = self.frames.len(), "push frame");
        self.frames.push(Frame::new(scope, Some(parent)));
    }

    /// Pop the innermost frame. The global frame stays.
    pub fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            if let Some(frame) = self.frames.pop() {
                trace!(scope = ?frame.scope, depth = self.frames.len(), "pop frame");
            }
        }
    }

    /// Resolve `name` from the innermost frame outwards.
    pub fn lookup(&self, name: &str) -> Option<Slot> {
        let mut index = Some(self.top());
        while let Some(i) = index {
            let frame = self.frames.get(i)?;
            if let Some(slot) = frame.bindings.get(name) {
                return Some(Rc::clone(slot));
            }
            index = frame.parent;
        }
        None
    }

    /// Whether the innermost frame already binds `name`.
    pub fn is_declared_in_current(&self, name: &str) -> bool {
        self.frames
            .last()
            .is_some_and(|frame| frame.bindings.contains_key(name))
    }

    /// Bind `name` in the innermost frame and return its slot.
    ///
    /// Callers check [`Environment::is_declared_in_current`] first; a
    /// repeated name replaces the earlier slot.
    pub fn declare(&mut self, name: &str, value: i32) -> Slot {
        let slot: Slot = Rc::new(Cell::new(value));
        if let Some(frame) = self.frames.last_mut() {
            frame.bindings.insert(name.to_string(), Rc::clone(&slot));
        }
        slot
    }

    /// Value of a global variable.
    pub fn global(&self, name: &str) -> Option<i32> {
        self.frames
            .first()
            .and_then(|frame| frame.bindings.get(name))
            .map(|slot| slot.get())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
