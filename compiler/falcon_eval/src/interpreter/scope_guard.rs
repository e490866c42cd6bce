//! RAII frame guard for the interpreter.
//!
//! [`ScopedInterpreter`] pushes a frame when created and pops it on drop,
//! so a frame never outlives its scope whether evaluation finishes,
//! signals `break`/`continue`, or fails with `?`.

use std::ops::{Deref, DerefMut};

use falcon_scope::ScopeId;

use super::Interpreter;

/// Guard holding `&mut Interpreter` with one extra frame pushed.
///
/// Derefs to the interpreter, so evaluation goes through it unchanged.
pub struct ScopedInterpreter<'guard, 'interp> {
    interpreter: &'guard mut Interpreter<'interp>,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_frame();
    }
}

impl<'interp> Deref for ScopedInterpreter<'_, 'interp> {
    type Target = Interpreter<'interp>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Push a frame for `scope` and return a guard that pops it.
    ///
    /// The frame's parent is resolved from the scope's lexically enclosing
    /// scope.
    pub fn scoped(&mut self, scope: ScopeId) -> ScopedInterpreter<'_, 'a> {
        let enclosing = self.scopes.tree().enclosing(scope);
        self.env.push_frame(scope, enclosing);
        ScopedInterpreter { interpreter: self }
    }

    /// Run `f` inside a frame for `scope`.
    pub fn with_frame<T, F>(&mut self, scope: ScopeId, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_, 'a>) -> T,
    {
        let mut scoped = self.scoped(scope);
        f(&mut scoped)
    }
}
