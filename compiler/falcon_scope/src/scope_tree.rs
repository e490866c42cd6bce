//! The static scope tree.

use std::fmt;

/// Index of a scope in its [`ScopeTree`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u32);

impl ScopeId {
    /// The program scope.
    pub const GLOBAL: ScopeId = ScopeId(0);

    #[inline]
    pub const fn new(raw: u32) -> Self {
        ScopeId(raw)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::GLOBAL {
            write!(f, "ScopeId::GLOBAL")
        } else {
            write!(f, "ScopeId({})", self.0)
        }
    }
}

/// One lexical nesting level.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Scope {
    pub id: ScopeId,
    /// `None` only for [`ScopeId::GLOBAL`].
    pub enclosing: Option<ScopeId>,
}

/// All scopes of one program, indexed by [`ScopeId`].
///
/// Scopes are appended in the order the annotator enters them, so a
/// scope's id is always greater than its enclosing scope's.
#[derive(Clone, Debug)]
pub struct ScopeTree {
    scopes: Vec<Scope>,
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeTree {
    /// A tree holding only the global scope.
    pub fn new() -> Self {
        ScopeTree {
            scopes: vec![Scope {
                id: ScopeId::GLOBAL,
                enclosing: None,
            }],
        }
    }

    /// Add a scope nested in `enclosing`.
    pub(crate) fn push(&mut self, enclosing: ScopeId) -> ScopeId {
        debug_assert!(enclosing.index() < self.scopes.len(), "unknown enclosing scope");
        let id = Self::id_at(self.scopes.len());
        self.scopes.push(Scope {
            id,
            enclosing: Some(enclosing),
        });
        id
    }

    /// The id for the scope stored at `index`.
    ///
    /// Every scope costs at least two bytes of source (`{}`), so running out
    /// of `u32` ids takes more than 8 GiB of input. Past that point ids
    /// saturate at `u32::MAX`; debug builds stop instead.
    fn id_at(index: usize) -> ScopeId {
        let raw = u32::try_from(index);
        debug_assert!(raw.is_ok(), "scope id space exhausted");
        ScopeId(raw.unwrap_or(u32::MAX))
    }

    pub fn get(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.index())
    }

    /// The scope enclosing `id`, if any.
    pub fn enclosing(&self, id: ScopeId) -> Option<ScopeId> {
        self.get(id).and_then(|scope| scope.enclosing)
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Always `false`: the global scope is present from construction.
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}
