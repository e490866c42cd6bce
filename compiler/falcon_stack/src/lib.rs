//! Stack growth for recursive descent and tree walking.
//!
//! The parser, the scope annotator and the evaluator all recurse once per
//! nesting level of the source program. Input like `((((...))))` or a few
//! thousand nested blocks would overflow the native stack, so each
//! recursive entry point runs inside [`ensure_sufficient_stack`].
//!
//! On native targets this defers to `stacker`; on wasm32 it calls straight
//! through.

/// Grow when less than this much stack remains.
pub const RED_ZONE: usize = 100 * 1024;

/// Size of each freshly allocated stack segment.
pub const GROWTH_SIZE: usize = 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// within [`RED_ZONE`] bytes of exhaustion.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
