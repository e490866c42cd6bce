use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_new_has_global_frame() {
    let env = Environment::new();
    assert_eq!(env.depth(), 1);
    assert!(env.lookup("a").is_none());
}

#[test]
fn test_global_frame_is_never_popped() {
    let mut env = Environment::new();
    env.declare("a", 1);
    env.pop_frame();
    env.pop_frame();
    assert_eq!(env.depth(), 1);
    assert_eq!(env.global("a"), Some(1));
}

#[test]
fn test_inner_frame_shadows_outer() {
    let mut env = Environment::new();
    env.declare("a", 1);
    env.push_frame(ScopeId::new(1), Some(ScopeId::GLOBAL));
    assert!(!env.is_declared_in_current("a"));
    env.declare("a", 2);
    assert_eq!(env.lookup("a").map(|s| s.get()), Some(2));
    env.pop_frame();
    assert_eq!(env.lookup("a").map(|s| s.get()), Some(1));
}

#[test]
fn test_slots_are_shared() {
    let mut env = Environment::new();
    let slot = env.declare("x", 0);
    env.push_frame(ScopeId::new(1), Some(ScopeId::GLOBAL));
    if let Some(inner) = env.lookup("x") {
        inner.set(7);
    }
    env.pop_frame();
    assert_eq!(slot.get(), 7);
    assert_eq!(env.global("x"), Some(7));
}

#[test]
fn test_parent_follows_lexical_enclosing_scope() {
    // Scope 2 is lexically inside the global scope even though scope 1 is
    // on the stack between them, so it must not see scope 1's bindings.
    let mut env = Environment::new();
    env.push_frame(ScopeId::new(1), Some(ScopeId::GLOBAL));
    env.declare("hidden", 5);
    env.push_frame(ScopeId::new(2), Some(ScopeId::GLOBAL));
    assert!(env.lookup("hidden").is_none());
    env.pop_frame();
    assert_eq!(env.lookup("hidden").map(|s| s.get()), Some(5));
}

#[test]
fn test_unknown_enclosing_falls_back_to_top() {
    let mut env = Environment::new();
    env.push_frame(ScopeId::new(1), Some(ScopeId::GLOBAL));
    env.declare("b", 3);
    env.push_frame(ScopeId::new(9), Some(ScopeId::new(8)));
    assert_eq!(env.lookup("b").map(|s| s.get()), Some(3));
    assert_eq!(env.depth(), 3);
}

#[test]
fn test_global_ignores_inner_frames() {
    let mut env = Environment::new();
    env.declare("a", 1);
    env.push_frame(ScopeId::new(1), Some(ScopeId::GLOBAL));
    env.declare("c", 3);
    assert_eq!(env.global("a"), Some(1));
    assert_eq!(env.global("c"), None);
    assert_eq!(env.lookup("c").map(|s| s.get()), Some(3));
}
