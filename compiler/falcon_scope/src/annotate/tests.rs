use super::*;
use falcon_diagnostic::Severity;
use falcon_parse::parse;
use pretty_assertions::assert_eq;

fn annotate(source: &str) -> (Node, ScopeMap) {
    let program = parse(source).expect("source should parse");
    let map = annotate_scopes(&program);
    (program, map)
}

fn nth<'a>(node: &'a Node, path: &[usize]) -> &'a Node {
    path.iter()
        .fold(node, |n, &i| n.child(i).expect("child on path"))
}

#[test]
fn test_program_is_global() {
    let (program, map) = annotate("int a = 1;");
    assert_eq!(map.scope_of(program.id()), Some(ScopeId::GLOBAL));
    assert_eq!(map.tree().len(), 1);
    assert!(map.warnings().is_empty());
}

#[test]
fn test_expressions_have_no_scope() {
    let (program, map) = annotate("int a = 1; a + 2;");
    assert_eq!(map.scope_of(nth(&program, &[0]).id()), None);
    assert_eq!(map.scope_of(nth(&program, &[1, 0]).id()), None);
}

#[test]
fn test_nested_blocks_link_to_enclosing() {
    let (program, map) = annotate("{ { int x; } } { }");
    let outer = map.scope_of(nth(&program, &[0]).id()).expect("outer block");
    let inner = map.scope_of(nth(&program, &[0, 0]).id()).expect("inner block");
    let sibling = map.scope_of(nth(&program, &[1]).id()).expect("sibling block");

    // Pre-order: ids follow source order.
    assert_eq!(outer, ScopeId::new(1));
    assert_eq!(inner, ScopeId::new(2));
    assert_eq!(sibling, ScopeId::new(3));

    assert_eq!(map.tree().enclosing(outer), Some(ScopeId::GLOBAL));
    assert_eq!(map.tree().enclosing(inner), Some(outer));
    assert_eq!(map.tree().enclosing(sibling), Some(ScopeId::GLOBAL));
}

#[test]
fn test_for_with_declaration_opens_scope() {
    let (program, map) = annotate("for (int i = 0; i < 3; i = i + 1) { i; }");
    let for_node = nth(&program, &[0]);
    let for_scope = map.scope_of(for_node.id()).expect("for scope");
    let body_scope = map.scope_of(nth(for_node, &[3]).id()).expect("body scope");
    assert_eq!(map.tree().enclosing(for_scope), Some(ScopeId::GLOBAL));
    assert_eq!(map.tree().enclosing(body_scope), Some(for_scope));
}

#[test]
fn test_for_with_declarator_list_opens_scope() {
    let (program, map) = annotate("for (int i = 0, j = 1; i < j; i++) { }");
    let for_node = nth(&program, &[0]);
    let for_scope = map.scope_of(for_node.id()).expect("for scope");
    assert_eq!(map.tree().enclosing(for_scope), Some(ScopeId::GLOBAL));
}

#[test]
fn test_jumps_inside_conditional_loop_bodies_are_not_stray() {
    let (_, map) = annotate("int n = 0; while (n < 3) if (n++ ? 1 : 0) break;");
    assert!(map.warnings().is_empty());
}

#[test]
fn test_for_without_declaration_has_no_scope() {
    let (program, map) = annotate("int i; for (i = 0; i < 3; i = i + 1) { }");
    let for_node = nth(&program, &[1]);
    assert_eq!(map.scope_of(for_node.id()), None);
    let body_scope = map.scope_of(nth(for_node, &[3]).id()).expect("body scope");
    assert_eq!(map.tree().enclosing(body_scope), Some(ScopeId::GLOBAL));
}

#[test]
fn test_jumps_inside_loops_are_not_stray() {
    let source = "while (1) { if (1) break; else continue; } \
                  for (;;) { { break; } } \
                  do continue; while (0);";
    let (_, map) = annotate(source);
    assert!(map.warnings().is_empty());
}

#[test]
fn test_stray_jumps_are_warned() {
    let (program, map) = annotate("break; { continue; } while (0) { } break;");
    let first = nth(&program, &[0]);
    let nested = nth(&program, &[1, 0]);
    let last = nth(&program, &[3]);

    assert!(map.is_stray_jump(first.id()));
    assert!(map.is_stray_jump(nested.id()));
    assert!(map.is_stray_jump(last.id()));

    let messages: Vec<_> = map.warnings().iter().map(|d| d.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "`break` outside of a loop",
            "`continue` outside of a loop",
            "`break` outside of a loop",
        ]
    );
    assert!(map
        .warnings()
        .iter()
        .all(|d| d.code == ErrorCode::W3001 && d.severity == Severity::Warning));
    assert_eq!(map.warnings()[0].span(), Some(first.span()));
}

#[test]
fn test_loop_flag_restored_after_loop() {
    let (program, map) = annotate("while (0) break; break;");
    assert!(!map.is_stray_jump(nth(&program, &[0, 1]).id()));
    assert!(map.is_stray_jump(nth(&program, &[1]).id()));
}
