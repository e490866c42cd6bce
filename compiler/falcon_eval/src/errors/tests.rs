use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_display_includes_position() {
    let err = undefined_variable("a", Span::new(0, 1));
    assert_eq!(err.to_string(), "undefined variable `a` at position 1");
    assert_eq!(
        EvalError::new(EvalErrorKind::DivisionByZero).to_string(),
        "division by zero"
    );
}

#[test]
fn test_with_span_keeps_innermost() {
    let err = EvalError::new(EvalErrorKind::DivisionByZero)
        .with_span(Span::new(8, 14))
        .with_span(Span::new(0, 15));
    assert_eq!(err.span, Some(Span::new(8, 14)));
}

#[test]
fn test_codes() {
    let cases = [
        (duplicate_declaration("a", Span::default()), ErrorCode::E2001),
        (undefined_variable("a", Span::default()), ErrorCode::E2002),
        (invalid_assignment_target(Span::default()), ErrorCode::E2003),
        (EvalErrorKind::DivisionByZero.into(), ErrorCode::E2004),
        (
            EvalErrorKind::IntegerOverflow { operation: "+" }.into(),
            ErrorCode::E2005,
        ),
        (invalid_literal("99999999999", Span::default()), ErrorCode::E2006),
        (malformed_tree(NodeKind::Empty, Span::default()), ErrorCode::E9001),
    ];
    for (err, code) in cases {
        assert_eq!(err.code(), code, "{err}");
        assert_eq!(err.to_diagnostic().code, code);
    }
}

#[test]
fn test_duplicate_declaration_diagnostic() {
    let diag = duplicate_declaration("a", Span::new(11, 21)).to_diagnostic();
    assert_eq!(diag.message, "variable `a` is already declared in this scope");
    assert_eq!(diag.span(), Some(Span::new(11, 21)));
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn test_spanless_error_has_no_label() {
    let diag = EvalError::new(EvalErrorKind::DivisionByZero).to_diagnostic();
    assert!(diag.label.is_none());
}
