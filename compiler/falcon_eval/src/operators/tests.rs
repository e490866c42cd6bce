use super::*;
use pretty_assertions::assert_eq;

fn eval(left: i32, symbol: &str, right: i32) -> Result<i32, EvalErrorKind> {
    let op = BinaryOp::from_symbol(symbol).ok_or(EvalErrorKind::InvalidAssignmentTarget)?;
    evaluate_binary(left, right, op)
}

#[test]
fn test_symbols_round_trip() {
    for symbol in [
        "||", "&&", "==", "!=", "<", "<=", ">", ">=", "+", "-", "*", "/", "%",
    ] {
        let op = BinaryOp::from_symbol(symbol);
        assert_eq!(op.map(BinaryOp::symbol), Some(symbol));
    }
    assert_eq!(BinaryOp::from_symbol("="), None);
    assert_eq!(UnaryOp::from_symbol("-"), Some(UnaryOp::Neg));
    assert_eq!(UnaryOp::from_symbol("+"), None);
}

#[test]
fn test_arithmetic() {
    assert_eq!(eval(2, "+", 3), Ok(5));
    assert_eq!(eval(2, "-", 3), Ok(-1));
    assert_eq!(eval(4, "*", 5), Ok(20));
    assert_eq!(eval(7, "/", 2), Ok(3));
    assert_eq!(eval(-7, "/", 2), Ok(-3));
    assert_eq!(eval(7, "%", 3), Ok(1));
    assert_eq!(eval(-7, "%", 3), Ok(-1));
}

#[test]
fn test_comparisons_yield_zero_or_one() {
    assert_eq!(eval(1, "<", 2), Ok(1));
    assert_eq!(eval(2, "<=", 2), Ok(1));
    assert_eq!(eval(1, ">", 2), Ok(0));
    assert_eq!(eval(2, ">=", 3), Ok(0));
    assert_eq!(eval(5, "==", 5), Ok(1));
    assert_eq!(eval(5, "!=", 5), Ok(0));
}

#[test]
fn test_logical_treats_nonzero_as_true() {
    assert_eq!(eval(7, "&&", -2), Ok(1));
    assert_eq!(eval(7, "&&", 0), Ok(0));
    assert_eq!(eval(0, "||", 3), Ok(1));
    assert_eq!(eval(0, "||", 0), Ok(0));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(eval(10, "/", 0), Err(EvalErrorKind::DivisionByZero));
    assert_eq!(eval(10, "%", 0), Err(EvalErrorKind::DivisionByZero));
}

#[test]
fn test_overflow() {
    assert_eq!(
        eval(i32::MAX, "+", 1),
        Err(EvalErrorKind::IntegerOverflow { operation: "+" })
    );
    assert_eq!(
        eval(i32::MIN, "-", 1),
        Err(EvalErrorKind::IntegerOverflow { operation: "-" })
    );
    assert_eq!(
        eval(i32::MAX, "*", 2),
        Err(EvalErrorKind::IntegerOverflow { operation: "*" })
    );
    assert_eq!(
        eval(i32::MIN, "/", -1),
        Err(EvalErrorKind::IntegerOverflow { operation: "/" })
    );
    assert_eq!(
        evaluate_unary(i32::MIN, UnaryOp::Neg),
        Err(EvalErrorKind::IntegerOverflow { operation: "-" })
    );
}

#[test]
fn test_negation() {
    assert_eq!(evaluate_unary(5, UnaryOp::Neg), Ok(-5));
    assert_eq!(evaluate_unary(i32::MAX, UnaryOp::Neg), Ok(-2_147_483_647));
}

#[test]
fn test_assign_op_symbols() {
    assert_eq!(AssignOp::from_symbol("="), Some(AssignOp::Assign));
    assert_eq!(
        AssignOp::from_symbol("+="),
        Some(AssignOp::Compound(BinaryOp::Add))
    );
    assert_eq!(
        AssignOp::from_symbol("%="),
        Some(AssignOp::Compound(BinaryOp::Mod))
    );
    // Comparisons end in `=` too, but are not assignments.
    for symbol in ["==", "<=", ">=", "!=", "||=", ""] {
        assert_eq!(AssignOp::from_symbol(symbol), None, "{symbol}");
    }
}

#[test]
fn test_assign_op_apply() {
    assert_eq!(AssignOp::Assign.apply(10, 3), Ok(3));
    assert_eq!(AssignOp::Compound(BinaryOp::Sub).apply(10, 3), Ok(7));
    assert_eq!(AssignOp::Compound(BinaryOp::Mul).apply(10, 3), Ok(30));
    assert_eq!(
        AssignOp::Compound(BinaryOp::Div).apply(10, 0),
        Err(EvalErrorKind::DivisionByZero)
    );
    assert_eq!(
        AssignOp::Compound(BinaryOp::Add).apply(i32::MAX, 1),
        Err(EvalErrorKind::IntegerOverflow { operation: "+" })
    );
}

#[test]
fn test_update_steps_by_one() {
    assert_eq!(UpdateOp::from_symbol("++"), Some(UpdateOp::Increment));
    assert_eq!(UpdateOp::from_symbol("--"), Some(UpdateOp::Decrement));
    assert_eq!(UpdateOp::from_symbol("+"), None);
    assert_eq!(evaluate_update(4, UpdateOp::Increment), Ok(5));
    assert_eq!(evaluate_update(4, UpdateOp::Decrement), Ok(3));
    assert_eq!(
        evaluate_update(i32::MAX, UpdateOp::Increment),
        Err(EvalErrorKind::IntegerOverflow { operation: "++" })
    );
    assert_eq!(
        evaluate_update(i32::MIN, UpdateOp::Decrement),
        Err(EvalErrorKind::IntegerOverflow { operation: "--" })
    );
}
