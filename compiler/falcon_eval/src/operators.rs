//! Operator implementations for the evaluator.
//!
//! Operators act on plain `i32`s. Arithmetic is checked; comparisons and
//! the logical connectives produce `0` or `1`.

use crate::EvalErrorKind;

/// A binary operator, decoded from a node's text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Or,
    And,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "||" => BinaryOp::Or,
            "&&" => BinaryOp::And,
            "==" => BinaryOp::Eq,
            "!=" => BinaryOp::NotEq,
            "<" => BinaryOp::Lt,
            "<=" => BinaryOp::LtEq,
            ">" => BinaryOp::Gt,
            ">=" => BinaryOp::GtEq,
            "+" => BinaryOp::Add,
            "-" => BinaryOp::Sub,
            "*" => BinaryOp::Mul,
            "/" => BinaryOp::Div,
            "%" => BinaryOp::Mod,
            _ => return None,
        })
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
        }
    }
}

/// A prefix operator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Neg,
}

impl UnaryOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "-" => Some(UnaryOp::Neg),
            _ => None,
        }
    }
}

/// `=` or one of the compound forms `+= -= *= /= %=`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AssignOp {
    Assign,
    Compound(BinaryOp),
}

impl AssignOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        if symbol == "=" {
            return Some(AssignOp::Assign);
        }
        let op = BinaryOp::from_symbol(symbol.strip_suffix('=')?)?;
        matches!(
            op,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod
        )
        .then_some(AssignOp::Compound(op))
    }

    /// The value to store, given the target's `current` value and the
    /// evaluated right-hand side.
    pub fn apply(self, current: i32, value: i32) -> Result<i32, EvalErrorKind> {
        match self {
            AssignOp::Assign => Ok(value),
            AssignOp::Compound(op) => evaluate_binary(current, value, op),
        }
    }
}

/// `++` or `--`, prefix or postfix.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UpdateOp {
    Increment,
    Decrement,
}

impl UpdateOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "++" => Some(UpdateOp::Increment),
            "--" => Some(UpdateOp::Decrement),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            UpdateOp::Increment => "++",
            UpdateOp::Decrement => "--",
        }
    }
}

#[inline]
fn checked_arith(result: Option<i32>, op: BinaryOp) -> Result<i32, EvalErrorKind> {
    result.ok_or(EvalErrorKind::IntegerOverflow {
        operation: op.symbol(),
    })
}

/// Checked division or remainder with zero guard.
///
/// `i32::MIN / -1` is an overflow, not a division by zero.
#[inline]
fn checked_div(
    right: i32,
    op: BinaryOp,
    f: impl FnOnce() -> Option<i32>,
) -> Result<i32, EvalErrorKind> {
    if right == 0 {
        Err(EvalErrorKind::DivisionByZero)
    } else {
        checked_arith(f(), op)
    }
}

/// Evaluate a binary operation.
pub fn evaluate_binary(left: i32, right: i32, op: BinaryOp) -> Result<i32, EvalErrorKind> {
    match op {
        BinaryOp::Or => Ok(i32::from(left != 0 || right != 0)),
        BinaryOp::And => Ok(i32::from(left != 0 && right != 0)),
        BinaryOp::Eq => Ok(i32::from(left == right)),
        BinaryOp::NotEq => Ok(i32::from(left != right)),
        BinaryOp::Lt => Ok(i32::from(left < right)),
        BinaryOp::LtEq => Ok(i32::from(left <= right)),
        BinaryOp::Gt => Ok(i32::from(left > right)),
        BinaryOp::GtEq => Ok(i32::from(left >= right)),
        BinaryOp::Add => checked_arith(left.checked_add(right), op),
        BinaryOp::Sub => checked_arith(left.checked_sub(right), op),
        BinaryOp::Mul => checked_arith(left.checked_mul(right), op),
        BinaryOp::Div => checked_div(right, op, || left.checked_div(right)),
        BinaryOp::Mod => checked_div(right, op, || left.checked_rem(right)),
    }
}

/// Evaluate a unary operation.
pub fn evaluate_unary(value: i32, op: UnaryOp) -> Result<i32, EvalErrorKind> {
    match op {
        UnaryOp::Neg => value
            .checked_neg()
            .ok_or(EvalErrorKind::IntegerOverflow { operation: "-" }),
    }
}

/// Step a variable's value by one.
pub fn evaluate_update(value: i32, op: UpdateOp) -> Result<i32, EvalErrorKind> {
    let stepped = match op {
        UpdateOp::Increment => value.checked_add(1),
        UpdateOp::Decrement => value.checked_sub(1),
    };
    stepped.ok_or(EvalErrorKind::IntegerOverflow {
        operation: op.symbol(),
    })
}

#[cfg(test)]
mod tests;
