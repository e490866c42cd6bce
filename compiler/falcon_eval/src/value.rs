//! Runtime values and statement completions.

use std::fmt;

use crate::Slot;

/// A runtime value.
///
/// `Cell` is what a variable reference evaluates to; it can be read or
/// assigned through. Everything computed is an `Immediate`.
#[derive(Clone, Debug)]
pub enum Value {
    Immediate(i32),
    Cell(Slot),
}

impl Value {
    /// The integer this value holds or refers to.
    #[inline]
    pub fn get(&self) -> i32 {
        match self {
            Value::Immediate(v) => *v,
            Value::Cell(slot) => slot.get(),
        }
    }

    /// The storage cell, if this value is assignable.
    #[inline]
    pub fn as_cell(&self) -> Option<&Slot> {
        match self {
            Value::Cell(slot) => Some(slot),
            Value::Immediate(_) => None,
        }
    }

    #[inline]
    pub fn is_truthy(&self) -> bool {
        self.get() != 0
    }
}

impl PartialEq for Value {
    /// Values compare by content; two cells holding 3 are equal.
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl Eq for Value {}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// `break` or `continue` on its way to the enclosing loop.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ControlSignal {
    Break,
    Continue,
}

/// What evaluating a node produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// An expression value.
    Value(Value),
    /// A pending `break` or `continue`.
    Signal(ControlSignal),
    /// A statement finished with nothing to report.
    Void,
}

impl Completion {
    /// The value, for expression completions.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Completion::Value(v) => Some(v),
            Completion::Signal(_) | Completion::Void => None,
        }
    }

    pub fn signal(&self) -> Option<ControlSignal> {
        match self {
            Completion::Signal(s) => Some(*s),
            Completion::Value(_) | Completion::Void => None,
        }
    }
}
