//! The brain's entry stack and its recursive reduction.
//!
//! Entries are appended at the tail (the top). Reduction starts at the top
//! and pulls operands from below as each operation needs them; entries that
//! nothing consumed are left over and simply ignored.

use std::fmt;

use crate::error::EvalError;
use crate::op::Op;

/// Append-only stack of calculator entries.
#[derive(Clone, Debug, Default)]
pub struct OpStack {
    items: Vec<Op>,
}

impl OpStack {
    /// Create a new empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Get the number of entries on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Push an entry onto the stack.
    pub fn push(&mut self, op: Op) {
        self.items.push(op);
    }

    /// Peek at the top of stack.
    pub fn top(&self) -> Option<&Op> {
        self.items.last()
    }

    /// Clear the stack.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get a slice of all entries (bottom to top).
    pub fn as_slice(&self) -> &[Op] {
        &self.items
    }

    /// Reduce the whole stack. Never mutates it.
    pub fn reduce(&self) -> Reduction<'_> {
        reduce(&self.items)
    }
}

/// Outcome of reducing a run of entries: the value, plus whatever sits below
/// the entries that produced it.
#[derive(Debug)]
pub struct Reduction<'a> {
    pub result: Result<f64, EvalError>,
    pub remaining: &'a [Op],
}

impl<'a> Reduction<'a> {
    fn value(value: f64, remaining: &'a [Op]) -> Self {
        Self {
            result: Ok(value),
            remaining,
        }
    }

    /// `symbol` could not be satisfied. The cause from deeper in the stack
    /// wins, so the report names the operation that actually ran dry.
    fn underflow(symbol: &str, cause: EvalError, ops: &'a [Op]) -> Self {
        let error = match cause {
            EvalError::EmptyStack => EvalError::Underflow {
                symbol: symbol.to_string(),
            },
            deeper => deeper,
        };
        Self {
            result: Err(error),
            remaining: ops,
        }
    }

    /// The value, if the reduction produced one.
    pub fn value_opt(&self) -> Option<f64> {
        self.result.as_ref().ok().copied()
    }
}

/// Reduce `ops` from the top.
///
/// On failure `remaining` is `ops` itself: the entry that could not be
/// satisfied is put back together with everything below it, and any partial
/// results computed on the way are dropped.
pub fn reduce(ops: &[Op]) -> Reduction<'_> {
    let Some((top, rest)) = ops.split_last() else {
        return Reduction {
            result: Err(EvalError::EmptyStack),
            remaining: ops,
        };
    };

    match top {
        Op::Operand(value) | Op::Constant { value, .. } => Reduction::value(*value, rest),
        Op::Unary { symbol, func } => {
            let operand = reduce(rest);
            match operand.result {
                Ok(x) => Reduction::value(func(x), operand.remaining),
                Err(cause) => Reduction::underflow(symbol, cause, ops),
            }
        }
        Op::Binary { symbol, func } => {
            let first = reduce(rest);
            let x1 = match first.result {
                Ok(x) => x,
                Err(cause) => return Reduction::underflow(symbol, cause, ops),
            };
            let second = reduce(first.remaining);
            match second.result {
                Ok(x2) => Reduction::value(func(x1, x2), second.remaining),
                Err(cause) => Reduction::underflow(symbol, cause, ops),
            }
        }
    }
}

/// Space-separated entries in push order, wrapped in brackets.
pub(crate) struct DisplayOps<'a>(pub &'a [Op]);

impl fmt::Display for DisplayOps<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, op) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", op)?;
        }
        write!(f, "]")
    }
}
