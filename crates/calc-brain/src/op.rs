//! Stack entries.
//!
//! Everything the user enters lands on the brain's stack as an [`Op`]:
//! - Operand: a literal number
//! - Constant: a named nullary value such as π
//! - Unary: a named function of one value (√, sin, cos)
//! - Binary: a named function of two values (×, ÷, +, −)

use std::fmt;
use std::sync::Arc;

use crate::format::render;

/// A function of one value.
pub type UnaryFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// A function of two values, called as `func(top, below)`.
///
/// `top` is the operand nearer the top of the stack (entered later). For
/// `a b ÷` the function receives `(b, a)` and must compute `a / b`.
pub type BinaryFn = Arc<dyn Fn(f64, f64) -> f64 + Send + Sync>;

/// A single entry on the calculator stack.
#[derive(Clone)]
pub enum Op {
    /// A literal number.
    Operand(f64),
    /// A named value that consumes nothing.
    Constant { symbol: Arc<str>, value: f64 },
    /// Consumes one value.
    Unary { symbol: Arc<str>, func: UnaryFn },
    /// Consumes two values.
    Binary { symbol: Arc<str>, func: BinaryFn },
}

impl Op {
    /// Create an operand entry.
    pub fn operand(value: f64) -> Self {
        Op::Operand(value)
    }

    /// Create a named constant.
    pub fn constant(symbol: impl Into<Arc<str>>, value: f64) -> Self {
        Op::Constant {
            symbol: symbol.into(),
            value,
        }
    }

    /// Create a unary operation.
    pub fn unary(
        symbol: impl Into<Arc<str>>,
        func: impl Fn(f64) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Op::Unary {
            symbol: symbol.into(),
            func: Arc::new(func),
        }
    }

    /// Create a binary operation. See [`BinaryFn`] for argument order.
    pub fn binary(
        symbol: impl Into<Arc<str>>,
        func: impl Fn(f64, f64) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Op::Binary {
            symbol: symbol.into(),
            func: Arc::new(func),
        }
    }

    /// The registry key and display label. Operands have none.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Op::Operand(_) => None,
            Op::Constant { symbol, .. } | Op::Unary { symbol, .. } | Op::Binary { symbol, .. } => {
                Some(&**symbol)
            }
        }
    }

    /// Number of values this entry consumes when reduced.
    pub fn arity(&self) -> usize {
        match self {
            Op::Operand(_) | Op::Constant { .. } => 0,
            Op::Unary { .. } => 1,
            Op::Binary { .. } => 2,
        }
    }

    /// Kind name for log messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Op::Operand(_) => "operand",
            Op::Constant { .. } => "constant",
            Op::Unary { .. } => "unary",
            Op::Binary { .. } => "binary",
        }
    }
}

impl fmt::Debug for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Operand(value) => f.debug_tuple("Operand").field(value).finish(),
            Op::Constant { symbol, value } => f
                .debug_struct("Constant")
                .field("symbol", symbol)
                .field("value", value)
                .finish(),
            Op::Unary { symbol, .. } => f.debug_tuple("Unary").field(symbol).finish(),
            Op::Binary { symbol, .. } => f.debug_tuple("Binary").field(symbol).finish(),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Operand(value) => write!(f, "{}", render(*value)),
            Op::Constant { symbol, .. } | Op::Unary { symbol, .. } | Op::Binary { symbol, .. } => {
                write!(f, "{}", symbol)
            }
        }
    }
}
