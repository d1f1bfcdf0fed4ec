//! Operation registry.
//!
//! Maps a display symbol to the operation it stands for. The brain builds one
//! at construction with the standard keypad set; later registrations under
//! the same symbol replace earlier ones.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::Arc;

use log::warn;

use crate::config::AngleMode;
use crate::op::Op;

/// Registry of known operations, keyed by symbol.
#[derive(Clone, Debug, Default)]
pub struct OpRegistry {
    ops: HashMap<Arc<str>, Op>,
}

impl OpRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            ops: HashMap::new(),
        }
    }

    /// Create a registry holding the standard keypad operations.
    ///
    /// `sin` and `cos` read their input according to `angle_mode`.
    pub fn standard(angle_mode: AngleMode) -> Self {
        let mut registry = Self::new();

        // Binary functions receive the later operand first.
        registry.register(Op::binary("×", |a, b| a * b));
        registry.register(Op::binary("÷", |divisor, dividend| dividend / divisor));
        registry.register(Op::binary("+", |a, b| a + b));
        registry.register(Op::binary("−", |subtrahend, minuend| minuend - subtrahend));

        registry.register(Op::unary("√", f64::sqrt));
        registry.register(Op::unary("sin", move |x| angle_mode.to_radians(x).sin()));
        registry.register(Op::unary("cos", move |x| angle_mode.to_radians(x).cos()));

        registry.register(Op::constant("π", PI));

        registry
    }

    /// Register an operation under its symbol, replacing any previous entry.
    ///
    /// Returns the replaced entry. Operands carry no symbol and are ignored.
    pub fn register(&mut self, op: Op) -> Option<Op> {
        let Some(symbol) = op.symbol() else {
            warn!("ignoring registration of {} {}: it has no symbol", op.kind_name(), op);
            return None;
        };
        let key: Arc<str> = Arc::from(symbol);
        self.ops.insert(key, op)
    }

    /// Look up an operation by symbol.
    pub fn lookup(&self, symbol: &str) -> Option<&Op> {
        self.ops.get(symbol)
    }

    /// Check if an operation is registered under `symbol`.
    pub fn contains(&self, symbol: &str) -> bool {
        self.ops.contains_key(symbol)
    }

    /// Number of registered operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// All registered symbols, sorted.
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.ops.keys().map(|s| &**s).collect();
        symbols.sort_unstable();
        symbols
    }
}
