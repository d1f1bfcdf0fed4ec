//! Consumption history.
//!
//! The brain mirrors every operand and every operation it accepts onto two
//! side stacks. [`History::drain`] peels entries off those mirrors to grow a
//! left-to-right trace such as `10 ÷ 4 + 3`. Draining is destructive: each
//! call consumes what it renders, so call it once per operate action.

use std::sync::Arc;

use crate::format::render;

/// Operand/operation mirrors and the trace built from them.
#[derive(Clone, Debug, Default)]
pub struct History {
    operands: Vec<f64>,
    operations: Vec<Arc<str>>,
    text: String,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror an operand push.
    pub fn record_operand(&mut self, value: f64) {
        self.operands.push(value);
    }

    /// Mirror an operation push.
    pub fn record_operation(&mut self, symbol: impl Into<Arc<str>>) {
        self.operations.push(symbol.into());
    }

    /// Consume pending mirror entries into the trace and return it.
    ///
    /// The first call takes `operand operator operand`; later calls append
    /// `operator operand`. Missing pieces are skipped. Nothing happens while
    /// no operand is pending.
    pub fn drain(&mut self) -> &str {
        if self.operands.is_empty() {
            return &self.text;
        }

        if self.text.is_empty() {
            let second = self.operands.pop().map(render);
            let operator = self.operations.pop();
            let first = self.operands.pop().map(render);
            let pieces = [first.as_deref(), operator.as_deref(), second.as_deref()];
            self.text = pieces.into_iter().flatten().collect::<Vec<_>>().join(" ");
        } else {
            let operator = self.operations.pop();
            let operand = self.operands.pop().map(render);
            for piece in [operator.as_deref(), operand.as_deref()].into_iter().flatten() {
                self.text.push(' ');
                self.text.push_str(piece);
            }
        }

        &self.text
    }

    /// The trace built so far, without consuming anything.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Operands not yet consumed by [`drain`](Self::drain).
    pub fn pending_operands(&self) -> usize {
        self.operands.len()
    }

    /// Operations not yet consumed by [`drain`](Self::drain).
    pub fn pending_operations(&self) -> usize {
        self.operations.len()
    }

    /// Forget the mirrors and the trace.
    pub fn clear(&mut self) {
        self.operands.clear();
        self.operations.clear();
        self.text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_drain_takes_three() {
        let mut history = History::new();
        history.record_operand(10.0);
        history.record_operand(4.0);
        history.record_operation("÷");

        assert_eq!(history.drain(), "10 ÷ 4");
        assert_eq!(history.pending_operands(), 0);
        assert_eq!(history.pending_operations(), 0);
    }

    #[test]
    fn later_drains_take_two() {
        let mut history = History::new();
        history.record_operand(10.0);
        history.record_operand(4.0);
        history.record_operation("÷");
        history.drain();

        history.record_operand(0.5);
        history.record_operation("+");
        assert_eq!(history.drain(), "10 ÷ 4 + 0.5");
    }

    #[test]
    fn drain_without_operands_is_noop() {
        let mut history = History::new();
        history.record_operation("+");
        assert_eq!(history.drain(), "");
        assert_eq!(history.pending_operations(), 1);
    }

    #[test]
    fn drain_is_not_idempotent() {
        let mut history = History::new();
        history.record_operand(1.0);
        history.record_operand(2.0);
        history.record_operand(3.0);
        history.record_operation("+");

        assert_eq!(history.drain(), "2 + 3");
        // The leftover operand is consumed by the next call.
        assert_eq!(history.drain(), "2 + 3 1");
        assert_eq!(history.drain(), "2 + 3 1");
    }

    #[test]
    fn single_operand_first_drain() {
        let mut history = History::new();
        history.record_operand(9.0);
        history.record_operation("√");
        assert_eq!(history.drain(), "√ 9");
    }

    #[test]
    fn clear_resets_everything() {
        let mut history = History::new();
        history.record_operand(1.0);
        history.record_operand(2.0);
        history.record_operation("×");
        history.drain();
        history.clear();

        assert_eq!(history.text(), "");
        assert_eq!(history.pending_operands(), 0);
        assert_eq!(history.pending_operations(), 0);
    }
}
