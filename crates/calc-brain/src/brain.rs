//! The calculator brain.
//!
//! `Brain` owns the entry stack, the operation registry and the history
//! mirrors. Every push or perform re-evaluates the whole stack and hands the
//! result back; "no result" (`None`) means the stack does not reduce to a
//! value yet.

use log::{Level, debug, log_enabled};

use crate::config::{AngleMode, BrainConfig};
use crate::error::{ConstantError, EvalError};
use crate::format;
use crate::history::History;
use crate::op::Op;
use crate::registry::OpRegistry;
use crate::stack::{DisplayOps, OpStack};

/// RPN evaluation engine.
#[derive(Clone, Debug)]
pub struct Brain {
    stack: OpStack,
    known_ops: OpRegistry,
    history: History,
}

impl Default for Brain {
    fn default() -> Self {
        Self::new()
    }
}

impl Brain {
    /// Create a brain with the standard operations and default config.
    pub fn new() -> Self {
        Self::with_registry(OpRegistry::standard(AngleMode::default()))
    }

    /// Create a brain from a configuration.
    ///
    /// Configured constants are registered after the standard set and win
    /// over built-in constants of the same name. A constant that would hide
    /// a built-in operation is rejected.
    pub fn with_config(config: &BrainConfig) -> Result<Self, ConstantError> {
        config.validate()?;
        let mut known_ops = OpRegistry::standard(config.angle_mode);
        for op in config.constant_ops() {
            known_ops.register(op);
        }
        Ok(Self::with_registry(known_ops))
    }

    fn with_registry(known_ops: OpRegistry) -> Self {
        Self {
            stack: OpStack::new(),
            known_ops,
            history: History::new(),
        }
    }

    /// Push a number and evaluate.
    pub fn push_operand(&mut self, operand: f64) -> Option<f64> {
        self.stack.push(Op::operand(operand));
        self.history.record_operand(operand);
        self.evaluate()
    }

    /// Push the operation registered under `symbol` and evaluate.
    ///
    /// Unknown symbols push nothing; the unchanged stack is evaluated.
    pub fn perform_operation(&mut self, symbol: &str) -> Option<f64> {
        match self.known_ops.lookup(symbol) {
            Some(op) => {
                debug!("pushing {} '{}'", op.kind_name(), symbol);
                self.stack.push(op.clone());
                self.history.record_operation(symbol);
            }
            None => debug!("ignoring unknown operation '{}'", symbol),
        }
        self.evaluate()
    }

    /// Evaluate the whole stack. Entries left over below the result are
    /// ignored; any underflow yields `None`.
    pub fn evaluate(&self) -> Option<f64> {
        self.try_evaluate().ok()
    }

    /// Evaluate the whole stack, reporting why it failed to reduce.
    pub fn try_evaluate(&self) -> Result<f64, EvalError> {
        let reduction = self.stack.reduce();
        if log_enabled!(Level::Debug) {
            let result = match &reduction.result {
                Ok(value) => format::render(*value),
                Err(e) => e.to_string(),
            };
            debug!(
                "{} = {} with {} left over",
                DisplayOps(self.stack.as_slice()),
                result,
                DisplayOps(reduction.remaining)
            );
        }
        reduction.result
    }

    /// Drain the history mirrors into the running trace and return it.
    ///
    /// Not idempotent: call once per operate action.
    pub fn history_text(&mut self) -> &str {
        self.history.drain()
    }

    /// Render a value with the display rule (whole numbers lose `.0`).
    pub fn render(value: f64) -> String {
        format::render(value)
    }

    /// Reset the stack, both mirrors and the history trace.
    pub fn clear(&mut self) {
        self.stack.clear();
        self.history.clear();
    }

    /// Register another operation. Replaces any entry with the same symbol.
    pub fn learn_op(&mut self, op: Op) {
        self.known_ops.register(op);
    }

    /// Everything entered so far, in push order, separated by spaces.
    ///
    /// Unlike [`history_text`](Self::history_text) this reads the stack
    /// itself and consumes nothing.
    pub fn trace(&self) -> String {
        self.stack
            .as_slice()
            .iter()
            .map(Op::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The entries on the stack (bottom to top).
    pub fn stack(&self) -> &[Op] {
        self.stack.as_slice()
    }

    /// The registry of known operations.
    pub fn known_ops(&self) -> &OpRegistry {
        &self.known_ops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_operand_evaluates() {
        let mut brain = Brain::new();
        assert_eq!(brain.push_operand(3.0), Some(3.0));
        assert_eq!(brain.push_operand(4.0), Some(4.0));
        assert_eq!(brain.perform_operation("×"), Some(12.0));
        assert_eq!(brain.stack().len(), 3);
    }

    #[test]
    fn try_evaluate_reports_cause() {
        let mut brain = Brain::new();
        assert_eq!(brain.try_evaluate(), Err(EvalError::EmptyStack));

        brain.push_operand(1.0);
        brain.perform_operation("+");
        assert_eq!(
            brain.try_evaluate(),
            Err(EvalError::Underflow { symbol: "+".into() })
        );
    }

    #[test]
    fn unknown_symbol_is_not_recorded() {
        let mut brain = Brain::new();
        brain.push_operand(2.0);
        assert_eq!(brain.perform_operation("??"), Some(2.0));
        assert_eq!(brain.stack().len(), 1);
        assert_eq!(brain.history.pending_operations(), 0);
    }

    #[test]
    fn learn_op_extends_keypad() {
        let mut brain = Brain::new();
        brain.learn_op(Op::unary("±", |x| -x));
        brain.push_operand(5.0);
        assert_eq!(brain.perform_operation("±"), Some(-5.0));
    }

    #[test]
    fn config_constants_and_angle_mode() {
        let mut config = BrainConfig {
            angle_mode: AngleMode::Radians,
            ..Default::default()
        };
        config.constants.insert("π".into(), 3.0);
        config.constants.insert("k".into(), 0.5);

        let mut brain = Brain::with_config(&config).unwrap();
        assert_eq!(brain.perform_operation("π"), Some(3.0));
        assert_eq!(brain.perform_operation("k"), Some(0.5));
        assert_eq!(brain.perform_operation("×"), Some(1.5));

        brain.clear();
        brain.push_operand(0.0);
        assert_eq!(brain.perform_operation("cos"), Some(1.0));
    }

    #[test]
    fn config_cannot_replace_operations() {
        let mut config = BrainConfig::default();
        config.constants.insert("÷".into(), 2.0);

        let err = Brain::with_config(&config).unwrap_err();
        assert_eq!(err, ConstantError::ReservedSymbol { symbol: "÷".into() });
    }

    #[test]
    fn trace_reads_stack() {
        let mut brain = Brain::new();
        brain.push_operand(10.0);
        brain.push_operand(2.5);
        brain.perform_operation("÷");
        brain.perform_operation("√");
        assert_eq!(brain.trace(), "10 2.5 ÷ √");
        assert_eq!(brain.trace(), "10 2.5 ÷ √");
    }
}
