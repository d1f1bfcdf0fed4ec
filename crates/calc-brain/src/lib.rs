//! Calculator brain: a tiny reverse-Polish evaluator.
//!
//! The brain keeps every operand and operation the user enters on a single
//! stack and re-evaluates the whole stack after each change:
//!
//! ```text
//! push_operand / perform_operation → OpStack → reduce (top-down) → Option<f64>
//!                                       │
//!                                       └→ History (operand / operation mirrors)
//! ```
//!
//! - **Registry**: maps display symbols (`×`, `÷`, `√`, `π`, ...) to operations
//! - **Stack**: append-only sequence of [`Op`] entries, reduced recursively
//! - **History**: a left-to-right trace of what has been consumed
//!
//! # Example
//!
//! ```
//! use calc_brain::Brain;
//!
//! let mut brain = Brain::new();
//! brain.push_operand(10.0);
//! brain.push_operand(4.0);
//! assert_eq!(brain.perform_operation("÷"), Some(2.5));
//! assert_eq!(Brain::render(2.5), "2.5");
//! ```

pub mod brain;
pub mod config;
pub mod error;
pub mod format;
pub mod history;
pub mod op;
pub mod registry;
pub mod stack;

pub use brain::Brain;
pub use config::{AngleMode, BrainConfig};
pub use error::{ConfigError, ConstantError, EvalError};
pub use format::render;
pub use history::History;
pub use op::{BinaryFn, Op, UnaryFn};
pub use registry::OpRegistry;
pub use stack::{OpStack, Reduction, reduce};
