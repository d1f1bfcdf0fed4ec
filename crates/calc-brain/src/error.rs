//! Error types for evaluation and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Why the stack did not reduce to a value.
///
/// The brain's public entry points collapse these into `None`; they are only
/// visible through [`Brain::try_evaluate`](crate::Brain::try_evaluate).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("stack is empty")]
    EmptyStack,

    #[error("stack underflow: '{symbol}' needs more operands")]
    Underflow { symbol: String },
}

/// A configured constant that cannot be registered.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConstantError {
    #[error("invalid constant symbol '{symbol}'")]
    InvalidSymbol { symbol: String },

    #[error("constant '{symbol}' would shadow a built-in operation")]
    ReservedSymbol { symbol: String },
}

/// Errors that can occur when loading a brain configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid config at {path}: {source}")]
    Invalid {
        path: PathBuf,
        source: ConstantError,
    },

    #[error(transparent)]
    Constant(#[from] ConstantError),
}
