//! Function pointer types carried by operation tokens

use std::fmt;
use std::sync::Arc;

/// A one-argument operation
pub type UnaryFnPtr = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// A two-argument operation, called as `func(top, second)`
pub type BinaryFnPtr = Arc<dyn Fn(f64, f64) -> f64 + Send + Sync>;

/// A zero-argument supplier
pub type ConstantFnPtr = Arc<dyn Fn() -> f64 + Send + Sync>;

/// Number of operands an operation consumes from the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Consumes nothing (constants)
    Nullary,
    /// Consumes one operand
    Unary,
    /// Consumes two operands
    Binary,
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Nullary => write!(f, "nullary"),
            Arity::Unary => write!(f, "unary"),
            Arity::Binary => write!(f, "binary"),
        }
    }
}
