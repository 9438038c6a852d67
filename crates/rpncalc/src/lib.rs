//! # rpncalc
//!
//! The brain of a reverse-Polish-notation calculator.
//!
//! A [`Brain`] owns an ordered sequence of [`Token`]s (operands and
//! operator references). Every push re-evaluates the whole sequence by
//! reducing it recursively from the top, consuming tokens right-to-left.
//! Operator symbols are resolved through a [`Registry`] that maps each
//! symbol to exactly one arity and numeric behavior.
//!
//! ## Architecture
//!
//! - **Token**: closed sum type of operand, unary, binary and constant
//! - **Registry**: symbol → operation lookup, loaded from a prelude
//! - **Eval**: structural recursion over `&[Token]`
//! - **Brain**: the stateful stack evaluator plus display history
//!
//! ```
//! use rpncalc::Brain;
//!
//! let mut brain = Brain::new();
//! brain.push_operand(6.0);
//! brain.push_operand(2.0);
//! assert_eq!(brain.perform_operation("÷"), Some(3.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod brain;
pub mod context;
pub mod error;
pub mod eval;
pub mod history;
pub mod registry;
pub mod token;

// Re-export main types
pub use brain::Brain;
pub use context::EvalContext;
pub use error::{RegistryError, Result};
pub use eval::{evaluate, Reduce, Reduction};
pub use history::History;
pub use registry::Registry;
pub use token::{fmt_sequence, Arity, BinaryFnPtr, ConstantFnPtr, Token, UnaryFnPtr};

/// rpncalc version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
