//! Token representation for the calculator stack

mod callable;
mod display;
mod impls;

pub use callable::{Arity, BinaryFnPtr, ConstantFnPtr, UnaryFnPtr};
pub use display::fmt_sequence;

/// A single entry in the calculator's token sequence.
///
/// Operands are literal numbers; the other three variants are named
/// operations whose behavior lives behind a shared function pointer, so
/// cloning a token never clones a closure.
#[derive(Clone)]
pub enum Token {
    /// A literal number
    Operand(f64),

    /// A named one-argument function (`√`, `sin`, ...)
    Unary {
        /// Display symbol and registry key
        symbol: String,
        /// The operation itself
        func: UnaryFnPtr,
    },

    /// A named two-argument function (`+`, `÷`, ...)
    ///
    /// `func` receives `(top, second)`: the most recently pushed value
    /// first. Non-commutative operations compute `second ⊘ top`.
    Binary {
        /// Display symbol and registry key
        symbol: String,
        /// The operation itself
        func: BinaryFnPtr,
    },

    /// A named zero-argument supplier (`π`)
    Constant {
        /// Display symbol and registry key
        symbol: String,
        /// The supplier
        func: ConstantFnPtr,
    },
}
