//! Standard prelude with built-in operations

use std::f64::consts::PI;

use super::Registry;
use crate::token::Token;

impl Registry {
    /// Create a registry with the standard calculator operations.
    pub fn with_prelude() -> Self {
        let mut registry = Self::new();
        registry.load_prelude();
        registry
    }

    /// Load the standard prelude into this registry.
    ///
    /// Symbols already present are left untouched.
    pub fn load_prelude(&mut self) {
        for token in prelude() {
            if let Some(symbol) = token.symbol().map(str::to_string) {
                self.ops.entry(symbol).or_insert(token);
            }
        }
    }
}

fn prelude() -> Vec<Token> {
    vec![
        // Arithmetic
        Token::binary("×", op_multiply),
        Token::binary("÷", op_divide),
        Token::binary("+", op_add),
        Token::binary("−", op_subtract),
        // Functions
        Token::unary("√", f64::sqrt),
        Token::unary("sin", op_sin),
        Token::unary("cos", op_cos),
        // Constants
        Token::constant("π", || PI),
    ]
}

// ═══════════════════════════════════════════════════════════════════════
// Built-in Operation Implementations
// ═══════════════════════════════════════════════════════════════════════
//
// Binary operations receive (top, second): the most recently pushed value
// comes first.

fn op_multiply(top: f64, second: f64) -> f64 {
    second * top
}

fn op_divide(top: f64, second: f64) -> f64 {
    second / top
}

fn op_add(top: f64, second: f64) -> f64 {
    second + top
}

fn op_subtract(top: f64, second: f64) -> f64 {
    second - top
}

/// Sine of an angle given in degrees
fn op_sin(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// Cosine of an angle given in degrees
fn op_cos(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}
