//! Display and Debug implementations for Token

use std::fmt;

use super::*;

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operand(v) => write!(f, "Operand({})", v),
            Token::Unary { symbol, .. } => write!(f, "Unary({})", symbol),
            Token::Binary { symbol, .. } => write!(f, "Binary({})", symbol),
            Token::Constant { symbol, .. } => write!(f, "Constant({})", symbol),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Shortest round-trip form: 2.0 renders as "2"
            Token::Operand(v) => write!(f, "{}", v),
            Token::Unary { symbol, .. }
            | Token::Binary { symbol, .. }
            | Token::Constant { symbol, .. } => write!(f, "{}", symbol),
        }
    }
}

/// Render a token sequence as `[6, 2, ÷]`.
pub fn fmt_sequence(ops: &[Token]) -> String {
    let items: Vec<String> = ops.iter().map(|t| t.to_string()).collect();
    format!("[{}]", items.join(", "))
}
