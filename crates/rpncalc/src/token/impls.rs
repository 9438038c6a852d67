//! Token constructors, predicates, From traits, PartialEq

use std::sync::Arc;

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Token {
    /// Create an operand token
    pub fn operand(value: f64) -> Self {
        Token::Operand(value)
    }

    /// Create a unary operation token
    pub fn unary(
        symbol: impl Into<String>,
        func: impl Fn(f64) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Token::Unary {
            symbol: symbol.into(),
            func: Arc::new(func),
        }
    }

    /// Create a binary operation token; `func` is called as `func(top, second)`
    pub fn binary(
        symbol: impl Into<String>,
        func: impl Fn(f64, f64) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Token::Binary {
            symbol: symbol.into(),
            func: Arc::new(func),
        }
    }

    /// Create a constant token
    pub fn constant(
        symbol: impl Into<String>,
        func: impl Fn() -> f64 + Send + Sync + 'static,
    ) -> Self {
        Token::Constant {
            symbol: symbol.into(),
            func: Arc::new(func),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Predicates
    // ═══════════════════════════════════════════════════════════════════

    /// Check if token is a literal operand
    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Operand(_))
    }

    /// Operand count consumed by this operation; `None` for operands.
    pub fn arity(&self) -> Option<Arity> {
        match self {
            Token::Operand(_) => None,
            Token::Unary { .. } => Some(Arity::Unary),
            Token::Binary { .. } => Some(Arity::Binary),
            Token::Constant { .. } => Some(Arity::Nullary),
        }
    }

    /// Operation symbol, or `None` for operands.
    ///
    /// Use `to_string()` for the display form of any token.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Token::Operand(_) => None,
            Token::Unary { symbol, .. }
            | Token::Binary { symbol, .. }
            | Token::Constant { symbol, .. } => Some(symbol.as_str()),
        }
    }

    /// Human-readable name of the token kind
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Operand(_) => "operand",
            Token::Unary { .. } => "unary",
            Token::Binary { .. } => "binary",
            Token::Constant { .. } => "constant",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<f64> for Token {
    fn from(value: f64) -> Self {
        Token::Operand(value)
    }
}

// ═══════════════════════════════════════════════════════════════════
// PartialEq
// ═══════════════════════════════════════════════════════════════════

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Token::Operand(a), Token::Operand(b)) => a == b,
            // The symbol is an operation's identity; closures aren't comparable
            (Token::Unary { symbol: a, .. }, Token::Unary { symbol: b, .. })
            | (Token::Binary { symbol: a, .. }, Token::Binary { symbol: b, .. })
            | (Token::Constant { symbol: a, .. }, Token::Constant { symbol: b, .. }) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_predicates() {
        let t = Token::operand(4.0);
        assert!(t.is_operand());
        assert_eq!(t.arity(), None);
        assert_eq!(t.symbol(), None);
        assert_eq!(t.kind_name(), "operand");
    }

    #[test]
    fn test_operation_arity() {
        assert_eq!(Token::unary("neg", |x| -x).arity(), Some(Arity::Unary));
        assert_eq!(Token::binary("max", f64::max).arity(), Some(Arity::Binary));
        assert_eq!(
            Token::constant("e", || std::f64::consts::E).arity(),
            Some(Arity::Nullary)
        );
    }

    #[test]
    fn test_eq_by_symbol() {
        assert_eq!(Token::unary("neg", |x| -x), Token::unary("neg", |x| x));
        assert_ne!(Token::unary("neg", |x| -x), Token::constant("neg", || 0.0));
        assert_ne!(Token::from(1.0), Token::from(2.0));
        assert_eq!(Token::from(2.0), Token::operand(2.0));
    }
}
