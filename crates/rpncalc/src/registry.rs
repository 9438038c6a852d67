//! Operation registry mapping symbols to operations

mod prelude;

use indexmap::IndexMap;

use crate::error::RegistryError;
use crate::token::{Arity, Token};

/// The operation registry: a fixed mapping from operator symbol to the
/// operation token that carries its arity and behavior.
///
/// Symbols are unique; each maps to exactly one arity. Iteration follows
/// registration order.
///
/// # Example
///
/// ```
/// use rpncalc::{Arity, Registry, Token};
///
/// let mut registry = Registry::with_prelude();
/// assert_eq!(registry.arity("÷"), Some(Arity::Binary));
///
/// registry.register(Token::unary("±", |x| -x)).unwrap();
/// assert!(registry.contains("±"));
///
/// // Symbols can't be rebound
/// assert!(registry.register(Token::constant("π", || 3.0)).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    ops: IndexMap<String, Token>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an operation under its own symbol.
    ///
    /// # Errors
    ///
    /// - `NotAnOperation` if `token` is an operand
    /// - `DuplicateSymbol` if the symbol is already registered
    pub fn register(&mut self, token: Token) -> Result<(), RegistryError> {
        let symbol = match token.symbol() {
            Some(symbol) => symbol.to_string(),
            None => return Err(RegistryError::NotAnOperation(token.to_string())),
        };

        if let Some(existing) = self.ops.get(&symbol) {
            return Err(RegistryError::DuplicateSymbol {
                symbol,
                existing: existing.kind_name(),
            });
        }

        self.ops.insert(symbol, token);
        Ok(())
    }

    /// Look up the operation bound to `symbol`.
    pub fn resolve(&self, symbol: &str) -> Option<&Token> {
        self.ops.get(symbol)
    }

    /// Check if a symbol is registered.
    pub fn contains(&self, symbol: &str) -> bool {
        self.ops.contains_key(symbol)
    }

    /// Arity of the operation bound to `symbol`.
    pub fn arity(&self, symbol: &str) -> Option<Arity> {
        self.resolve(symbol).and_then(Token::arity)
    }

    /// All registered symbols, in registration order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.ops.keys().map(String::as_str)
    }

    /// Get the number of registered operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_resolve() {
        let mut registry = Registry::new();
        registry.register(Token::binary("max", f64::max)).unwrap();

        let op = registry.resolve("max").unwrap();
        assert_eq!(op.arity(), Some(Arity::Binary));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_rejects_operand() {
        let mut registry = Registry::new();
        let err = registry.register(Token::operand(1.0)).unwrap_err();
        assert_eq!(err, RegistryError::NotAnOperation("1".to_string()));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_rejects_duplicate_keeps_original() {
        let mut registry = Registry::new();
        registry.register(Token::unary("f", |x| x + 1.0)).unwrap();

        let err = registry.register(Token::binary("f", |a, b| a * b)).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::DuplicateSymbol {
                existing: "unary",
                ..
            }
        ));
        assert_eq!(registry.arity("f"), Some(Arity::Unary));
    }

    #[test]
    fn test_unknown_symbol_does_not_mutate() {
        let registry = Registry::with_prelude();
        let before = registry.len();
        assert!(registry.resolve("%").is_none());
        assert_eq!(registry.arity("%"), None);
        assert_eq!(registry.len(), before);
    }
}
