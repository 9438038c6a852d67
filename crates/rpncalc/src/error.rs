//! Error types for rpncalc
//!
//! Evaluation itself never fails with an error: a starved operator yields
//! an absent result instead. Only registry extension is fallible.

use thiserror::Error;

/// Errors raised while extending a [`Registry`](crate::Registry).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The symbol is already bound to an operation
    #[error("Duplicate symbol: `{symbol}` is already registered as a {existing} operation")]
    DuplicateSymbol {
        /// The offending symbol
        symbol: String,
        /// Kind of the operation already registered under it
        existing: &'static str,
    },

    /// Operands are values, not operations
    #[error("Not an operation: operand `{0}` cannot be registered")]
    NotAnOperation(String),
}

/// Result type alias for rpncalc operations
pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_symbol_message() {
        let err = RegistryError::DuplicateSymbol {
            symbol: "+".to_string(),
            existing: "binary",
        };
        assert_eq!(
            err.to_string(),
            "Duplicate symbol: `+` is already registered as a binary operation"
        );
    }

    #[test]
    fn test_not_an_operation_message() {
        let err = RegistryError::NotAnOperation("4".to_string());
        assert_eq!(
            err.to_string(),
            "Not an operation: operand `4` cannot be registered"
        );
    }
}
