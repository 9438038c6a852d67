//! The stack evaluator: token sequence, registry and history

use std::fmt;

use log::debug;

use crate::{fmt_sequence, EvalContext, History, Reduce, Reduction, Registry, Token};

/// A reverse-Polish calculator brain.
///
/// Owns the token sequence and re-evaluates all of it after every push.
/// Evaluation never mutates the sequence; only pushes and [`clear`]
/// do.
///
/// [`clear`]: Brain::clear
///
/// # Example
///
/// ```
/// use rpncalc::Brain;
///
/// let mut brain = Brain::new();
/// brain.push_operand(3.0);
/// brain.push_operand(4.0);
/// assert_eq!(brain.perform_operation("+"), Some(7.0));
///
/// // Starved operators yield nothing but keep the sequence intact
/// brain.clear();
/// assert_eq!(brain.perform_operation("×"), None);
/// assert_eq!(brain.stack().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Brain {
    /// Every token pushed since the last clear
    stack: Vec<Token>,

    /// Known operations, fixed for the brain's lifetime
    registry: Registry,

    /// Display history tracks
    history: History,

    ctx: EvalContext,
}

impl Default for Brain {
    fn default() -> Self {
        Self::new()
    }
}

impl Brain {
    /// Create a brain with the standard operations.
    pub fn new() -> Self {
        Self::with_registry(Registry::with_prelude())
    }

    /// Create a brain over a custom set of operations.
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            stack: Vec::new(),
            registry,
            history: History::new(),
            ctx: EvalContext::default(),
        }
    }

    /// Replace the evaluation context.
    pub fn with_context(mut self, ctx: EvalContext) -> Self {
        self.ctx = ctx;
        self
    }

    // ═══════════════════════════════════════════════════════════════════
    // Input
    // ═══════════════════════════════════════════════════════════════════

    /// Push an operand and evaluate the whole sequence.
    pub fn push_operand(&mut self, operand: f64) -> Option<f64> {
        self.push(Token::from(operand));
        self.evaluate()
    }

    /// Push the operation named `symbol` and evaluate the whole sequence.
    ///
    /// Unknown symbols push nothing; the current sequence is still
    /// evaluated.
    pub fn perform_operation(&mut self, symbol: &str) -> Option<f64> {
        match self.registry.resolve(symbol).cloned() {
            Some(operation) => self.push(operation),
            None => debug!("ignoring unknown operation `{}`", symbol),
        }
        self.evaluate()
    }

    fn push(&mut self, token: Token) {
        self.history.record(&token);
        self.stack.push(token);
    }

    /// Reset the token sequence and the history.
    pub fn clear(&mut self) {
        self.stack.clear();
        self.history.clear();
    }

    // ═══════════════════════════════════════════════════════════════════
    // Evaluation
    // ═══════════════════════════════════════════════════════════════════

    /// Evaluate the full sequence from the top.
    pub fn evaluate(&self) -> Option<f64> {
        let reduction = self.reduce();
        debug!(
            "{} = {:?} with {} left over",
            fmt_sequence(&self.stack),
            reduction.result,
            fmt_sequence(reduction.remaining)
        );
        reduction.result
    }

    /// Reduce the full sequence, keeping the unconsumed remainder.
    pub fn reduce(&self) -> Reduction<'_> {
        self.stack.reduce(&self.ctx)
    }

    // ═══════════════════════════════════════════════════════════════════
    // History
    // ═══════════════════════════════════════════════════════════════════

    /// Render pending input into the display history and return it.
    pub fn update_history(&mut self) -> &str {
        self.history.update()
    }

    /// The display history accumulated so far.
    pub fn history(&self) -> &str {
        self.history.as_str()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// The token sequence, oldest first.
    pub fn stack(&self) -> &[Token] {
        &self.stack
    }

    /// The operations this brain understands.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl fmt::Display for Brain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", fmt_sequence(&self.stack))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let brain = Brain::new();
        assert!(brain.stack().is_empty());
        assert_eq!(brain.evaluate(), None);
        assert_eq!(brain.history(), "");
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let mut brain = Brain::new();
        brain.push_operand(1.0);
        brain.push_operand(2.0);
        brain.evaluate();
        brain.reduce();
        assert_eq!(brain.stack().len(), 2);
    }

    #[test]
    fn test_display() {
        let mut brain = Brain::new();
        brain.push_operand(6.0);
        brain.push_operand(2.0);
        brain.perform_operation("÷");
        assert_eq!(brain.to_string(), "[6, 2, ÷]");
    }

    #[test]
    fn test_with_context() {
        let mut brain = Brain::new().with_context(EvalContext::with_trace(true));
        assert!(brain.ctx.trace);
        brain.push_operand(2.0);
        assert_eq!(brain.perform_operation("√"), Some(2f64.sqrt()));
    }
}
