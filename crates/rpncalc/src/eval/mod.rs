//! Reduction of postfix token sequences

use log::trace;

use crate::{BinaryFnPtr, EvalContext, Token, UnaryFnPtr};

/// Outcome of reducing a token sequence from the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reduction<'a> {
    /// The value computed, or `None` if an operator was starved of operands
    pub result: Option<f64>,

    /// Tokens left unconsumed below the reduced expression
    pub remaining: &'a [Token],
}

impl Reduction<'_> {
    /// Check if the reduction produced a value and consumed every token.
    pub fn is_complete(&self) -> bool {
        self.result.is_some() && self.remaining.is_empty()
    }
}

/// Trait for reducing a postfix token sequence to a value.
pub trait Reduce {
    /// Reduce from the top (the end), consuming tokens right-to-left.
    fn reduce(&self, ctx: &EvalContext) -> Reduction<'_>;
}

impl Reduce for [Token] {
    fn reduce(&self, ctx: &EvalContext) -> Reduction<'_> {
        reduce_top(self, ctx)
    }
}

/// An operator waiting on the reduction of the tokens below it.
///
/// `level` is the length of the prefix the operator tops; on starvation
/// that whole prefix is reported as remaining.
enum Pending<'a> {
    Unary {
        level: usize,
        func: &'a UnaryFnPtr,
    },
    Binary {
        level: usize,
        func: &'a BinaryFnPtr,
    },
    BinarySecond {
        level: usize,
        func: &'a BinaryFnPtr,
        first: f64,
    },
}

impl Pending<'_> {
    fn level(&self) -> usize {
        match self {
            Pending::Unary { level, .. }
            | Pending::Binary { level, .. }
            | Pending::BinarySecond { level, .. } => *level,
        }
    }
}

/// Reduce a single expression off the top of `ops`.
///
/// Operators waiting on operands live on an explicit work stack, so depth
/// is limited by memory rather than the call stack. A starved operator
/// reports its whole prefix as remaining, discarding any partial progress
/// made below it.
fn reduce_top<'a>(ops: &'a [Token], ctx: &EvalContext) -> Reduction<'a> {
    let mut pending: Vec<Pending<'a>> = Vec::new();
    let mut level = ops.len();

    loop {
        // Descend through operators until a level yields a value or starves
        let (mut result, mut rest) = loop {
            let Some((top, _)) = ops[..level].split_last() else {
                break (None, level);
            };
            match top {
                Token::Operand(value) => break (Some(*value), level - 1),
                Token::Constant { func, .. } => break (Some(func()), level - 1),
                Token::Unary { func, .. } => pending.push(Pending::Unary { level, func }),
                Token::Binary { func, .. } => pending.push(Pending::Binary { level, func }),
            }
            level -= 1;
        };
        if ctx.trace {
            trace!("reduce [..{}] -> {:?}, {} left", level, result, rest);
        }

        // Ascend, feeding values to the operators waiting on them
        loop {
            let Some(frame) = pending.pop() else {
                return Reduction {
                    result,
                    remaining: &ops[..rest],
                };
            };
            let frame_level = frame.level();

            match (frame, result) {
                (Pending::Unary { func, .. }, Some(operand)) => result = Some(func(operand)),
                (Pending::Binary { level: top, func }, Some(first)) => {
                    pending.push(Pending::BinarySecond {
                        level: top,
                        func,
                        first,
                    });
                    level = rest;
                    break;
                }
                (Pending::BinarySecond { func, first, .. }, Some(second)) => {
                    result = Some(func(first, second));
                }
                (_, None) => rest = frame_level,
            }

            if ctx.trace {
                trace!("reduce [..{}] -> {:?}, {} left", frame_level, result, rest);
            }
        }
    }
}

/// Evaluate a token sequence (convenience wrapper).
pub fn evaluate<'a>(ops: &'a [Token], ctx: &EvalContext) -> Reduction<'a> {
    ops.reduce(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add() -> Token {
        Token::binary("+", |top, second| second + top)
    }

    fn sub() -> Token {
        Token::binary("−", |top, second| second - top)
    }

    #[test]
    fn test_empty_is_starved() {
        let ops: Vec<Token> = vec![];
        let r = evaluate(&ops, &EvalContext::default());
        assert_eq!(r.result, None);
        assert!(r.remaining.is_empty());
        assert!(!r.is_complete());
    }

    #[test]
    fn test_operand_leaves_rest() {
        let ops = vec![Token::operand(1.0), Token::operand(2.0)];
        let r = evaluate(&ops, &EvalContext::default());
        assert_eq!(r.result, Some(2.0));
        assert_eq!(r.remaining, &ops[..1]);
    }

    #[test]
    fn test_binary_operand_order() {
        let ops = vec![Token::operand(10.0), Token::operand(4.0), sub()];
        let r = evaluate(&ops, &EvalContext::default());
        assert_eq!(r.result, Some(6.0));
        assert!(r.is_complete());
    }

    #[test]
    fn test_starved_binary_returns_whole_level() {
        let ops = vec![Token::operand(4.0), add()];
        let r = evaluate(&ops, &EvalContext::default());
        assert_eq!(r.result, None);
        assert_eq!(r.remaining, &ops[..]);
    }

    #[test]
    fn test_starvation_propagates_through_unary() {
        let ops = vec![Token::operand(4.0), add(), Token::unary("√", f64::sqrt)];
        let r = evaluate(&ops, &EvalContext::default());
        assert_eq!(r.result, None);
        assert_eq!(r.remaining.len(), 3);
    }

    #[test]
    fn test_constant_consumes_nothing_else() {
        let ops = vec![Token::operand(7.0), Token::constant("one", || 1.0)];
        let r = evaluate(&ops, &EvalContext::with_trace(true));
        assert_eq!(r.result, Some(1.0));
        assert_eq!(r.remaining, &ops[..1]);
    }
}
