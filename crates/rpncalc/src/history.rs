//! Display history accumulator
//!
//! Keeps operands and operations on two parallel tracks, in push order,
//! and stitches them into a running string such as `2+3×4`.

use crate::Token;

/// Running text history of the calculator's input.
///
/// The first render takes the second-to-last operand, the latest
/// operation, and the latest operand (`2+3`). Every render after that
/// appends only the latest operation and operand (`×4`). Each render
/// removes the tokens it uses from their tracks.
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Operands only, in push order
    operands: Vec<Token>,

    /// Operations only (constants included), in push order
    operations: Vec<Token>,

    /// The accumulated text
    text: String,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a pushed token onto its track.
    pub fn record(&mut self, token: &Token) {
        if token.is_operand() {
            self.operands.push(token.clone());
        } else {
            self.operations.push(token.clone());
        }
    }

    /// Append the pending tokens to the text and return it.
    ///
    /// Does nothing when the tracks don't hold what this render needs.
    pub fn update(&mut self) -> &str {
        let needed = if self.text.is_empty() { 2 } else { 1 };
        if self.operands.len() < needed || self.operations.is_empty() {
            return &self.text;
        }

        let mut rendered = String::new();
        if self.text.is_empty() {
            let before = self.operands.remove(self.operands.len() - 2);
            rendered.push_str(&before.to_string());
        }
        if let (Some(operation), Some(operand)) = (self.operations.pop(), self.operands.pop()) {
            rendered.push_str(&operation.to_string());
            rendered.push_str(&operand.to_string());
        }
        self.text.push_str(&rendered);

        &self.text
    }

    /// The accumulated text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Reset both tracks and the text.
    pub fn clear(&mut self) {
        self.operands.clear();
        self.operations.clear();
        self.text.clear();
    }
}
