//! Evaluation context configuration

/// Configuration for evaluation.
///
/// Passed through every reduction call and controls diagnostic behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvalContext {
    /// Whether to trace each reduction step (logged at `trace` level)
    pub trace: bool,
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with per-step tracing enabled or disabled.
    pub fn with_trace(trace: bool) -> Self {
        Self { trace }
    }
}
