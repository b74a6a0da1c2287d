//! Interpreter settings.

/// Default limit on expression nesting during evaluation.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings for an [`Interpreter`](crate::Interpreter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Deepest allowed nesting of node evaluations.
    pub max_depth: usize,
    /// Emit a trace event for every native call.
    pub trace_calls: bool,
}

impl InterpreterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nesting limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_trace_calls(mut self, trace_calls: bool) -> Self {
        self.trace_calls = trace_calls;
        self
    }
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            trace_calls: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = InterpreterConfig::new().with_max_depth(8).with_trace_calls(true);
        assert_eq!(config.max_depth, 8);
        assert!(config.trace_calls);
        assert_eq!(InterpreterConfig::default().max_depth, DEFAULT_MAX_DEPTH);
    }
}
