use crate::LoadError;

/// Where fetch failures are reported. Users only ever see the fixed error
/// message; the cause goes here.
pub trait DiagnosticSink {
    fn record(&self, context: &str, error: &LoadError);
}

/// Reports failures through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, context: &str, error: &LoadError) {
        tracing::error!(kind = error.kind(), "{}: {}", context, error);
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&self, _context: &str, _error: &LoadError) {}
}
