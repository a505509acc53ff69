use greensort_core::{DiagnosticSink, LoadError};

/// Sends fetch failures to the browser console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn record(&self, context: &str, error: &LoadError) {
        web_sys::console::error_1(&format!("{}: {}", context, error).into());
    }
}
