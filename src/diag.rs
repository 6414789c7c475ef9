//! Diagnostic sink for blocked rename attempts.
//!
//! Every rename the guards refuse produces exactly one warning through a
//! [`DiagnosticSink`]. The sink is an explicit single-method capability
//! passed per invocation — never shared process state — with
//! [`LogSink`] as the default (routes to the `tracing` warning stream) and
//! [`CollectedDiagnostics`] for asserting on messages in tests.

/// Receives one message per blocked rename attempt.
pub trait DiagnosticSink {
    /// Report a blocked rename.
    fn warn(&mut self, message: &str);
}

/// Default sink: emits each message through `tracing::warn!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warn(&mut self, message: &str) {
        tracing::warn!(target: "esrename", "{message}");
    }
}

/// Collecting sink for tests and batch reporting.
#[derive(Debug, Clone, Default)]
pub struct CollectedDiagnostics {
    messages: Vec<String>,
}

impl CollectedDiagnostics {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in emission order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Number of collected messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl DiagnosticSink for CollectedDiagnostics {
    fn warn(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
