use crate::error::HistoryError;
use parking_lot::Mutex;
use tracing::warn;

/// Where absorbed history failures are reported.
pub trait DiagnosticSink {
    fn report(&self, error: &HistoryError);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, error: &HistoryError) {
        warn!("tool history: {}", error);
    }
}

/// Keeps the rendered messages, for callers that want to surface them later.
#[derive(Debug, Default)]
pub struct CollectingSink {
    messages: Mutex<Vec<String>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.lock())
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, error: &HistoryError) {
        self.messages.lock().push(error.to_string());
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for std::sync::Arc<T> {
    fn report(&self, error: &HistoryError) {
        (**self).report(error)
    }
}
