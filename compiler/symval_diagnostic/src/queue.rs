//! Collecting diagnostics.
//!
//! [`DiagnosticSink`] is the hook producers write to. [`DiagnosticQueue`]
//! is a sink that defers, sorts and deduplicates until flushed.

use rustc_hash::FxHashSet;

use crate::Diagnostic;

/// Destination for finished diagnostics.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Queue for collecting, sorting and deduplicating diagnostics.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// value.emit_unknown_diagnostic_notes(&ir, fallback, &mut queue);
/// for diag in queue.flush() { ... }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Take every queued diagnostic, ordered by primary span with
    /// unpositioned diagnostics last, dropping exact duplicates.
    ///
    /// The sort is stable, so diagnostics at the same position keep
    /// emission order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut diagnostics = std::mem::take(&mut self.diagnostics);
        diagnostics.sort_by_key(|d| match d.primary_span() {
            Some(span) => (0u8, span.start, span.end),
            None => (1u8, 0, 0),
        });
        let mut seen: FxHashSet<Diagnostic> = FxHashSet::default();
        seen.reserve(diagnostics.len());
        diagnostics.retain(|diag| seen.insert(diag.clone()));
        diagnostics
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.add(diagnostic);
    }
}
