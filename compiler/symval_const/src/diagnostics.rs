//! Explaining unknown values to the user.
//!
//! The evaluator reports "this must be a constant" at the place that needed
//! the value. This module adds the follow-up note saying why folding failed
//! and where.

use symval_diagnostic::{Diagnostic, DiagnosticSink};
use symval_ir::{IrContext, Span};

use crate::SymbolicValue;

impl SymbolicValue {
    /// Emit a note explaining why this unknown value could not be folded.
    ///
    /// The note points at the offending node's span, or at `fallback` when
    /// the node has none. When the note is placed on the node, `fallback`
    /// (usually the use that required a constant) gets a secondary label.
    /// With neither location known the note is emitted without labels.
    ///
    /// # Panics
    /// Panics if this is not an unknown value.
    #[track_caller]
    pub fn emit_unknown_diagnostic_notes(
        self,
        ir: &dyn IrContext,
        fallback: Span,
        sink: &mut dyn DiagnosticSink,
    ) {
        let (node, reason) = self.unknown_value();
        let fallback = Some(fallback).filter(|span| !span.is_dummy());
        let span = ir
            .node_span(node)
            .filter(|span| !span.is_dummy())
            .or(fallback);

        let mut diag = Diagnostic::note(reason.error_code()).with_message(reason.message());
        match span {
            Some(span) => {
                diag = diag.with_label(span, reason.label());
                if let Some(fallback) = fallback.filter(|&fallback| fallback != span) {
                    diag = diag
                        .with_secondary_label(fallback, "value required to be constant here");
                }
            }
            None => tracing::debug!(?node, %reason, "unknown value has no location"),
        }
        if let Some(desc) = ir.node_description(node) {
            diag = diag.with_note(format!("while evaluating {desc}"));
        }

        tracing::debug!(code = %diag.code, ?node, ?span, "emitting unknown value note");
        sink.emit(diag);
    }
}
