//! Diagnostic types for reporting why a value is not a compile-time constant.
//!
//! Every diagnostic here is a note: it explains an error the evaluator's
//! caller reports elsewhere.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes (extra context)
//!
//! Producers hand finished [`Diagnostic`]s to a [`DiagnosticSink`]. Rendering
//! to a terminal or an editor is the sink owner's business.

mod diagnostic;
mod error_code;
pub mod queue;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticQueue, DiagnosticSink};
