//! The read-only view of an IR that symbolic values need.

use std::borrow::Cow;

use crate::{EnumCaseId, FuncId, InstId, Literal, NodeId, Span, TypeId};

/// Lookups a constant evaluator's IR provides to the value representation.
///
/// Only [`literal`](IrContext::literal) is required; everything else is
/// presentation and falls back to the raw handle when the IR has nothing
/// better to say.
pub trait IrContext {
    /// The literal held by `inst`, or `None` if `inst` is not a literal
    /// instruction.
    fn literal(&self, inst: InstId) -> Option<Literal<'_>>;

    /// Source position of `node`, if it has one.
    fn node_span(&self, _node: NodeId) -> Option<Span> {
        None
    }

    /// Short human-readable description of `node` (e.g. `"call to @f"`).
    fn node_description(&self, _node: NodeId) -> Option<Cow<'_, str>> {
        None
    }

    fn type_name(&self, ty: TypeId) -> Cow<'_, str> {
        Cow::Owned(format!("type#{}", ty.raw()))
    }

    fn function_name(&self, func: FuncId) -> Cow<'_, str> {
        Cow::Owned(format!("fn#{}", func.raw()))
    }

    fn enum_case_name(&self, case: EnumCaseId) -> Cow<'_, str> {
        Cow::Owned(format!("case#{}", case.raw()))
    }
}
