//! Symval IR - the surface a constant evaluator sees of its compiler's IR.
//!
//! This crate contains the data the symbolic value representation borrows
//! from the surrounding compiler without owning it:
//! - Spans for source locations
//! - Opaque, identity-compared handles to IR nodes, instructions, functions,
//!   types and enum cases
//! - Arbitrary-precision integer and float payloads (`ApInt`, `ApFloat`)
//! - The [`IrContext`] trait an IR implements so constant values can read
//!   literal instructions and describe nodes in diagnostics
//! - [`IrTable`], a small in-memory IR implementing [`IrContext`]
//!
//! # Design Philosophy
//!
//! - **Handles, not pointers**: every IR entity is a `u32` newtype
//! - **Identity only**: handles are compared by index, never dereferenced
//!   except through an [`IrContext`]

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-stored types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod apfloat;
mod apint;
mod context;
mod ids;
mod literal;
mod span;
mod table;

pub use apfloat::{ApFloat, FloatSemantics};
pub use apint::{ApInt, ApIntError};
pub use context::IrContext;
pub use ids::{EnumCaseId, FuncId, InstId, NodeId, TypeId};
pub use literal::{Literal, LiteralKind};
pub use span::Span;
pub use table::IrTable;
