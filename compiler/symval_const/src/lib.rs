//! Symval Const - compact symbolic values for a compiler's constant evaluator.
//!
//! A [`SymbolicValue`] is a two-word, `Copy` cell that can denote every shape
//! of result a constant evaluator produces: scalars, aggregates, enum values,
//! memory addresses and the "could not fold this" marker. Variable-size
//! payloads live in a caller-owned [`ConstArena`]; the cell only holds a
//! stamped handle into it.
//!
//! # Layers
//!
//! - [`SymbolicValue`] factories, classification ([`Kind`]) and accessors
//! - [`ConstArena`]: struct-of-arrays payload pools, reset all at once
//! - Unknown-value diagnostics (`emit_unknown_diagnostic_notes`)
//! - Cloning between arenas, structural equality/hashing ([`ConstView`])
//!   and printing
//!
//! # Reading Payloads
//!
//! Accessors whose payload may live either in the arena or in an IR literal
//! instruction take a [`ConstCx`], which pairs the arena with the
//! [`IrContext`](symval_ir::IrContext).

mod address;
mod arena;
mod clone;
mod cx;
mod diagnostics;
mod print;
mod stack;
mod value;

use std::sync::Once;

pub use address::{AccessPath, ObjectId};
pub use arena::ConstArena;
pub use cx::{structurally_eq, ConstCx, ConstView};
pub use value::{Kind, SymbolicValue, UnknownReason};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=symval_const=debug` or `RUST_LOG=symval_const=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
