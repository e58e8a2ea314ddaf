//! Stack guard for recursion over nested values.
//!
//! Cloning, comparing, hashing and printing recurse once per aggregate or
//! enum-payload level. Evaluators happily build constants hundreds of
//! levels deep (linked lists folded at compile time), so each level checks
//! the remaining native stack first.
//!
//! `stacker` is not available on WASM; there the guard is a plain call.

/// Run `f`, growing the stack first if little of it is left.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Grow once less than this much stack remains (64KB).
    const RED_ZONE: usize = 64 * 1024;

    /// Size of each new stack segment (512KB).
    const NEW_SEGMENT: usize = 512 * 1024;

    stacker::maybe_grow(RED_ZONE, NEW_SEGMENT, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
