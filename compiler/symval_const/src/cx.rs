//! Read contexts, structural equality and hashing.
//!
//! A [`SymbolicValue`] alone cannot be compared or printed: its payload may
//! live in an arena or in an IR literal. [`ConstCx`] supplies both, and
//! [`ConstView`] pairs a value with its context so it can implement the
//! standard traits and key hash maps.

use std::fmt;
use std::hash::{Hash, Hasher};

use symval_ir::IrContext;

use crate::stack::ensure_sufficient_stack;
use crate::{AccessPath, ConstArena, Kind, SymbolicValue};

/// Everything needed to read a value's payload.
#[derive(Copy, Clone)]
pub struct ConstCx<'a> {
    pub arena: &'a ConstArena,
    pub ir: &'a dyn IrContext,
}

impl<'a> ConstCx<'a> {
    pub fn new(arena: &'a ConstArena, ir: &'a dyn IrContext) -> Self {
        ConstCx { arena, ir }
    }

    /// Pair `value` with this context.
    pub fn view(self, value: SymbolicValue) -> ConstView<'a> {
        ConstView { value, cx: self }
    }
}

/// A value together with the context it was built in.
///
/// Equality and hashing are structural and ignore the physical encoding:
/// a string held by a literal instruction equals the same bytes held in
/// an arena.
#[derive(Copy, Clone)]
pub struct ConstView<'a> {
    value: SymbolicValue,
    cx: ConstCx<'a>,
}

impl<'a> ConstView<'a> {
    #[inline]
    pub fn value(&self) -> SymbolicValue {
        self.value
    }

    #[inline]
    pub fn cx(&self) -> ConstCx<'a> {
        self.cx
    }
}

/// Compare two values that may live in different arenas.
///
/// Equal iff the kinds match and the payloads are equal, recursively for
/// aggregates and enum payloads.
pub fn structurally_eq(
    a: SymbolicValue,
    a_cx: ConstCx<'_>,
    b: SymbolicValue,
    b_cx: ConstCx<'_>,
) -> bool {
    if a.kind() != b.kind() {
        return false;
    }
    ensure_sufficient_stack(|| match a.kind() {
        Kind::UninitMemory => true,
        Kind::Unknown => a.unknown_value() == b.unknown_value(),
        Kind::Metatype => a.metatype_value() == b.metatype_value(),
        Kind::Function => a.function_value() == b.function_value(),
        Kind::Integer => a.integer_value(a_cx) == b.integer_value(b_cx),
        Kind::Float => a.float_value(a_cx) == b.float_value(b_cx),
        Kind::String => a.string_value(a_cx) == b.string_value(b_cx),
        Kind::Aggregate => {
            let xs = a.aggregate_value(a_cx.arena);
            let ys = b.aggregate_value(b_cx.arena);
            xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys)
                    .all(|(x, y)| structurally_eq(*x, a_cx, *y, b_cx))
        }
        Kind::Enum => a.enum_value(a_cx.arena) == b.enum_value(b_cx.arena),
        Kind::EnumWithPayload => {
            a.enum_value(a_cx.arena) == b.enum_value(b_cx.arena)
                && structurally_eq(
                    a.enum_payload_value(a_cx.arena),
                    a_cx,
                    b.enum_payload_value(b_cx.arena),
                    b_cx,
                )
        }
        Kind::Address => {
            let mut a_path = AccessPath::new();
            let mut b_path = AccessPath::new();
            a.address_value(a_cx.arena, &mut a_path) == b.address_value(b_cx.arena, &mut b_path)
                && a_path == b_path
        }
    })
}

fn structural_hash<H: Hasher>(value: SymbolicValue, cx: ConstCx<'_>, state: &mut H) {
    let kind = value.kind();
    kind.hash(state);
    ensure_sufficient_stack(|| match kind {
        Kind::UninitMemory => {}
        Kind::Unknown => value.unknown_value().hash(state),
        Kind::Metatype => value.metatype_value().hash(state),
        Kind::Function => value.function_value().hash(state),
        Kind::Integer => value.integer_value(cx).hash(state),
        Kind::Float => value.float_value(cx).hash(state),
        Kind::String => value.string_value(cx).hash(state),
        Kind::Aggregate => {
            let elements = value.aggregate_value(cx.arena);
            elements.len().hash(state);
            for element in elements {
                structural_hash(*element, cx, state);
            }
        }
        Kind::Enum => value.enum_value(cx.arena).hash(state),
        Kind::EnumWithPayload => {
            value.enum_value(cx.arena).hash(state);
            structural_hash(value.enum_payload_value(cx.arena), cx, state);
        }
        Kind::Address => {
            let mut path = AccessPath::new();
            value.address_value(cx.arena, &mut path).hash(state);
            path.hash(state);
        }
    });
}

impl PartialEq for ConstView<'_> {
    fn eq(&self, other: &Self) -> bool {
        structurally_eq(self.value, self.cx, other.value, other.cx)
    }
}

impl Eq for ConstView<'_> {}

impl Hash for ConstView<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        structural_hash(self.value, self.cx, state);
    }
}

impl fmt::Debug for ConstView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (value, cx) = (self.value, self.cx);
        match value.kind() {
            Kind::UninitMemory => write!(f, "UninitMemory"),
            Kind::Unknown => {
                let (node, reason) = value.unknown_value();
                write!(f, "Unknown({node:?}, {reason:?})")
            }
            Kind::Metatype => write!(f, "Metatype({:?})", value.metatype_value()),
            Kind::Function => write!(f, "Function({:?})", value.function_value()),
            Kind::Integer => write!(f, "Integer({:?})", value.integer_value(cx)),
            Kind::Float => write!(f, "Float({:?})", value.float_value(cx)),
            Kind::String => write!(f, "String({:?})", value.string_value(cx)),
            Kind::Aggregate => {
                write!(f, "Aggregate")?;
                f.debug_list()
                    .entries(value.aggregate_value(cx.arena).iter().map(|e| cx.view(*e)))
                    .finish()
            }
            Kind::Enum => write!(f, "Enum({:?})", value.enum_value(cx.arena)),
            Kind::EnumWithPayload => write!(
                f,
                "EnumWithPayload({:?}, {:?})",
                value.enum_value(cx.arena),
                cx.view(value.enum_payload_value(cx.arena))
            ),
            Kind::Address => {
                let mut path = AccessPath::new();
                let object = value.address_value(cx.arena, &mut path);
                write!(f, "Address({object:?}, {:?})", path.as_slice())
            }
        }
    }
}

impl fmt::Display for ConstView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = String::new();
        self.value.print(self.cx, &mut text, 0)?;
        f.write_str(text.trim_end_matches('\n'))
    }
}
