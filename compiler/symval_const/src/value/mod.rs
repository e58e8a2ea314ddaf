//! The symbolic value cell.
//!
//! # Factory Discipline
//!
//! Every value is built by exactly one factory on [`SymbolicValue`] and is
//! never mutated afterwards. The physical encoding ([`Repr`]) is private;
//! callers see the semantic [`Kind`] and typed accessors.
//!
//! ```text
//! let mut arena = ConstArena::new();
//! let x = SymbolicValue::integer(&ApInt::from_u64(32, 42), &mut arena);
//! let pair = SymbolicValue::aggregate(&[x, x], &mut arena);
//! assert_eq!(pair.kind(), Kind::Aggregate);
//! ```
//!
//! # Encodings
//!
//! Scalars that an IR literal instruction already holds are stored as a
//! reference to that instruction (`Repr::Inst`); everything else that is
//! variable-size lives in a [`ConstArena`] record. Accessors hide the
//! difference, and so does structural equality.

mod kind;

use symval_ir::{
    ApFloat, ApInt, EnumCaseId, FuncId, InstId, IrContext, Literal, LiteralKind, NodeId, TypeId,
};

use crate::arena::{FloatRef, IntRef, PayloadRef, Slot};
use crate::{ConstArena, ConstCx, ObjectId};

pub use kind::{Kind, UnknownReason};

/// Physical encoding of a [`SymbolicValue`].
///
/// Several encodings map to one [`Kind`]; see [`SymbolicValue::kind`].
#[derive(Copy, Clone, Debug)]
pub(crate) enum Repr {
    UninitMemory,
    Unknown { node: NodeId, reason: UnknownReason },
    Metatype(TypeId),
    Function(FuncId),
    /// A literal instruction holding the value. The literal class is cached
    /// so classification needs no IR access.
    Inst { inst: InstId, literal: LiteralKind },
    Integer(IntRef),
    Float(FloatRef),
    String(Slot),
    Aggregate(Slot),
    Enum(EnumCaseId),
    EnumWithPayload(PayloadRef),
    DirectAddress(ObjectId),
    /// Record layout: object id, then the access path.
    DerivedAddress(Slot),
}

/// A compile-time value computed by the constant evaluator.
///
/// Two machine words, `Copy`, and never owns its payload: arena-backed
/// values are only readable through the [`ConstArena`] that built them,
/// and only until that arena is reset.
#[derive(Copy, Clone, Debug)]
pub struct SymbolicValue {
    pub(crate) repr: Repr,
}

#[cfg(target_pointer_width = "64")]
symval_ir::static_assert_size!(SymbolicValue, 16);

impl SymbolicValue {
    #[inline]
    const fn from_repr(repr: Repr) -> Self {
        SymbolicValue { repr }
    }

    // Factories

    /// Evaluation of `node` failed for `reason`.
    pub const fn unknown(node: NodeId, reason: UnknownReason) -> Self {
        Self::from_repr(Repr::Unknown { node, reason })
    }

    pub const fn uninit_memory() -> Self {
        Self::from_repr(Repr::UninitMemory)
    }

    pub const fn metatype(ty: TypeId) -> Self {
        Self::from_repr(Repr::Metatype(ty))
    }

    pub const fn function(func: FuncId) -> Self {
        Self::from_repr(Repr::Function(func))
    }

    /// Refer to the value held by a literal instruction without copying it.
    ///
    /// # Panics
    /// Panics if `inst` is not an integer, float or string literal in `ir`.
    #[track_caller]
    pub fn constant_inst(inst: InstId, ir: &dyn IrContext) -> Self {
        let Some(literal) = ir.literal(inst) else {
            panic!("{inst:?} is not a literal instruction");
        };
        Self::from_repr(Repr::Inst {
            inst,
            literal: literal.kind(),
        })
    }

    /// Copy `value` into a new arena record.
    pub fn integer(value: &ApInt, arena: &mut ConstArena) -> Self {
        Self::from_repr(Repr::Integer(arena.alloc_integer(value)))
    }

    /// Copy `value` into a new arena record.
    pub fn float(value: &ApFloat, arena: &mut ConstArena) -> Self {
        Self::from_repr(Repr::Float(arena.alloc_float(value)))
    }

    /// Copy the UTF-8 bytes of `value` into the arena.
    pub fn string(value: &str, arena: &mut ConstArena) -> Self {
        Self::from_repr(Repr::String(arena.alloc_str(value)))
    }

    /// Copy `elements` into one arena record. May be empty.
    pub fn aggregate(elements: &[SymbolicValue], arena: &mut ConstArena) -> Self {
        Self::from_repr(Repr::Aggregate(arena.alloc_elements(elements)))
    }

    pub const fn enum_case(case: EnumCaseId) -> Self {
        Self::from_repr(Repr::Enum(case))
    }

    /// An enum case carrying `payload`, which must be constant.
    pub fn enum_with_payload(
        case: EnumCaseId,
        payload: SymbolicValue,
        arena: &mut ConstArena,
    ) -> Self {
        debug_assert!(
            payload.is_constant(),
            "enum payload must be constant, found {}",
            payload.kind()
        );
        Self::from_repr(Repr::EnumWithPayload(arena.alloc_payload(case, payload)))
    }

    /// The address of a whole memory object.
    pub const fn address(object: ObjectId) -> Self {
        Self::from_repr(Repr::DirectAddress(object))
    }

    /// The address reached from `object` by following `path`.
    ///
    /// The object id and path share one arena record. An empty path is
    /// accepted and reads back like [`address`](Self::address).
    pub fn address_with_path(object: ObjectId, path: &[u32], arena: &mut ConstArena) -> Self {
        Self::from_repr(Repr::DerivedAddress(arena.alloc_address(object.raw(), path)))
    }

    // Classification

    /// Map the physical encoding to its semantic kind.
    pub const fn kind(self) -> Kind {
        match self.repr {
            Repr::UninitMemory => Kind::UninitMemory,
            Repr::Unknown { .. } => Kind::Unknown,
            Repr::Metatype(_) => Kind::Metatype,
            Repr::Function(_) => Kind::Function,
            Repr::Inst { literal, .. } => match literal {
                LiteralKind::Integer => Kind::Integer,
                LiteralKind::Float => Kind::Float,
                LiteralKind::String => Kind::String,
            },
            Repr::Integer(_) => Kind::Integer,
            Repr::Float(_) => Kind::Float,
            Repr::String(_) => Kind::String,
            Repr::Aggregate(_) => Kind::Aggregate,
            Repr::Enum(_) => Kind::Enum,
            Repr::EnumWithPayload(_) => Kind::EnumWithPayload,
            Repr::DirectAddress(_) | Repr::DerivedAddress(_) => Kind::Address,
        }
    }

    #[inline]
    pub const fn is_constant(self) -> bool {
        self.kind().is_constant()
    }

    #[inline]
    pub const fn is_unknown(self) -> bool {
        matches!(self.repr, Repr::Unknown { .. })
    }

    #[cold]
    #[track_caller]
    fn wrong_kind(self, expected: &str) -> ! {
        panic!("expected {expected} value, found {}", self.kind())
    }

    // Accessors

    /// The offending node and the failure reason.
    ///
    /// # Panics
    /// Panics if this is not an unknown value.
    #[track_caller]
    pub fn unknown_value(self) -> (NodeId, UnknownReason) {
        self.as_unknown()
            .unwrap_or_else(|| self.wrong_kind(Kind::Unknown.name()))
    }

    pub const fn as_unknown(self) -> Option<(NodeId, UnknownReason)> {
        match self.repr {
            Repr::Unknown { node, reason } => Some((node, reason)),
            _ => None,
        }
    }

    #[track_caller]
    pub fn metatype_value(self) -> TypeId {
        self.as_metatype()
            .unwrap_or_else(|| self.wrong_kind(Kind::Metatype.name()))
    }

    pub const fn as_metatype(self) -> Option<TypeId> {
        match self.repr {
            Repr::Metatype(ty) => Some(ty),
            _ => None,
        }
    }

    #[track_caller]
    pub fn function_value(self) -> FuncId {
        self.as_function()
            .unwrap_or_else(|| self.wrong_kind(Kind::Function.name()))
    }

    pub const fn as_function(self) -> Option<FuncId> {
        match self.repr {
            Repr::Function(func) => Some(func),
            _ => None,
        }
    }

    /// The literal instruction this value refers to, if it is stored that
    /// way. Arena-backed scalars return `None`.
    pub const fn constant_inst_if_present(self) -> Option<InstId> {
        match self.repr {
            Repr::Inst { inst, .. } => Some(inst),
            _ => None,
        }
    }

    /// Read an integer regardless of where it is stored.
    ///
    /// # Panics
    /// Panics if this is not an integer value.
    #[track_caller]
    pub fn integer_value(self, cx: ConstCx<'_>) -> ApInt {
        match self.repr {
            Repr::Integer(r) => cx.arena.integer(r),
            Repr::Inst {
                inst,
                literal: LiteralKind::Integer,
            } => match cx.ir.literal(inst) {
                Some(Literal::Integer(value)) => value.clone(),
                _ => literal_mismatch(inst, LiteralKind::Integer),
            },
            _ => self.wrong_kind(Kind::Integer.name()),
        }
    }

    /// Read a float regardless of where it is stored.
    ///
    /// # Panics
    /// Panics if this is not a float value.
    #[track_caller]
    pub fn float_value(self, cx: ConstCx<'_>) -> ApFloat {
        match self.repr {
            Repr::Float(r) => cx.arena.float(r),
            Repr::Inst {
                inst,
                literal: LiteralKind::Float,
            } => match cx.ir.literal(inst) {
                Some(Literal::Float(value)) => value.clone(),
                _ => literal_mismatch(inst, LiteralKind::Float),
            },
            _ => self.wrong_kind(Kind::Float.name()),
        }
    }

    /// Borrow a string's bytes from the arena or the IR.
    ///
    /// # Panics
    /// Panics if this is not a string value.
    #[track_caller]
    pub fn string_value<'a>(self, cx: ConstCx<'a>) -> &'a str {
        match self.repr {
            Repr::String(slot) => cx.arena.str(slot),
            Repr::Inst {
                inst,
                literal: LiteralKind::String,
            } => match cx.ir.literal(inst) {
                Some(Literal::String(value)) => value,
                _ => literal_mismatch(inst, LiteralKind::String),
            },
            _ => self.wrong_kind(Kind::String.name()),
        }
    }

    /// The elements, in order. A view into the arena, not a copy.
    #[track_caller]
    pub fn aggregate_value(self, arena: &ConstArena) -> &[SymbolicValue] {
        match self.repr {
            Repr::Aggregate(slot) => arena.elements(slot),
            _ => self.wrong_kind(Kind::Aggregate.name()),
        }
    }

    /// The case of an enum value, with or without payload.
    #[track_caller]
    pub fn enum_value(self, arena: &ConstArena) -> EnumCaseId {
        match self.repr {
            Repr::Enum(case) => case,
            Repr::EnumWithPayload(r) => arena.payload(r).0,
            _ => self.wrong_kind(Kind::Enum.name()),
        }
    }

    /// The payload of an enum case. Only valid for `EnumWithPayload`.
    #[track_caller]
    pub fn enum_payload_value(self, arena: &ConstArena) -> SymbolicValue {
        match self.repr {
            Repr::EnumWithPayload(r) => arena.payload(r).1,
            _ => self.wrong_kind(Kind::EnumWithPayload.name()),
        }
    }

    /// The memory object of a direct or derived address.
    #[track_caller]
    pub fn address_value_object_id(self, arena: &ConstArena) -> ObjectId {
        self.as_address_object_id(arena)
            .unwrap_or_else(|| self.wrong_kind(Kind::Address.name()))
    }

    #[track_caller]
    pub fn as_address_object_id(self, arena: &ConstArena) -> Option<ObjectId> {
        match self.repr {
            Repr::DirectAddress(object) => Some(object),
            Repr::DerivedAddress(slot) => Some(ObjectId::new(arena.address(slot)[0])),
            _ => None,
        }
    }

    /// The memory object of an address; its access path is appended to
    /// `path` (nothing is appended for a direct address).
    #[track_caller]
    pub fn address_value(self, arena: &ConstArena, path: &mut impl Extend<u32>) -> ObjectId {
        match self.repr {
            Repr::DirectAddress(object) => object,
            Repr::DerivedAddress(slot) => {
                let record = arena.address(slot);
                path.extend(record[1..].iter().copied());
                ObjectId::new(record[0])
            }
            _ => self.wrong_kind(Kind::Address.name()),
        }
    }
}

#[cold]
#[track_caller]
fn literal_mismatch(inst: InstId, expected: LiteralKind) -> ! {
    panic!("expected {expected} at {inst:?} in the IR this value was built against")
}

#[cfg(test)]
mod tests;
