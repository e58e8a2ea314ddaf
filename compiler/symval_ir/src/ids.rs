//! Opaque handles to entities owned by the surrounding IR.
//!
//! Each handle is a `u32` newtype compared by identity. The symbolic value
//! representation stores them verbatim and never dereferences them; only an
//! [`IrContext`](crate::IrContext) can say what a handle refers to.

use std::fmt;

macro_rules! define_ir_handle {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create a handle from a raw index.
            #[inline]
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            /// Get the index into the owning table.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            /// Get the raw `u32` value.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "({})"), self.0)
            }
        }
    };
}

define_ir_handle!(
    /// Any IR node: an instruction, a block argument, a global.
    ///
    /// Unknown values point at the node that could not be folded.
    NodeId,
    "NodeId"
);

define_ir_handle!(
    /// A single-value instruction. Every instruction is also a node.
    InstId,
    "InstId"
);

define_ir_handle!(
    /// An IR function.
    FuncId,
    "FuncId"
);

define_ir_handle!(
    /// A canonical type descriptor (the instance type of a metatype value).
    TypeId,
    "TypeId"
);

define_ir_handle!(
    /// An enum case declaration.
    EnumCaseId,
    "EnumCaseId"
);

impl InstId {
    /// View this instruction as a generic IR node.
    ///
    /// Instructions and nodes share one index space.
    #[inline]
    pub const fn as_node(self) -> NodeId {
        NodeId(self.0)
    }
}

impl From<InstId> for NodeId {
    #[inline]
    fn from(inst: InstId) -> Self {
        inst.as_node()
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{EnumCaseId, FuncId, InstId, NodeId, TypeId};
    crate::static_assert_size!(NodeId, 4);
    crate::static_assert_size!(InstId, 4);
    crate::static_assert_size!(FuncId, 4);
    crate::static_assert_size!(TypeId, 4);
    crate::static_assert_size!(EnumCaseId, 4);
}
