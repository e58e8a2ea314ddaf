//! Memory-object identifiers for address values.

use smallvec::SmallVec;

/// Identifier of a memory object tracked by the evaluator.
///
/// The evaluator owns the mapping from ids to objects; address values only
/// carry the id.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(transparent)]
pub struct ObjectId(u32);

impl ObjectId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        ObjectId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Field/element selectors of a derived address, outermost first.
///
/// Most derived addresses are a few levels deep; four selectors stay inline.
pub type AccessPath = SmallVec<[u32; 4]>;
