//! Region storage for the variable-size parts of symbolic values.
//!
//! [`ConstArena`] uses struct-of-arrays layout: one flat pool per record
//! shape, appended to by factory calls and cleared all at once by
//! [`ConstArena::reset`]. There is no per-record deallocation.
//!
//! # Index Spaces
//!
//! - `words`: integer limbs and float bit patterns, indexed by [`IntRef`] / [`FloatRef`]
//! - `bytes`: UTF-8 string data, indexed by [`Slot`]
//! - `elements`: aggregate members, indexed by [`Slot`]
//! - `payloads`: enum case + payload records, indexed by [`PayloadRef`]
//! - `addresses`: derived address records (object id, then path), indexed by [`Slot`]
//!
//! Every handle carries the [`ArenaStamp`] of the arena generation that
//! issued it. Reading a handle through a different arena, or after the
//! issuing arena was reset, panics.

use std::mem::size_of;
use std::sync::atomic::{AtomicU32, Ordering};

use symval_ir::{ApFloat, ApInt, EnumCaseId, FloatSemantics};

use crate::SymbolicValue;

/// Next stamp to hand out. Shared by every thread so arenas moved between
/// threads never collide.
static NEXT_STAMP: AtomicU32 = AtomicU32::new(1);

/// Identity of one arena generation.
///
/// Only arena creation and reset draw stamps; values and accessors just
/// copy and compare them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct ArenaStamp(u32);

impl ArenaStamp {
    fn fresh() -> Self {
        let stamp = NEXT_STAMP
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |next| next.checked_add(1))
            .unwrap_or_else(|_| panic!("constant arena overflow: too many arena generations"));
        ArenaStamp(stamp)
    }
}

/// A contiguous run of records in one pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct Slot {
    stamp: ArenaStamp,
    start: u32,
    len: u32,
}

impl Slot {
    #[inline]
    fn range(self) -> std::ops::Range<usize> {
        let start = self.start as usize;
        start..start + self.len as usize
    }
}

/// An integer record: `ceil(bit_width / 64)` words starting at `start`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct IntRef {
    stamp: ArenaStamp,
    start: u32,
    bit_width: u32,
}

/// A float record: the bit pattern words for `semantics` starting at `start`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct FloatRef {
    stamp: ArenaStamp,
    start: u32,
    semantics: FloatSemantics,
}

/// An enum-with-payload record.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct PayloadRef {
    stamp: ArenaStamp,
    index: u32,
}

#[derive(Copy, Clone, Debug)]
struct EnumPayload {
    case: EnumCaseId,
    payload: SymbolicValue,
}

/// Convert a pool length to a `u32` index.
///
/// # Panics
/// Panics if the pool has outgrown the `u32` index space.
#[inline]
#[track_caller]
fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len)
        .unwrap_or_else(|_| panic!("constant arena overflow: too many {what} (max {})", u32::MAX))
}

#[inline]
fn words_for_width(bit_width: u32) -> usize {
    bit_width.div_ceil(64) as usize
}

/// Arena owning every variable-size payload of the symbolic values built
/// against it.
///
/// Values hold handles into the arena, never the other way round. The
/// arena must outlive every value built from it; use
/// [`SymbolicValue::clone_into_arena`] to move a value to a longer-lived
/// arena.
#[derive(Debug)]
pub struct ConstArena {
    stamp: ArenaStamp,
    words: Vec<u64>,
    bytes: String,
    elements: Vec<SymbolicValue>,
    payloads: Vec<EnumPayload>,
    addresses: Vec<u32>,
}

impl ConstArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        let arena = ConstArena {
            stamp: ArenaStamp::fresh(),
            words: Vec::new(),
            bytes: String::new(),
            elements: Vec::new(),
            payloads: Vec::new(),
            addresses: Vec::new(),
        };
        tracing::trace!(stamp = arena.stamp.0, "created constant arena");
        arena
    }

    /// Create an arena pre-sized for roughly `records` values.
    ///
    /// Sizes the word and element pools, which dominate in practice;
    /// the other pools grow on demand.
    pub fn with_capacity(records: usize) -> Self {
        let mut arena = Self::new();
        arena.words.reserve(records);
        arena.elements.reserve(records);
        arena
    }

    /// Drop every record at once.
    ///
    /// All values previously built against this arena become invalid;
    /// reading one panics.
    pub fn reset(&mut self) {
        tracing::debug!(
            stamp = self.stamp.0,
            bytes = self.allocated_bytes(),
            "resetting constant arena"
        );
        self.words.clear();
        self.bytes.clear();
        self.elements.clear();
        self.payloads.clear();
        self.addresses.clear();
        self.stamp = ArenaStamp::fresh();
    }

    /// Returns `true` if nothing has been allocated since creation or reset.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
            && self.bytes.is_empty()
            && self.elements.is_empty()
            && self.payloads.is_empty()
            && self.addresses.is_empty()
    }

    /// Bytes of payload currently held, across all pools.
    pub fn allocated_bytes(&self) -> usize {
        self.words.len() * size_of::<u64>()
            + self.bytes.len()
            + self.elements.len() * size_of::<SymbolicValue>()
            + self.payloads.len() * size_of::<EnumPayload>()
            + self.addresses.len() * size_of::<u32>()
    }

    #[inline]
    #[track_caller]
    fn check(&self, stamp: ArenaStamp) {
        assert!(
            stamp == self.stamp,
            "symbolic value read through an arena that did not allocate it, \
             or after that arena was reset"
        );
    }

    // Integers and floats

    pub(crate) fn alloc_integer(&mut self, value: &ApInt) -> IntRef {
        let start = to_u32(self.words.len(), "words");
        self.words.extend_from_slice(value.words());
        IntRef {
            stamp: self.stamp,
            start,
            bit_width: value.bit_width(),
        }
    }

    #[track_caller]
    pub(crate) fn integer(&self, r: IntRef) -> ApInt {
        self.check(r.stamp);
        let start = r.start as usize;
        ApInt::new(r.bit_width, &self.words[start..start + words_for_width(r.bit_width)])
    }

    pub(crate) fn alloc_float(&mut self, value: &ApFloat) -> FloatRef {
        let start = to_u32(self.words.len(), "words");
        self.words.extend_from_slice(value.bits().words());
        FloatRef {
            stamp: self.stamp,
            start,
            semantics: value.semantics(),
        }
    }

    #[track_caller]
    pub(crate) fn float(&self, r: FloatRef) -> ApFloat {
        self.check(r.stamp);
        let width = r.semantics.bit_width();
        let start = r.start as usize;
        let bits = ApInt::new(width, &self.words[start..start + words_for_width(width)]);
        ApFloat::from_bits(r.semantics, bits)
    }

    // Strings

    pub(crate) fn alloc_str(&mut self, value: &str) -> Slot {
        let start = to_u32(self.bytes.len(), "string bytes");
        self.bytes.push_str(value);
        Slot {
            stamp: self.stamp,
            start,
            len: to_u32(value.len(), "string bytes"),
        }
    }

    #[track_caller]
    pub(crate) fn str(&self, slot: Slot) -> &str {
        self.check(slot.stamp);
        &self.bytes[slot.range()]
    }

    // Aggregates

    pub(crate) fn alloc_elements(&mut self, elements: &[SymbolicValue]) -> Slot {
        let start = to_u32(self.elements.len(), "aggregate elements");
        self.elements.extend_from_slice(elements);
        Slot {
            stamp: self.stamp,
            start,
            len: to_u32(elements.len(), "aggregate elements"),
        }
    }

    #[track_caller]
    pub(crate) fn elements(&self, slot: Slot) -> &[SymbolicValue] {
        self.check(slot.stamp);
        &self.elements[slot.range()]
    }

    // Enum payloads

    pub(crate) fn alloc_payload(&mut self, case: EnumCaseId, payload: SymbolicValue) -> PayloadRef {
        let index = to_u32(self.payloads.len(), "enum payloads");
        self.payloads.push(EnumPayload { case, payload });
        PayloadRef {
            stamp: self.stamp,
            index,
        }
    }

    #[track_caller]
    pub(crate) fn payload(&self, r: PayloadRef) -> (EnumCaseId, SymbolicValue) {
        self.check(r.stamp);
        let record = self.payloads[r.index as usize];
        (record.case, record.payload)
    }

    // Derived addresses

    /// Store `object` followed by `path` as one record.
    pub(crate) fn alloc_address(&mut self, object: u32, path: &[u32]) -> Slot {
        let start = to_u32(self.addresses.len(), "address slots");
        self.addresses.push(object);
        self.addresses.extend_from_slice(path);
        Slot {
            stamp: self.stamp,
            start,
            len: to_u32(path.len() + 1, "address slots"),
        }
    }

    /// The whole record: object id at index 0, path after it.
    #[track_caller]
    pub(crate) fn address(&self, slot: Slot) -> &[u32] {
        self.check(slot.stamp);
        &self.addresses[slot.range()]
    }
}

impl Default for ConstArena {
    fn default() -> Self {
        Self::new()
    }
}
