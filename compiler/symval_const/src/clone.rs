//! Moving values between arenas.

use smallvec::SmallVec;

use crate::stack::ensure_sufficient_stack;
use crate::value::Repr;
use crate::{ConstArena, ObjectId, SymbolicValue};

impl SymbolicValue {
    /// Rebuild this value, and every record it reaches, inside `dst`.
    ///
    /// The result refers only to `dst`. Values without arena records
    /// (metatypes, functions, payload-less enum cases, direct addresses,
    /// literal instructions) are copied as they are.
    ///
    /// # Panics
    /// Panics if this value is not constant. Unknown or uninitialized
    /// elements nested inside an aggregate are copied as they are.
    #[track_caller]
    pub fn clone_into_arena(self, src: &ConstArena, dst: &mut ConstArena) -> SymbolicValue {
        assert!(
            self.is_constant(),
            "only constant values can be cloned into another arena, found {}",
            self.kind()
        );
        tracing::trace!(kind = %self.kind(), "cloning symbolic value into another arena");
        self.copy_records(src, dst)
    }

    fn copy_records(self, src: &ConstArena, dst: &mut ConstArena) -> SymbolicValue {
        match self.repr {
            Repr::UninitMemory
            | Repr::Unknown { .. }
            | Repr::Metatype(_)
            | Repr::Function(_)
            | Repr::Inst { .. }
            | Repr::Enum(_)
            | Repr::DirectAddress(_) => self,
            Repr::Integer(r) => SymbolicValue::integer(&src.integer(r), dst),
            Repr::Float(r) => SymbolicValue::float(&src.float(r), dst),
            Repr::String(slot) => SymbolicValue::string(src.str(slot), dst),
            Repr::Aggregate(slot) => {
                let elements: SmallVec<[SymbolicValue; 8]> = src
                    .elements(slot)
                    .iter()
                    .map(|element| ensure_sufficient_stack(|| element.copy_records(src, dst)))
                    .collect();
                SymbolicValue::aggregate(&elements, dst)
            }
            Repr::EnumWithPayload(r) => {
                let (case, payload) = src.payload(r);
                let payload = ensure_sufficient_stack(|| payload.copy_records(src, dst));
                SymbolicValue::enum_with_payload(case, payload, dst)
            }
            Repr::DerivedAddress(slot) => {
                let record = src.address(slot);
                SymbolicValue::address_with_path(ObjectId::new(record[0]), &record[1..], dst)
            }
        }
    }
}
