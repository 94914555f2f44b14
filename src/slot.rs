/*!
# Slot Representation

Every vertex of a graph lives in a *slot*: a stable integer index into the graph's
storage that is independent of the vertex key chosen by the caller.
We choose `Slot = u32` as almost all use-cases involve less than `2^32` vertices,
which keeps per-vertex bookkeeping (in-degrees, edge destinations, scratch state) compact.

Slots are recycled: once a vertex is removed, its slot is pushed onto an availability
stack and handed out again before the storage grows.
*/

use std::num::NonZero;

/// Slots can be any unsigned integer from `0` to `Slot::MAX - 1`
pub type Slot = u32;

/// Slot-Value that is considered invalid
pub const INVALID_SLOT: Slot = Slot::MAX;

/// There can be at most `2^32 - 1` vertices in a graph!
pub type NumVertices = u32;

/// Parent slot stored as `NonZero<Slot>` so that `Option<OptionalSlot>` has the size of
/// a `Slot`. The value is kept XOR-ed with [`INVALID_SLOT`], which thus maps to zero and
/// can never be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalSlot(NonZero<Slot>);

impl OptionalSlot {
    /// Returns `None` for [`INVALID_SLOT`] and the packed slot otherwise
    pub const fn new(s: Slot) -> Option<Self> {
        match NonZero::new(s ^ INVALID_SLOT) {
            Some(packed) => Some(OptionalSlot(packed)),
            None => None,
        }
    }

    /// Unpacks the slot
    pub const fn get(&self) -> Slot {
        self.0.get() ^ INVALID_SLOT
    }
}

/// Converts a slot into an index into per-slot storage
#[inline]
pub(crate) const fn idx(s: Slot) -> usize {
    s as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_slot_roundtrips_valid_slots() {
        for s in [0, 1, 17, INVALID_SLOT - 1] {
            assert_eq!(OptionalSlot::new(s).map(|o| o.get()), Some(s));
        }
        assert!(OptionalSlot::new(INVALID_SLOT).is_none());
    }

    #[test]
    fn optional_slot_is_niche_packed() {
        assert_eq!(
            std::mem::size_of::<Option<OptionalSlot>>(),
            std::mem::size_of::<Slot>()
        );
    }
}
