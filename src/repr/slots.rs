/*!
# Vertex Slot Store

Maps caller-chosen vertex keys onto stable [`Slot`]s. Removing a vertex frees its
slot onto an availability stack; the next insertion pops from that stack before the
storage grows, so slot indices stay dense under churn.
*/

use fxhash::FxHashMap;

use super::*;

/// Bidirectional key/slot mapping with slot recycling
#[derive(Clone, Debug)]
pub struct SlotStore<K> {
    index: FxHashMap<K, Slot>,
    keys: Vec<Option<K>>,
    available: Vec<Slot>,
}

impl<K> Default for SlotStore<K> {
    fn default() -> Self {
        Self {
            index: FxHashMap::default(),
            keys: Vec::new(),
            available: Vec::new(),
        }
    }
}

impl<K: VertexKey> SlotStore<K> {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots
    pub fn len(&self) -> NumVertices {
        self.index.len() as NumVertices
    }

    /// Returns *true* if no slot is occupied
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of slots ever handed out (occupied or free)
    pub fn capacity(&self) -> usize {
        self.keys.len()
    }

    /// Returns the slot of `key` if it is present
    pub fn get(&self, key: &K) -> Option<Slot> {
        self.index.get(key).copied()
    }

    /// Returns the key stored in `slot` if the slot is occupied
    pub fn key(&self, slot: Slot) -> Option<&K> {
        self.keys.get(idx(slot)).and_then(Option::as_ref)
    }

    /// Returns *true* if `slot` currently holds a vertex
    pub fn is_occupied(&self, slot: Slot) -> bool {
        self.key(slot).is_some()
    }

    /// Iterates over all occupied slots in ascending order
    pub fn occupied(&self) -> impl Iterator<Item = Slot> + '_ {
        self.keys
            .iter()
            .enumerate()
            .filter_map(|(s, k)| k.as_ref().map(|_| s as Slot))
    }

    /// Slots that are free and will be reused, the top of the stack last
    pub fn available(&self) -> &[Slot] {
        &self.available
    }

    /// Inserts `key` and returns its slot together with whether the slot was recycled.
    /// Returns `None` if the key is already present.
    pub fn insert(&mut self, key: K) -> Option<(Slot, bool)> {
        if self.index.contains_key(&key) {
            return None;
        }

        let (slot, reused) = match self.available.pop() {
            Some(slot) => {
                self.keys[idx(slot)] = Some(key.clone());
                (slot, true)
            }
            None => {
                let slot = self.keys.len() as Slot;
                debug_assert!(slot != INVALID_SLOT);
                self.keys.push(Some(key.clone()));
                (slot, false)
            }
        };

        self.index.insert(key, slot);
        Some((slot, reused))
    }

    /// Frees the slot of `key` and pushes it onto the availability stack.
    /// Returns the freed slot or `None` if the key was not present.
    pub fn release(&mut self, key: &K) -> Option<Slot> {
        let slot = self.index.remove(key)?;
        self.keys[idx(slot)] = None;
        self.available.push(slot);
        Some(slot)
    }

    /// Forgets all keys and all free slots
    pub fn clear(&mut self) {
        self.index.clear();
        self.keys.clear();
        self.available.clear();
    }
}
