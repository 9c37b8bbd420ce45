//! Generational slab allocator.
//!
//! [`Slab`] stores values in a `Vec` of slots. Removing a value leaves the
//! slot vacant, bumps its generation and pushes its index on a free list;
//! the next insert reuses the most recently freed slot.

use std::fmt;
use std::marker::PhantomData;

use crate::error::ArenaError;
use crate::key::SlotKey;

/// A single storage slot.
#[derive(Clone, Debug)]
struct Slot<T> {
    /// Generation of the current (or next) occupant.
    generation: u32,
    value: Option<T>,
}

/// Generational slab keyed by `K`.
///
/// Lookups are O(1): the key's index selects the slot, and the key's
/// generation must match the slot's for the value to be visible.
pub struct Slab<K, T> {
    slots: Vec<Slot<T>>,
    /// Indices of vacant slots available for reuse.
    free_list: Vec<u32>,
    live: usize,
    limit: u32,
    _key: PhantomData<fn() -> K>,
}

impl<K: SlotKey, T> Slab<K, T> {
    /// Create an empty slab addressing up to `u32::MAX` slots.
    pub fn new() -> Self {
        Self::with_limit(u32::MAX)
    }

    /// Create an empty slab that refuses to grow past `limit` slots.
    pub fn with_limit(limit: u32) -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            live: 0,
            limit,
            _key: PhantomData,
        }
    }

    /// Store `value` and return its key.
    ///
    /// Vacant slots are reused before the slot vector grows. Fails with
    /// [`ArenaError::CapacityExceeded`] when no slot is vacant and the slab
    /// already holds `limit` slots.
    pub fn insert(&mut self, value: T) -> Result<K, ArenaError> {
        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            debug_assert!(slot.value.is_none(), "free list held an occupied slot");
            slot.value = Some(value);
            self.live += 1;
            return Ok(K::from_parts(index, slot.generation));
        }

        if self.slots.len() >= self.limit as usize {
            return Err(ArenaError::CapacityExceeded {
                live: self.live,
                limit: self.limit,
            });
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            value: Some(value),
        });
        self.live += 1;
        Ok(K::from_parts(index, 0))
    }

    /// Borrow the value for `key`, if it is still live.
    pub fn get(&self, key: K) -> Option<&T> {
        let slot = self.slots.get(key.index() as usize)?;
        if slot.generation != key.generation() {
            return None;
        }
        slot.value.as_ref()
    }

    /// Mutably borrow the value for `key`, if it is still live.
    pub fn get_mut(&mut self, key: K) -> Option<&mut T> {
        let slot = self.slots.get_mut(key.index() as usize)?;
        if slot.generation != key.generation() {
            return None;
        }
        slot.value.as_mut()
    }

    /// Whether `key` refers to a live value.
    pub fn contains(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Remove and return the value for `key`.
    ///
    /// Returns `None` for stale or already-removed keys, so removing the
    /// same key twice is harmless.
    pub fn remove(&mut self, key: K) -> Option<T> {
        let index = key.index();
        let slot = self.slots.get_mut(index as usize)?;
        if slot.generation != key.generation() {
            return None;
        }
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(index);
        self.live -= 1;
        Some(value)
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether the slab holds no live values.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Total slots (live + vacant).
    pub fn total_slots(&self) -> usize {
        self.slots.len()
    }

    /// Number of vacant slots available for reuse.
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Maximum number of slots.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Iterate over live `(key, value)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &T)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.value
                .as_ref()
                .map(|v| (K::from_parts(i as u32, slot.generation), v))
        })
    }

    /// Iterate over live keys in slot order.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Remove every value. Generations are bumped so outstanding keys die.
    pub fn clear(&mut self) {
        self.free_list.clear();
        for (i, slot) in self.slots.iter_mut().enumerate().rev() {
            if slot.value.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free_list.push(i as u32);
        }
        self.live = 0;
    }
}

impl<K: SlotKey, T> Default for Slab<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T: fmt::Debug> fmt::Debug for Slab<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slab")
            .field("live", &self.live)
            .field("total_slots", &self.slots.len())
            .field("free", &self.free_list.len())
            .field("limit", &self.limit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridnav_core::{LinkId, NodeId};
    use proptest::prelude::*;

    #[test]
    fn insert_then_get() {
        let mut slab: Slab<NodeId, &str> = Slab::new();
        let a = slab.insert("a").unwrap();
        let b = slab.insert("b").unwrap();
        assert_eq!(slab.get(a), Some(&"a"));
        assert_eq!(slab.get(b), Some(&"b"));
        assert_eq!(slab.len(), 2);
    }

    #[test]
    fn removed_key_is_dead_after_slot_reuse() {
        let mut slab: Slab<NodeId, u32> = Slab::new();
        let old = slab.insert(1).unwrap();
        assert_eq!(slab.remove(old), Some(1));
        let new = slab.insert(2).unwrap();

        assert_eq!(old.index(), new.index(), "slot should be reused");
        assert_ne!(old, new);
        assert_eq!(slab.get(old), None);
        assert_eq!(slab.get(new), Some(&2));
        assert_eq!(slab.total_slots(), 1);
    }

    #[test]
    fn double_remove_is_harmless() {
        let mut slab: Slab<LinkId, u32> = Slab::new();
        let k = slab.insert(7).unwrap();
        assert_eq!(slab.remove(k), Some(7));
        assert_eq!(slab.remove(k), None);
        assert_eq!(slab.free_count(), 1);
        assert!(slab.is_empty());
    }

    #[test]
    fn limit_is_enforced_but_reuse_still_works() {
        let mut slab: Slab<NodeId, u8> = Slab::with_limit(2);
        let a = slab.insert(0).unwrap();
        slab.insert(1).unwrap();
        assert_eq!(
            slab.insert(2),
            Err(ArenaError::CapacityExceeded { live: 2, limit: 2 })
        );
        slab.remove(a);
        assert!(slab.insert(3).is_ok());
    }

    #[test]
    fn clear_kills_outstanding_keys() {
        let mut slab: Slab<NodeId, u8> = Slab::new();
        let a = slab.insert(0).unwrap();
        let b = slab.insert(1).unwrap();
        slab.clear();
        assert!(!slab.contains(a));
        assert!(!slab.contains(b));
        assert_eq!(slab.free_count(), 2);
        let c = slab.insert(9).unwrap();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn iter_skips_vacant_slots() {
        let mut slab: Slab<NodeId, u8> = Slab::new();
        let a = slab.insert(0).unwrap();
        let b = slab.insert(1).unwrap();
        let c = slab.insert(2).unwrap();
        slab.remove(b);
        let keys: Vec<_> = slab.keys().collect();
        assert_eq!(keys, vec![a, c]);
    }

    proptest! {
        #[test]
        fn live_count_tracks_operations(ops in proptest::collection::vec(any::<bool>(), 1..64)) {
            let mut slab: Slab<NodeId, usize> = Slab::new();
            let mut keys = Vec::new();
            for (i, insert) in ops.into_iter().enumerate() {
                if insert || keys.is_empty() {
                    keys.push(slab.insert(i).unwrap());
                } else {
                    let k = keys.swap_remove(i % keys.len());
                    prop_assert!(slab.remove(k).is_some());
                }
                prop_assert_eq!(slab.len(), keys.len());
                prop_assert_eq!(slab.total_slots(), slab.len() + slab.free_count());
            }
            for k in keys {
                prop_assert!(slab.contains(k));
            }
        }
    }
}
