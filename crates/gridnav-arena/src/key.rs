//! Typed keys for slab slots.

use gridnav_core::{LinkId, NodeId};

/// A handle type that can address a [`Slab`](crate::Slab) slot.
///
/// Implementors are plain `(index, generation)` pairs. Keeping the key
/// type as a parameter stops a `LinkId` from being used against the node
/// slab by accident.
pub trait SlotKey: Copy + Eq {
    /// Build a key from a slot index and generation.
    fn from_parts(index: u32, generation: u32) -> Self;

    /// Slot index.
    fn index(self) -> u32;

    /// Slot generation the key was issued for.
    fn generation(self) -> u32;
}

impl SlotKey for NodeId {
    fn from_parts(index: u32, generation: u32) -> Self {
        NodeId::from_parts(index, generation)
    }

    fn index(self) -> u32 {
        NodeId::index(self)
    }

    fn generation(self) -> u32 {
        NodeId::generation(self)
    }
}

impl SlotKey for LinkId {
    fn from_parts(index: u32, generation: u32) -> Self {
        LinkId::from_parts(index, generation)
    }

    fn index(self) -> u32 {
        LinkId::index(self)
    }

    fn generation(self) -> u32 {
        LinkId::generation(self)
    }
}
