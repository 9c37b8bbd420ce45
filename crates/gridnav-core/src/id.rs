//! Strongly-typed identifiers for lattices, nodes, links and agents.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Handle to a node record owned by a grid's node arena.
///
/// A handle is a slot index plus the generation of that slot at the time
/// the node was inserted. When a node is removed its slot generation is
/// bumped, so an old handle never resolves to a node placed later in the
/// same slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    /// Build a handle from its raw parts. Arena use only.
    pub fn from_parts(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index within the node arena.
    pub fn index(self) -> u32 {
        self.index
    }

    /// Slot generation this handle was issued for.
    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}v{}", self.index, self.generation)
    }
}

/// Handle to a link record owned by a grid's link arena.
///
/// Same index + generation scheme as [`NodeId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkId {
    index: u32,
    generation: u32,
}

impl LinkId {
    /// Build a handle from its raw parts. Arena use only.
    pub fn from_parts(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index within the link arena.
    pub fn index(self) -> u32 {
        self.index
    }

    /// Slot generation this handle was issued for.
    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "l{}v{}", self.index, self.generation)
    }
}

/// Counter for unique [`LatticeId`] allocation.
static LATTICE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a lattice.
///
/// Nodes carry the id of the lattice they are placed in instead of a
/// pointer back to it. Allocated from a monotonic atomic counter, so two
/// lattices alive in the same process never share an id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LatticeId(u64);

impl LatticeId {
    /// Allocate a fresh, unique lattice id. Thread-safe.
    pub fn next() -> Self {
        Self(LATTICE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for LatticeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a traversing agent in behaviour callbacks.
///
/// The lattice never interprets this value; it is passed through from the
/// traversal system to node and link hooks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u64);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AgentId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
