//! Error types for grid construction and mutation.

use gridnav_arena::ArenaError;
use gridnav_core::{DimensionError, LinkId, NodeId};
use thiserror::Error;

use crate::config::CostPolicy;

/// Errors arising from building or mutating a [`NavGrid`](crate::NavGrid).
///
/// Out-of-range cell lookups are not errors: they return `None` or `false`
/// so that loops over every cell never have to handle a `Result`.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LatticeError {
    /// Requested dimensions are not a valid lattice shape.
    #[error(transparent)]
    Dimensions(#[from] DimensionError),
    /// Requested dimensions exceed the configured cell budget.
    #[error("lattice of {requested} cells exceeds the configured maximum of {max}")]
    TooManyCells {
        /// Cell count of the rejected shape.
        requested: usize,
        /// Configured `max_cells`.
        max: usize,
    },
    /// Node or link storage is full.
    #[error(transparent)]
    Arena(#[from] ArenaError),
    /// A node handle does not resolve to a live node in this grid.
    #[error("unknown or removed node {node}")]
    UnknownNode {
        /// The dead handle.
        node: NodeId,
    },
    /// A link handle does not resolve to a live link in this grid.
    #[error("unknown or removed link {link}")]
    UnknownLink {
        /// The dead handle.
        link: LinkId,
    },
    /// A link cost was rejected by the grid's [`CostPolicy`].
    #[error("link cost {cost} rejected by the {policy:?} cost policy")]
    InvalidCost {
        /// The rejected cost.
        cost: f32,
        /// The policy in force.
        policy: CostPolicy,
    },
    /// A writer panicked while holding a
    /// [`SharedNavGrid`](crate::SharedNavGrid) lock; the grid may be
    /// half-updated and is no longer handed out.
    #[error("navigation grid lock poisoned by a panicking writer")]
    Poisoned,
    /// A [`LatticeConfig`](crate::LatticeConfig) field is out of range.
    #[error("invalid lattice configuration: {reason}")]
    InvalidConfig {
        /// What went wrong.
        reason: String,
    },
}
