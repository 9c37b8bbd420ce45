//! Core types and traits for gridnav spatial lattices.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! vocabulary shared by the rest of the workspace: cell coordinates and
//! lattice dimensions, typed handles, cost presets and the behaviour hook
//! traits a traversal system calls into.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod behavior;
pub mod cell;
pub mod error;
pub mod id;
pub mod properties;

pub use behavior::{
    inert_link_behavior, inert_node_behavior, Inert, LinkBehavior, NodeBehavior,
    SharedLinkBehavior, SharedNodeBehavior,
};
pub use cell::{Cell, Dimensions, CELL_CENTER_OFFSET};
pub use error::DimensionError;
pub use id::{AgentId, LatticeId, LinkId, NodeId};
pub use properties::{LinkProperties, NodeProperties};
