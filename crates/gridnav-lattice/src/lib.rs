//! 3D spatial lattice of navigation nodes and weighted links.
//!
//! The central type is [`NavGrid`]: a box of addressable cells, each
//! optionally holding a [`Node`], with directed [`Link`]s between nodes.
//! It is the substrate a pathfinder runs on; no search algorithm lives
//! here.
//!
//! # Layers
//!
//! - [`SpatialLattice`]: flat cell storage, index arithmetic and
//!   overlap-preserving resize. Tracks handles only.
//! - [`NavGrid`]: owns node and link records in generational slabs and
//!   keeps the lattice, node link lists and link endpoints consistent.
//! - [`NodeFactory`] / [`LinkFactory`]: construction capabilities that
//!   decide presets and behaviour hooks for new records.
//!
//! # Addressing
//!
//! Cell `(x, y, z)` lives at flat index `x + dims.x * (y + dims.y * z)`.
//! Lookups outside the lattice return `None`/`false` rather than an
//! error, so loops over every cell stay branch-light.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod factory;
pub mod grid;
pub mod lattice;
pub mod link;
pub mod node;
pub mod region;
pub mod selection;
pub mod shared;

#[cfg(test)]
pub(crate) mod compliance;

pub use config::{CostPolicy, LatticeConfig};
pub use error::LatticeError;
pub use factory::{
    DefaultLinkFactory, DefaultNodeFactory, FnLinkFactory, FnNodeFactory, LinkFactory,
    NodeFactory,
};
pub use grid::{NavGrid, ResizeReport};
pub use lattice::SpatialLattice;
pub use link::Link;
pub use node::{LinkList, Node};
pub use region::CellRegion;
pub use selection::{select_region, CellSelection, FactoryMix};
pub use shared::SharedNavGrid;
