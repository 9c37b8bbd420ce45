//! Gridnav: a 3D navigation lattice of cost-carrying nodes and weighted links.
//!
//! This is the facade crate that re-exports the public API of the gridnav
//! sub-crates. Most users only need this one dependency.
//!
//! # Quick start
//!
//! ```rust
//! use gridnav::prelude::*;
//!
//! // A 4x4x2 grid with two linked nodes.
//! let mut grid = NavGrid::with_dimensions(4, 4, 2).unwrap();
//! let nodes = DefaultNodeFactory::new("floor");
//! let stairs = DefaultLinkFactory::new("stairs").with_properties(LinkProperties { cost: 2.5 });
//!
//! let a = grid.place_node(Cell::new(1, 1, 0), &nodes).unwrap();
//! let b = grid.place_node(Cell::new(1, 1, 1), &nodes).unwrap();
//! grid.connect_both(a, b, &stairs).unwrap();
//! assert_eq!(grid.link_count(), 2);
//!
//! // Shrinking to a single floor evicts `b` and both stairs links.
//! let report = grid.set_dimensions(4, 4, 1).unwrap();
//! assert_eq!(report.evicted, 1);
//! assert_eq!(report.links_removed, 2);
//! assert!(grid.node(a).unwrap().links().is_empty());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridnav-core` | Cells, dimensions, handles, presets, behaviour hooks |
//! | [`arena`] | `gridnav-arena` | Generational slab storage |
//! | [`lattice`] | `gridnav-lattice` | Lattice, nodes, links, factories, selections |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`gridnav-core`).
///
/// Cell coordinates, [`types::Dimensions`], node and link handles, cost
/// presets, and the [`types::NodeBehavior`] / [`types::LinkBehavior`] hooks.
pub use gridnav_core as types;

/// Generational slab storage (`gridnav-arena`).
pub use gridnav_arena as arena;

/// The navigation lattice (`gridnav-lattice`).
///
/// [`lattice::NavGrid`] owns cells, nodes and links and keeps them
/// consistent across removal and resize. [`lattice::SharedNavGrid`] wraps it
/// for use from several threads.
pub use gridnav_lattice as lattice;

/// Common imports for typical gridnav usage.
///
/// ```rust
/// use gridnav::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gridnav_core::{
        AgentId, Cell, Dimensions, LatticeId, LinkBehavior, LinkId, LinkProperties,
        NodeBehavior, NodeId, NodeProperties,
    };

    // Lattice
    pub use gridnav_lattice::{
        CellRegion, CellSelection, CostPolicy, DefaultLinkFactory, DefaultNodeFactory,
        FactoryMix, LatticeConfig, Link, LinkFactory, NavGrid, Node, NodeFactory,
        ResizeReport, SharedNavGrid,
    };

    // Errors
    pub use gridnav_core::DimensionError;
    pub use gridnav_lattice::LatticeError;
}
