//! Benchmark profiles for the gridnav lattice.
//!
//! - [`dense_profile`]: every cell filled, face neighbours linked both ways
//! - [`sparse_profile`]: every other cell filled, no links

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridnav_core::Cell;
use gridnav_lattice::{DefaultLinkFactory, DefaultNodeFactory, LatticeError, NavGrid};

const FACE_OFFSETS: [(i32, i32, i32); 3] = [(1, 0, 0), (0, 1, 0), (0, 0, 1)];

/// A `side`^3 grid with a node in every cell and two-way links between
/// face-adjacent nodes.
///
/// A 32^3 profile holds 32K nodes and ~190K links.
pub fn dense_profile(side: i32) -> Result<NavGrid, LatticeError> {
    let mut grid = NavGrid::with_dimensions(side, side, side)?;
    let nodes = DefaultNodeFactory::new("bench");
    let links = DefaultLinkFactory::new("bench");

    let cells: Vec<Cell> = grid.lattice().bounds().iter().collect();
    for &cell in &cells {
        grid.place_node(cell, &nodes);
    }
    for &cell in &cells {
        let Some(a) = grid.node_id_at(cell) else {
            continue;
        };
        for (dx, dy, dz) in FACE_OFFSETS {
            if let Some(b) = grid.node_id_at(cell.offset(dx, dy, dz)) {
                grid.connect_both(a, b, &links)?;
            }
        }
    }
    Ok(grid)
}

/// A `side`^3 grid with nodes on a checkerboard and no links.
pub fn sparse_profile(side: i32) -> Result<NavGrid, LatticeError> {
    let mut grid = NavGrid::with_dimensions(side, side, side)?;
    let nodes = DefaultNodeFactory::new("bench");
    let cells: Vec<Cell> = grid
        .lattice()
        .bounds()
        .iter()
        .filter(|c| (c.x + c.y + c.z) % 2 == 0)
        .collect();
    for cell in cells {
        grid.place_node(cell, &nodes);
    }
    Ok(grid)
}
