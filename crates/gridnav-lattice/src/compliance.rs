//! Grid invariant checks shared by the unit tests.
//!
//! Each helper walks the whole grid through its public API and panics with
//! a description of the first violation found.

use std::collections::HashSet;

use crate::grid::NavGrid;

/// Every occupied cell resolves to a live node stamped with that cell and
/// this grid's id, and no node lives outside the lattice.
pub fn assert_placement_consistent(grid: &NavGrid) {
    let mut placed = 0;
    for (cell, id) in grid.lattice().occupied() {
        let node = grid
            .node(id)
            .unwrap_or_else(|| panic!("cell {cell} holds dead node {id}"));
        assert_eq!(node.cell(), cell, "node {id} stamped with wrong cell");
        assert_eq!(node.lattice(), grid.id(), "node {id} stamped with wrong lattice");
        placed += 1;
    }
    assert_eq!(
        placed,
        grid.node_count(),
        "node arena holds nodes that are not placed in any cell"
    );
}

/// Every node's link list names live links that touch it, once each, and
/// every live link is listed by both endpoints.
pub fn assert_links_consistent(grid: &NavGrid) {
    for (_, id, node) in grid.nodes() {
        let mut seen = HashSet::new();
        for &link_id in node.links() {
            assert!(seen.insert(link_id), "node {id} lists link {link_id} twice");
            let link = grid
                .link(link_id)
                .unwrap_or_else(|| panic!("node {id} lists dead link {link_id}"));
            assert!(link.touches(id), "node {id} lists foreign link {link_id}");
        }
    }

    for (link_id, link) in grid.links() {
        for endpoint in [link.from_node(), link.to_node()] {
            let node = grid
                .node(endpoint)
                .unwrap_or_else(|| panic!("link {link_id} references dead node {endpoint}"));
            assert!(
                node.links().contains(&link_id),
                "link {link_id} missing from endpoint {endpoint}"
            );
        }
    }
}

/// All grid invariants.
pub fn assert_grid_consistent(grid: &NavGrid) {
    assert_eq!(
        grid.lattice().slots().len(),
        grid.dimensions().cell_count(),
        "slot count does not match dimensions"
    );
    assert_placement_consistent(grid);
    assert_links_consistent(grid);
}
