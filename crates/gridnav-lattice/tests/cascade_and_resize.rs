//! Integration test: node destruction cascades and resize identity rules
//! on fully populated, face-connected grids.

use gridnav_core::{Cell, NodeId};
use gridnav_lattice::{DefaultLinkFactory, LatticeError, NavGrid};
use gridnav_test_utils::fixtures::{connect_face_neighbours, fill, grid, place};

/// Every link in storage is listed by both endpoints, and every id in a
/// node's list points at a live link touching that node.
fn assert_links_symmetric(g: &NavGrid) {
    for (id, link) in g.links() {
        for end in [link.from_node(), link.to_node()] {
            let node = g.node(end).expect("link endpoint must be live");
            assert_eq!(
                node.links().iter().filter(|&&l| l == id).count(),
                1,
                "{id} listed wrongly on {end}"
            );
        }
    }
    for (_, node_id, node) in g.nodes() {
        for &l in node.links() {
            let link = g.link(l).expect("listed link must be live");
            assert!(link.touches(node_id));
        }
    }
}

#[test]
fn removing_middle_of_chain_detaches_both_neighbours() {
    let mut g = grid(3, 1, 1);
    let a = place(&mut g, (0, 0, 0));
    let b = place(&mut g, (1, 0, 0));
    let c = place(&mut g, (2, 0, 0));
    let links = DefaultLinkFactory::default();
    g.connect(a, b, &links).unwrap();
    g.connect(b, c, &links).unwrap();

    let removed = g.remove_node(b).unwrap();
    assert!(removed.links().is_empty());
    assert!(g.node(a).unwrap().links().is_empty());
    assert!(g.node(c).unwrap().links().is_empty());
    assert_eq!(g.link_count(), 0);
    assert_eq!(g.try_get_node(Cell::new(1, 0, 0)).map(|n| n.cell()), None);
}

#[test]
fn self_link_is_destroyed_once() {
    let mut g = grid(1, 1, 1);
    let a = place(&mut g, Cell::ZERO);
    let l = g.connect(a, a, &DefaultLinkFactory::default()).unwrap();
    assert_eq!(g.node(a).unwrap().links(), &[l]);

    assert!(g.remove_node(a).is_some());
    assert_eq!(g.link_count(), 0);
    assert_eq!(g.node_count(), 0);
}

#[test]
fn full_grid_link_count_matches_face_adjacency() {
    let mut g = grid(3, 3, 3);
    fill(&mut g);
    let created = connect_face_neighbours(&mut g);
    // 3 axes * 2 boundaries-per-row * 9 rows, both directions.
    assert_eq!(created, 3 * 2 * 9 * 2);
    assert_eq!(g.link_count(), created);
    assert_links_symmetric(&g);
}

#[test]
fn removing_centre_of_full_grid_drops_its_twelve_links() {
    let mut g = grid(3, 3, 3);
    fill(&mut g);
    let before = connect_face_neighbours(&mut g);
    let centre = g.node_id_at(Cell::new(1, 1, 1)).unwrap();

    g.remove_node(centre);
    assert_eq!(g.link_count(), before - 12);
    assert_eq!(g.node_count(), 26);
    assert_links_symmetric(&g);
}

#[test]
fn shrink_evicts_nodes_and_their_links() {
    let mut g = grid(4, 4, 4);
    fill(&mut g);
    connect_face_neighbours(&mut g);
    let kept: Vec<(Cell, NodeId)> = g
        .nodes()
        .filter(|(c, _, _)| c.x < 2 && c.y < 2 && c.z < 2)
        .map(|(c, id, _)| (c, id))
        .collect();

    let report = g.set_dimensions(2, 2, 2).unwrap();
    assert_eq!(report.preserved, 8);
    assert_eq!(report.evicted, 56);
    assert_eq!(g.node_count(), 8);
    // Only links inside the 2x2x2 corner survive: 3 axes * 4 rows * 2 dirs.
    assert_eq!(g.link_count(), 24);
    for (cell, id) in kept {
        assert_eq!(g.node_id_at(cell), Some(id));
        assert_eq!(g.node(id).unwrap().cell(), cell);
    }
    assert_links_symmetric(&g);
}

#[test]
fn grow_back_after_shrink_leaves_new_cells_empty() {
    let mut g = grid(3, 3, 3);
    fill(&mut g);
    let far = g.node_id_at(Cell::new(2, 2, 2)).unwrap();

    g.set_dimensions(1, 1, 1).unwrap();
    g.set_dimensions(3, 3, 3).unwrap();

    assert_eq!(g.node_count(), 1);
    assert_eq!(g.node_id_at(Cell::new(2, 2, 2)), None);
    assert!(!g.contains_node(far));
}

#[test]
fn multi_axis_resize_keeps_cells_at_their_coordinates() {
    let mut g = grid(4, 2, 2);
    let ids = fill(&mut g);
    let origin = ids[0];
    let inside = g.node_id_at(Cell::new(1, 1, 1)).unwrap();

    let report = g.set_dimensions(2, 3, 3).unwrap();
    assert_eq!(report.preserved, 8);
    assert_eq!(report.evicted, 8);

    assert_eq!(g.node_id_at(Cell::ZERO), Some(origin));
    assert_eq!(g.node_id_at(Cell::new(1, 1, 1)), Some(inside));
    for (cell, _, node) in g.nodes() {
        assert_eq!(node.cell(), cell);
        assert!(cell.x < 2 && cell.y < 2 && cell.z < 2);
    }
}

#[test]
fn failed_resize_leaves_grid_untouched() {
    let mut g = grid(2, 2, 2);
    fill(&mut g);
    assert!(matches!(
        g.set_dimensions(0, 2, 2),
        Err(LatticeError::Dimensions(_))
    ));
    assert_eq!(g.node_count(), 8);
    assert_eq!(g.dimensions().cell_count(), 8);
}

#[test]
fn stale_handles_stay_dead_after_slot_reuse() {
    let mut g = grid(2, 1, 1);
    let a = place(&mut g, (0, 0, 0));
    g.remove_node(a);
    let b = place(&mut g, (1, 0, 0));

    assert_eq!(a.index(), b.index());
    assert!(g.node(a).is_none());
    assert!(matches!(
        g.connect(a, b, &DefaultLinkFactory::default()),
        Err(LatticeError::UnknownNode { node }) if node == a
    ));
}
