//! Reusable grid fixtures.
//!
//! - [`grid`]: empty grid of a given shape.
//! - [`fill`]: a node in every cell.
//! - [`connect_face_neighbours`]: two-way links between face-adjacent
//!   nodes, giving the usual 6-connected navigation lattice.
//! - [`walk`]: fire the hooks a traversal system would fire along a path.

use gridnav_core::{AgentId, Cell, NodeId};
use gridnav_lattice::{DefaultLinkFactory, DefaultNodeFactory, LinkFactory, NavGrid};

/// The six face-adjacent offsets.
pub const FACE_OFFSETS: [(i32, i32, i32); 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

/// Empty grid of shape `(x, y, z)` with default limits.
pub fn grid(x: i32, y: i32, z: i32) -> NavGrid {
    NavGrid::with_dimensions(x, y, z).unwrap()
}

/// Place a default node at `cell`, returning its handle.
pub fn place(grid: &mut NavGrid, cell: impl Into<Cell>) -> NodeId {
    grid.place_node(cell.into(), &DefaultNodeFactory::default())
        .unwrap()
}

/// Place a default node in every cell. Returns handles in flat order.
pub fn fill(grid: &mut NavGrid) -> Vec<NodeId> {
    let factory = DefaultNodeFactory::default();
    let cells: Vec<Cell> = grid.lattice().bounds().iter().collect();
    cells
        .into_iter()
        .map(|cell| grid.place_node(cell, &factory).unwrap())
        .collect()
}

/// Link every node to each occupied face neighbour with `factory`.
///
/// Each ordered pair gets one link, so adjacent nodes end up connected
/// both ways. Returns the number of links created.
pub fn connect_face_neighbours_with(grid: &mut NavGrid, factory: &dyn LinkFactory) -> usize {
    let pairs: Vec<(NodeId, NodeId)> = grid
        .nodes()
        .flat_map(|(cell, id, _)| {
            FACE_OFFSETS
                .iter()
                .map(move |&(dx, dy, dz)| (id, cell.offset(dx, dy, dz)))
        })
        .filter_map(|(id, neighbour)| grid.node_id_at(neighbour).map(|n| (id, n)))
        .collect();
    for &(from, to) in &pairs {
        grid.connect(from, to, factory).unwrap();
    }
    pairs.len()
}

/// [`connect_face_neighbours_with`] using the default link factory.
pub fn connect_face_neighbours(grid: &mut NavGrid) -> usize {
    connect_face_neighbours_with(grid, &DefaultLinkFactory::default())
}

/// Move `agent` along `path`, firing the hooks a traversal system would:
/// exit the current node, use the link, enter the next node.
///
/// Panics if consecutive nodes are not linked. Returns the summed cost of
/// the links and the entry/exit costs of the nodes crossed.
pub fn walk(grid: &NavGrid, agent: AgentId, path: &[NodeId]) -> f32 {
    let mut total = 0.0;
    if let Some(&start) = path.first() {
        grid.node(start).unwrap().behavior().on_enter(agent, start, None);
    }
    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let link_id = grid
            .find_link(from, to)
            .unwrap_or_else(|| panic!("no link {from} -> {to}"));
        let link = grid.link(link_id).unwrap();
        let from_node = grid.node(from).unwrap();
        let to_node = grid.node(to).unwrap();

        from_node.behavior().on_exit(agent, from, Some(link_id));
        link.behavior().on_use(agent, link_id);
        to_node.behavior().on_enter(agent, to, Some(link_id));

        total += from_node.exit_cost + link.cost() + to_node.entry_cost;
    }
    total
}
