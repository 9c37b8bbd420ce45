//! The navigation grid: a lattice plus the nodes and links placed in it.
//!
//! [`NavGrid`] owns three stores:
//!
//! ```text
//! NavGrid
//! ├── SpatialLattice        cell -> Option<NodeId>
//! ├── Slab<NodeId, Node>    node records (cell, costs, incident links)
//! └── Slab<LinkId, Link>    link records (from, to, cost)
//! ```
//!
//! Every path that takes a node out of the lattice (explicit removal,
//! overwrite, clear, resize eviction) goes through one cascade that
//! destroys the node's incident links and detaches them from the opposite
//! endpoints. Nothing is left to drop order.

use gridnav_arena::Slab;
use gridnav_core::{Cell, Dimensions, LatticeId, LinkId, NodeId};
use log::{debug, trace, warn};

use crate::config::{CostPolicy, LatticeConfig};
use crate::error::LatticeError;
use crate::factory::{LinkFactory, NodeFactory};
use crate::lattice::SpatialLattice;
use crate::link::Link;
use crate::node::Node;

/// Outcome of a resize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeReport {
    /// Dimensions before the resize.
    pub old: Dimensions,
    /// Dimensions after the resize.
    pub new: Dimensions,
    /// Nodes kept because their cell is inside both extents.
    pub preserved: usize,
    /// Nodes destroyed because their cell fell outside the new extents.
    pub evicted: usize,
    /// Links destroyed along with the evicted nodes.
    pub links_removed: usize,
}

/// A 3D navigation lattice with its nodes and links.
///
/// Single-writer: mutation takes `&mut self`. Wrap the grid in a
/// [`SharedNavGrid`](crate::SharedNavGrid) to share it between threads
/// under one lock.
#[derive(Debug)]
pub struct NavGrid {
    id: LatticeId,
    lattice: SpatialLattice,
    nodes: Slab<NodeId, Node>,
    links: Slab<LinkId, Link>,
    max_cells: usize,
    cost_policy: CostPolicy,
}

// Compile-time assertion: NavGrid must be Send + Sync.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<NavGrid>();
};

impl NavGrid {
    /// Build an empty grid from a validated config.
    pub fn new(config: LatticeConfig) -> Result<Self, LatticeError> {
        config.validate()?;
        let id = LatticeId::next();
        debug!(
            "creating lattice {id} with dimensions {} (max {} cells)",
            config.dimensions, config.max_cells
        );
        Ok(Self {
            id,
            lattice: SpatialLattice::new(config.dimensions),
            // validate() caps max_cells at u32::MAX.
            nodes: Slab::with_limit(config.max_cells as u32),
            links: Slab::new(),
            max_cells: config.max_cells,
            cost_policy: config.cost_policy,
        })
    }

    /// Build an empty grid of the given shape with default limits.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridnav_core::Cell;
    /// use gridnav_lattice::{DefaultLinkFactory, DefaultNodeFactory, NavGrid};
    ///
    /// let mut grid = NavGrid::with_dimensions(4, 1, 1).unwrap();
    /// let nodes = DefaultNodeFactory::default();
    /// let a = grid.place_node(Cell::new(0, 0, 0), &nodes).unwrap();
    /// let b = grid.place_node(Cell::new(1, 0, 0), &nodes).unwrap();
    /// grid.connect(a, b, &DefaultLinkFactory::default()).unwrap();
    ///
    /// grid.remove_node(b);
    /// assert!(grid.node(a).unwrap().links().is_empty());
    /// ```
    pub fn with_dimensions(x: i32, y: i32, z: i32) -> Result<Self, LatticeError> {
        let dimensions = Dimensions::new(x, y, z)?;
        Self::new(LatticeConfig::with_dimensions(dimensions))
    }

    /// This grid's lattice id. Every node placed here carries it.
    pub fn id(&self) -> LatticeId {
        self.id
    }

    /// Current extents.
    pub fn dimensions(&self) -> Dimensions {
        self.lattice.dimensions()
    }

    /// Cell placement storage.
    pub fn lattice(&self) -> &SpatialLattice {
        &self.lattice
    }

    /// Link cost admission rule in force.
    pub fn cost_policy(&self) -> CostPolicy {
        self.cost_policy
    }

    /// Configured cell budget.
    pub fn max_cells(&self) -> usize {
        self.max_cells
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of live links.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    // ── Resize ──────────────────────────────────────────────────

    /// Resize to `(x, y, z)`.
    ///
    /// Fails with [`LatticeError::Dimensions`] if any component is `<= 0`.
    /// See [`resize`](Self::resize) for what happens to existing nodes.
    pub fn set_dimensions(&mut self, x: i32, y: i32, z: i32) -> Result<ResizeReport, LatticeError> {
        self.resize(Dimensions::new(x, y, z)?)
    }

    /// Resize to `dimensions`.
    ///
    /// Nodes whose cell is inside both the old and new extents keep their
    /// identity and cell. Nodes outside the new extents are destroyed with
    /// their links; growing back later does not restore them.
    pub fn resize(&mut self, dimensions: Dimensions) -> Result<ResizeReport, LatticeError> {
        let requested = dimensions.cell_count();
        if requested > self.max_cells {
            return Err(LatticeError::TooManyCells {
                requested,
                max: self.max_cells,
            });
        }

        let old = self.lattice.dimensions();
        let evicted = self.lattice.set_dimensions(dimensions);
        let mut links_removed = 0;
        for &node in &evicted {
            if let Some((_, removed)) = self.destroy_detached(node) {
                links_removed += removed;
            }
        }

        let report = ResizeReport {
            old,
            new: dimensions,
            preserved: self.lattice.occupied_count(),
            evicted: evicted.len(),
            links_removed,
        };
        debug!(
            "lattice {} resized {} -> {}: {} kept, {} evicted, {} links removed",
            self.id, old, dimensions, report.preserved, report.evicted, links_removed
        );
        Ok(report)
    }

    // ── Cell queries ────────────────────────────────────────────

    /// Flat slot index of `cell`, or `None` when out of range.
    pub fn try_get_node_index(&self, cell: Cell) -> Option<usize> {
        self.lattice.try_get_node_index(cell)
    }

    /// Node at `cell`. `None` if out of range or the cell is empty.
    pub fn try_get_node(&self, cell: Cell) -> Option<&Node> {
        self.nodes.get(self.lattice.try_get_node(cell)?)
    }

    /// Handle of the node at `cell`.
    pub fn node_id_at(&self, cell: Cell) -> Option<NodeId> {
        self.lattice.try_get_node(cell)
    }

    /// Live nodes as `(cell, handle, node)`, in flat cell order.
    pub fn nodes(&self) -> impl Iterator<Item = (Cell, NodeId, &Node)> + '_ {
        self.lattice
            .occupied()
            .filter_map(move |(cell, id)| self.nodes.get(id).map(|n| (cell, id, n)))
    }

    // ── Node mutation ───────────────────────────────────────────

    /// Place `node` at `cell`, or clear the cell for `None`.
    ///
    /// Returns `false` without any mutation when `cell` is out of range.
    /// The node is re-stamped with this grid's id and `cell`, and starts
    /// with no links. A node previously at `cell` is destroyed with its
    /// links.
    ///
    /// Node storage holds `max_cells` slots, one per possible cell, so an
    /// in-range write always has room once the previous occupant is gone.
    pub fn try_set_node(&mut self, cell: Cell, node: Option<Node>) -> bool {
        self.set_node(cell, node).is_some()
    }

    /// Build a node for `cell` with `factory` and place it.
    ///
    /// Returns the new handle, or `None` when `cell` is out of range.
    pub fn place_node(&mut self, cell: Cell, factory: &dyn NodeFactory) -> Option<NodeId> {
        self.lattice.try_get_node_index(cell)?;
        let node = factory.create_node(self.id, cell);
        self.set_node(cell, Some(node)).flatten()
    }

    /// Shared body of `try_set_node`/`place_node`: `None` if nothing was
    /// written, otherwise the handle now in the cell.
    ///
    /// The previous occupant is destroyed before the new node is stored, so
    /// its slot is free for reuse and a lattice filled to `max_cells` can
    /// still be overwritten.
    fn set_node(&mut self, cell: Cell, node: Option<Node>) -> Option<Option<NodeId>> {
        if let Some(old) = self.lattice.swap_node(cell, None)? {
            self.destroy_detached(old);
        }
        let Some(mut node) = node else {
            return Some(None);
        };

        node.place(self.id, cell);
        match self.nodes.insert(node) {
            Ok(id) => {
                self.lattice.try_set_node(cell, Some(id));
                Some(Some(id))
            }
            Err(err) => {
                warn!("lattice {}: cannot place node at {cell}: {err}", self.id);
                None
            }
        }
    }

    /// Borrow a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Mutably borrow a node to edit its costs or enabled flag.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Whether `id` is a live node in this grid.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains(id)
    }

    /// Remove a node, clear its cell, and destroy every link touching it.
    ///
    /// Returns the removed node with an empty link list, or `None` for a
    /// dead handle.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        let cell = self.nodes.get(id)?.cell();
        self.lattice.clear_if(cell, id);
        self.destroy_detached(id).map(|(node, _)| node)
    }

    /// Remove every node and link. Dimensions are unchanged.
    pub fn clear(&mut self) {
        let cleared = self.lattice.clear();
        self.nodes.clear();
        self.links.clear();
        debug!("lattice {} cleared ({} nodes)", self.id, cleared.len());
    }

    /// Destroy a node that is no longer referenced by the lattice.
    ///
    /// The node leaves the arena before its links are walked, so the walk
    /// iterates an owned list and never the list being edited. Each link is
    /// removed from the link arena once; a link id that is already gone is
    /// skipped, which makes duplicate entries and self-links harmless.
    fn destroy_detached(&mut self, id: NodeId) -> Option<(Node, usize)> {
        let mut node = self.nodes.remove(id)?;
        let incident = node.take_links();

        let mut removed = 0;
        for link_id in incident {
            let Some(link) = self.links.remove(link_id) else {
                continue;
            };
            removed += 1;
            match link.other_endpoint(id) {
                Some(other) if other != id => {
                    if let Some(peer) = self.nodes.get_mut(other) {
                        peer.detach_link(link_id);
                    }
                    trace!("detached link {link_id} from {other}");
                }
                _ => {}
            }
        }

        debug!(
            "lattice {}: destroyed node {id} at {} with {removed} links",
            self.id,
            node.cell()
        );
        Some((node, removed))
    }

    // ── Links ───────────────────────────────────────────────────

    /// Build a link `from -> to` with `factory` and insert it.
    pub fn connect(
        &mut self,
        from: NodeId,
        to: NodeId,
        factory: &dyn LinkFactory,
    ) -> Result<LinkId, LatticeError> {
        self.require_node(from)?;
        self.require_node(to)?;
        self.insert_link(factory.create_link(from, to))
    }

    /// Build links both ways between `a` and `b`.
    pub fn connect_both(
        &mut self,
        a: NodeId,
        b: NodeId,
        factory: &dyn LinkFactory,
    ) -> Result<(LinkId, LinkId), LatticeError> {
        let forward = self.connect(a, b, factory)?;
        match self.connect(b, a, factory) {
            Ok(back) => Ok((forward, back)),
            Err(err) => {
                self.disconnect(forward);
                Err(err)
            }
        }
    }

    /// Insert a prebuilt link.
    ///
    /// Both endpoints must be live nodes of this grid and the cost must
    /// pass the grid's [`CostPolicy`]. The link is appended to the link
    /// list of each endpoint; a self-link is listed once.
    pub fn insert_link(&mut self, link: Link) -> Result<LinkId, LatticeError> {
        let (from, to) = (link.from_node(), link.to_node());
        self.require_node(from)?;
        self.require_node(to)?;
        self.check_cost(link.cost())?;

        let id = self.links.insert(link)?;
        if let Some(node) = self.nodes.get_mut(from) {
            node.attach_link(id);
        }
        if to != from {
            if let Some(node) = self.nodes.get_mut(to) {
                node.attach_link(id);
            }
        }
        trace!("lattice {}: link {id} {from} -> {to}", self.id);
        Ok(id)
    }

    /// Remove a link and detach it from both endpoints.
    pub fn disconnect(&mut self, id: LinkId) -> Option<Link> {
        let link = self.links.remove(id)?;
        if let Some(node) = self.nodes.get_mut(link.from_node()) {
            node.detach_link(id);
        }
        if !link.is_self_link() {
            if let Some(node) = self.nodes.get_mut(link.to_node()) {
                node.detach_link(id);
            }
        }
        Some(link)
    }

    /// Borrow a link.
    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(id)
    }

    /// Change a link's cost, subject to the grid's [`CostPolicy`].
    pub fn set_link_cost(&mut self, id: LinkId, cost: f32) -> Result<(), LatticeError> {
        self.check_cost(cost)?;
        let link = self
            .links
            .get_mut(id)
            .ok_or(LatticeError::UnknownLink { link: id })?;
        link.set_cost(cost);
        Ok(())
    }

    /// Links touching `node`, in attachment order.
    pub fn links_of(&self, node: NodeId) -> impl Iterator<Item = (LinkId, &Link)> + '_ {
        self.nodes
            .get(node)
            .map(|n| n.links())
            .unwrap_or(&[])
            .iter()
            .filter_map(move |&id| self.links.get(id).map(|l| (id, l)))
    }

    /// Links leaving `node` (including self-links).
    pub fn outgoing(&self, node: NodeId) -> impl Iterator<Item = (LinkId, &Link)> + '_ {
        self.links_of(node)
            .filter(move |(_, l)| l.from_node() == node)
    }

    /// Links arriving at `node` (including self-links).
    pub fn incoming(&self, node: NodeId) -> impl Iterator<Item = (LinkId, &Link)> + '_ {
        self.links_of(node).filter(move |(_, l)| l.to_node() == node)
    }

    /// First link `from -> to`, if any.
    pub fn find_link(&self, from: NodeId, to: NodeId) -> Option<LinkId> {
        self.outgoing(from)
            .find(|(_, l)| l.to_node() == to)
            .map(|(id, _)| id)
    }

    /// Every live link in storage order.
    pub fn links(&self) -> impl Iterator<Item = (LinkId, &Link)> + '_ {
        self.links.iter()
    }

    fn require_node(&self, node: NodeId) -> Result<(), LatticeError> {
        if self.nodes.contains(node) {
            Ok(())
        } else {
            Err(LatticeError::UnknownNode { node })
        }
    }

    fn check_cost(&self, cost: f32) -> Result<(), LatticeError> {
        if self.cost_policy.accepts(cost) {
            return Ok(());
        }
        warn!(
            "lattice {}: rejected link cost {cost} under {:?} policy",
            self.id, self.cost_policy
        );
        Err(LatticeError::InvalidCost {
            cost,
            policy: self.cost_policy,
        })
    }
}
