//! Nodes: the occupants of lattice cells.

use std::sync::Arc;

use gridnav_core::{
    inert_node_behavior, Cell, LatticeId, LinkId, NodeBehavior, NodeProperties,
    SharedNodeBehavior,
};
use smallvec::SmallVec;

/// Incident link list. Six inline slots cover a face-connected lattice
/// without spilling to the heap.
pub type LinkList = SmallVec<[LinkId; 6]>;

/// A traversable cell occupant.
///
/// A node records where it lives (`lattice` + `cell`), its traversal
/// costs, whether it is enabled, and the links that touch it. The link
/// list is maintained by the owning [`NavGrid`](crate::NavGrid): every
/// entry names a link whose `from` or `to` is this node, and a self-link
/// appears once.
///
/// Location and links are stamped when the node is placed into a grid, so
/// a node built for one cell can be placed elsewhere and will report its
/// real position.
#[derive(Clone, Debug)]
pub struct Node {
    lattice: LatticeId,
    cell: Cell,
    /// Cost charged when an agent enters this node.
    pub entry_cost: f32,
    /// Cost charged when an agent leaves this node.
    pub exit_cost: f32,
    /// Disabled nodes stay in the lattice but should be skipped by
    /// traversal.
    pub enabled: bool,
    links: LinkList,
    factory: Option<Arc<str>>,
    behavior: SharedNodeBehavior,
}

impl Node {
    /// Node at `cell` of `lattice` with zero costs, enabled, no links and
    /// inert behaviour.
    pub fn new(lattice: LatticeId, cell: Cell) -> Self {
        Self::from_properties(lattice, cell, &NodeProperties::default())
    }

    /// Node whose attributes are copied from a preset.
    pub fn from_properties(lattice: LatticeId, cell: Cell, properties: &NodeProperties) -> Self {
        Self {
            lattice,
            cell,
            entry_cost: properties.entry_cost,
            exit_cost: properties.exit_cost,
            enabled: properties.enabled,
            links: LinkList::new(),
            factory: None,
            behavior: inert_node_behavior(),
        }
    }

    /// Replace the behaviour hook object.
    pub fn with_behavior(mut self, behavior: SharedNodeBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Record the name of the factory that built this node.
    pub fn with_factory_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.factory = Some(name.into());
        self
    }

    /// Lattice this node belongs to.
    pub fn lattice(&self) -> LatticeId {
        self.lattice
    }

    /// Cell this node occupies.
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Whether traversal may use this node.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Incident links, in attachment order.
    pub fn links(&self) -> &[LinkId] {
        &self.links
    }

    /// Name of the creating factory, if one was recorded.
    pub fn factory_name(&self) -> Option<&str> {
        self.factory.as_deref()
    }

    pub(crate) fn factory_key(&self) -> Option<&Arc<str>> {
        self.factory.as_ref()
    }

    /// Traversal hooks for this node.
    pub fn behavior(&self) -> &dyn NodeBehavior {
        self.behavior.as_ref()
    }

    /// Shared handle to the traversal hooks.
    pub fn shared_behavior(&self) -> &SharedNodeBehavior {
        &self.behavior
    }

    /// Stamp the placement target and drop any stale link list.
    pub(crate) fn place(&mut self, lattice: LatticeId, cell: Cell) {
        self.lattice = lattice;
        self.cell = cell;
        self.links.clear();
    }

    pub(crate) fn attach_link(&mut self, link: LinkId) {
        self.links.push(link);
    }

    /// Remove `link` from the list. Returns `false` if it was not there.
    pub(crate) fn detach_link(&mut self, link: LinkId) -> bool {
        match self.links.iter().position(|&l| l == link) {
            Some(pos) => {
                self.links.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn take_links(&mut self) -> LinkList {
        std::mem::take(&mut self.links)
    }
}
