//! Construction capabilities for nodes and links.
//!
//! A factory is the one place a caller decides what kind of node or link
//! gets built: which cost preset applies and which behaviour object is
//! attached. The grid only ever asks a factory to `create`; it never
//! inspects the factory beyond its [`name`](NodeFactory::name), which is
//! stamped onto every record it builds.

use std::fmt;
use std::sync::Arc;

use gridnav_core::{
    inert_link_behavior, inert_node_behavior, Cell, LatticeId, LinkProperties, NodeId,
    NodeProperties, SharedLinkBehavior, SharedNodeBehavior,
};

use crate::link::Link;
use crate::node::Node;

/// Builds nodes for lattice cells.
pub trait NodeFactory {
    /// Stable, human-readable identifier of this factory.
    fn name(&self) -> &str;

    /// Build a node for `cell` of `lattice`.
    fn create_node(&self, lattice: LatticeId, cell: Cell) -> Node;
}

/// Builds links between existing nodes.
pub trait LinkFactory {
    /// Stable, human-readable identifier of this factory.
    fn name(&self) -> &str;

    /// Build a link `from -> to`.
    fn create_link(&self, from: NodeId, to: NodeId) -> Link;
}

/// Node factory driven by a [`NodeProperties`] preset and an optional
/// shared behaviour.
///
/// ```
/// use gridnav_core::{Cell, LatticeId, NodeProperties};
/// use gridnav_lattice::{DefaultNodeFactory, NodeFactory};
///
/// let mud = DefaultNodeFactory::new("mud").with_properties(NodeProperties {
///     entry_cost: 3.0,
///     ..NodeProperties::default()
/// });
/// let node = mud.create_node(LatticeId::next(), Cell::ZERO);
/// assert_eq!(node.entry_cost, 3.0);
/// assert_eq!(node.factory_name(), Some("mud"));
/// ```
#[derive(Clone, Debug)]
pub struct DefaultNodeFactory {
    name: Arc<str>,
    properties: NodeProperties,
    behavior: SharedNodeBehavior,
}

impl DefaultNodeFactory {
    /// Factory with default properties and inert behaviour.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            properties: NodeProperties::default(),
            behavior: inert_node_behavior(),
        }
    }

    /// Use `properties` for every node built from now on.
    pub fn with_properties(mut self, properties: NodeProperties) -> Self {
        self.properties = properties;
        self
    }

    /// Attach `behavior` to every node built from now on.
    pub fn with_behavior(mut self, behavior: SharedNodeBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Current preset.
    pub fn properties(&self) -> &NodeProperties {
        &self.properties
    }
}

impl Default for DefaultNodeFactory {
    fn default() -> Self {
        Self::new("default")
    }
}

impl NodeFactory for DefaultNodeFactory {
    fn name(&self) -> &str {
        &self.name
    }

    fn create_node(&self, lattice: LatticeId, cell: Cell) -> Node {
        Node::from_properties(lattice, cell, &self.properties)
            .with_behavior(Arc::clone(&self.behavior))
            .with_factory_name(Arc::clone(&self.name))
    }
}

/// Link factory driven by a [`LinkProperties`] preset and an optional
/// shared behaviour.
#[derive(Clone, Debug)]
pub struct DefaultLinkFactory {
    name: Arc<str>,
    properties: LinkProperties,
    behavior: SharedLinkBehavior,
}

impl DefaultLinkFactory {
    /// Factory with the default cost and inert behaviour.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            properties: LinkProperties::default(),
            behavior: inert_link_behavior(),
        }
    }

    /// Use `properties` for every link built from now on.
    pub fn with_properties(mut self, properties: LinkProperties) -> Self {
        self.properties = properties;
        self
    }

    /// Attach `behavior` to every link built from now on.
    pub fn with_behavior(mut self, behavior: SharedLinkBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Current preset.
    pub fn properties(&self) -> &LinkProperties {
        &self.properties
    }
}

impl Default for DefaultLinkFactory {
    fn default() -> Self {
        Self::new("default")
    }
}

impl LinkFactory for DefaultLinkFactory {
    fn name(&self) -> &str {
        &self.name
    }

    fn create_link(&self, from: NodeId, to: NodeId) -> Link {
        Link::from_properties(from, to, &self.properties)
            .with_behavior(Arc::clone(&self.behavior))
            .with_factory_name(Arc::clone(&self.name))
    }
}

/// Node factory backed by a closure.
///
/// For one-off node kinds that do not warrant their own type. The
/// factory's name is stamped onto the node after the closure runs.
pub struct FnNodeFactory<F> {
    name: Arc<str>,
    create: F,
}

impl<F> FnNodeFactory<F>
where
    F: Fn(LatticeId, Cell) -> Node,
{
    /// Wrap `create` under `name`.
    pub fn new(name: impl Into<Arc<str>>, create: F) -> Self {
        Self {
            name: name.into(),
            create,
        }
    }
}

impl<F> NodeFactory for FnNodeFactory<F>
where
    F: Fn(LatticeId, Cell) -> Node,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn create_node(&self, lattice: LatticeId, cell: Cell) -> Node {
        (self.create)(lattice, cell).with_factory_name(Arc::clone(&self.name))
    }
}

impl<F> fmt::Debug for FnNodeFactory<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnNodeFactory")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Link factory backed by a closure.
pub struct FnLinkFactory<F> {
    name: Arc<str>,
    create: F,
}

impl<F> FnLinkFactory<F>
where
    F: Fn(NodeId, NodeId) -> Link,
{
    /// Wrap `create` under `name`.
    pub fn new(name: impl Into<Arc<str>>, create: F) -> Self {
        Self {
            name: name.into(),
            create,
        }
    }
}

impl<F> LinkFactory for FnLinkFactory<F>
where
    F: Fn(NodeId, NodeId) -> Link,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn create_link(&self, from: NodeId, to: NodeId) -> Link {
        (self.create)(from, to).with_factory_name(Arc::clone(&self.name))
    }
}

impl<F> fmt::Debug for FnLinkFactory<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnLinkFactory")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
