//! Directed weighted edges between nodes.

use std::sync::Arc;

use gridnav_core::{
    inert_link_behavior, LinkBehavior, LinkProperties, NodeId, SharedLinkBehavior,
};

/// A directed edge from one node to another.
///
/// Links are one-way: a link `a -> b` says nothing about `b -> a`.
/// Bidirectional connectivity takes two links. `from == to` is a valid
/// self-link.
#[derive(Clone, Debug)]
pub struct Link {
    from: NodeId,
    to: NodeId,
    cost: f32,
    factory: Option<Arc<str>>,
    behavior: SharedLinkBehavior,
}

impl Link {
    /// Link `from -> to` with the default cost of 1.0.
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self::from_properties(from, to, &LinkProperties::default())
    }

    /// Link whose cost is copied from a preset.
    pub fn from_properties(from: NodeId, to: NodeId, properties: &LinkProperties) -> Self {
        Self {
            from,
            to,
            cost: properties.cost,
            factory: None,
            behavior: inert_link_behavior(),
        }
    }

    /// Override the traversal cost. Admission is checked when the link is
    /// inserted into a grid.
    pub fn with_cost(mut self, cost: f32) -> Self {
        self.cost = cost;
        self
    }

    /// Replace the behaviour hook object.
    pub fn with_behavior(mut self, behavior: SharedLinkBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Record the name of the factory that built this link.
    pub fn with_factory_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.factory = Some(name.into());
        self
    }

    /// Source node.
    pub fn from_node(&self) -> NodeId {
        self.from
    }

    /// Destination node.
    pub fn to_node(&self) -> NodeId {
        self.to
    }

    /// Traversal cost.
    pub fn cost(&self) -> f32 {
        self.cost
    }

    /// Whether both endpoints are the same node.
    pub fn is_self_link(&self) -> bool {
        self.from == self.to
    }

    /// Whether `node` is either endpoint.
    pub fn touches(&self, node: NodeId) -> bool {
        self.from == node || self.to == node
    }

    /// The endpoint opposite `node`, or `None` if `node` is not an
    /// endpoint. A self-link returns `node` itself.
    pub fn other_endpoint(&self, node: NodeId) -> Option<NodeId> {
        if self.from == node {
            Some(self.to)
        } else if self.to == node {
            Some(self.from)
        } else {
            None
        }
    }

    /// Name of the creating factory, if one was recorded.
    pub fn factory_name(&self) -> Option<&str> {
        self.factory.as_deref()
    }

    /// Traversal hook for this link.
    pub fn behavior(&self) -> &dyn LinkBehavior {
        self.behavior.as_ref()
    }

    pub(crate) fn set_cost(&mut self, cost: f32) {
        self.cost = cost;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(i: u32) -> NodeId {
        NodeId::from_parts(i, 0)
    }

    #[test]
    fn default_cost_is_one() {
        assert_eq!(Link::new(n(0), n(1)).cost(), 1.0);
        assert_eq!(Link::new(n(0), n(1)).with_cost(3.5).cost(), 3.5);
    }

    #[test]
    fn endpoints() {
        let l = Link::new(n(0), n(1));
        assert_eq!(l.other_endpoint(n(0)), Some(n(1)));
        assert_eq!(l.other_endpoint(n(1)), Some(n(0)));
        assert_eq!(l.other_endpoint(n(2)), None);
        assert!(l.touches(n(1)));
        assert!(!l.is_self_link());
    }

    #[test]
    fn self_link_points_back() {
        let l = Link::new(n(4), n(4));
        assert!(l.is_self_link());
        assert_eq!(l.other_endpoint(n(4)), Some(n(4)));
    }
}
