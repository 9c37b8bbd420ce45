//! Behaviour hooks fired by a traversal system.
//!
//! The lattice stores a behaviour object on every node and link but never
//! calls it. A pathfinder or movement system that walks the lattice calls
//! these hooks as agents cross links and enter or leave nodes. All methods
//! default to no-ops, so an implementation overrides only what it needs.

use std::fmt;
use std::sync::Arc;

use crate::id::{AgentId, LinkId, NodeId};

/// Per-node traversal hooks.
///
/// `Send + Sync` is required so a grid holding these objects can be shared
/// behind a single lock across threads.
pub trait NodeBehavior: fmt::Debug + Send + Sync {
    /// An agent arrived at `node`, through `via` if it came over a link.
    fn on_enter(&self, agent: AgentId, node: NodeId, via: Option<LinkId>) {
        let _ = (agent, node, via);
    }

    /// An agent is leaving `node`, through `via` if it leaves over a link.
    fn on_exit(&self, agent: AgentId, node: NodeId, via: Option<LinkId>) {
        let _ = (agent, node, via);
    }
}

/// Per-link traversal hook.
pub trait LinkBehavior: fmt::Debug + Send + Sync {
    /// An agent is crossing `link`.
    fn on_use(&self, agent: AgentId, link: LinkId) {
        let _ = (agent, link);
    }
}

/// Behaviour that does nothing. Used when no custom behaviour is supplied.
#[derive(Clone, Copy, Debug, Default)]
pub struct Inert;

impl NodeBehavior for Inert {}

impl LinkBehavior for Inert {}

/// Shared handle to a node behaviour.
pub type SharedNodeBehavior = Arc<dyn NodeBehavior>;

/// Shared handle to a link behaviour.
pub type SharedLinkBehavior = Arc<dyn LinkBehavior>;

/// The shared no-op node behaviour.
pub fn inert_node_behavior() -> SharedNodeBehavior {
    Arc::new(Inert)
}

/// The shared no-op link behaviour.
pub fn inert_link_behavior() -> SharedLinkBehavior {
    Arc::new(Inert)
}
