//! Test utilities and mock behaviours for gridnav development.
//!
//! Provides grid builders ([`fixtures`]) and a [`RecordingBehavior`] that
//! logs every hook call, so tests can check that a traversal driver fires
//! the right hooks in the right order.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::Mutex;

use gridnav_core::{AgentId, LinkBehavior, LinkId, NodeBehavior, NodeId};

/// One recorded hook call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HookEvent {
    Enter {
        agent: AgentId,
        node: NodeId,
        via: Option<LinkId>,
    },
    Exit {
        agent: AgentId,
        node: NodeId,
        via: Option<LinkId>,
    },
    Use {
        agent: AgentId,
        link: LinkId,
    },
}

/// Node and link behaviour that appends every call to an in-memory log.
#[derive(Debug, Default)]
pub struct RecordingBehavior {
    events: Mutex<Vec<HookEvent>>,
}

impl RecordingBehavior {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the calls recorded so far.
    pub fn events(&self) -> Vec<HookEvent> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: HookEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl NodeBehavior for RecordingBehavior {
    fn on_enter(&self, agent: AgentId, node: NodeId, via: Option<LinkId>) {
        self.record(HookEvent::Enter { agent, node, via });
    }

    fn on_exit(&self, agent: AgentId, node: NodeId, via: Option<LinkId>) {
        self.record(HookEvent::Exit { agent, node, via });
    }
}

impl LinkBehavior for RecordingBehavior {
    fn on_use(&self, agent: AgentId, link: LinkId) {
        self.record(HookEvent::Use { agent, link });
    }
}
