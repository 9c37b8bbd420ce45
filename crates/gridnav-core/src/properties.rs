//! Cost presets shared by factories.
//!
//! A preset is a small bundle of default attribute values. Factories copy
//! them into every node or link they build, so changing a preset affects
//! only records created afterwards.

/// Default traversal costs for new nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeProperties {
    /// Cost charged when an agent enters the node. Default: 0.0.
    pub entry_cost: f32,
    /// Cost charged when an agent leaves the node. Default: 0.0.
    pub exit_cost: f32,
    /// Whether new nodes start enabled. Default: `true`.
    pub enabled: bool,
}

impl Default for NodeProperties {
    fn default() -> Self {
        Self {
            entry_cost: 0.0,
            exit_cost: 0.0,
            enabled: true,
        }
    }
}

/// Default traversal cost for new links.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkProperties {
    /// Cost of traversing the link. Default: 1.0.
    pub cost: f32,
}

impl LinkProperties {
    /// Cost used when nothing else is specified.
    pub const DEFAULT_COST: f32 = 1.0;
}

impl Default for LinkProperties {
    fn default() -> Self {
        Self {
            cost: Self::DEFAULT_COST,
        }
    }
}
