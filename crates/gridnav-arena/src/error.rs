//! Arena-specific error types.

use thiserror::Error;

/// Errors that can occur during slab operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArenaError {
    /// Every slot up to the slab's limit is occupied.
    #[error("slab capacity exceeded: {live} live entries, limit {limit}")]
    CapacityExceeded {
        /// Number of live entries at the time of the failed insert.
        live: usize,
        /// Maximum number of slots the slab may hold.
        limit: u32,
    },
}
