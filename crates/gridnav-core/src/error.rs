//! Error types for lattice shape validation.

use thiserror::Error;

/// Errors arising from constructing [`Dimensions`](crate::Dimensions).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DimensionError {
    /// At least one component is zero or negative.
    #[error("lattice dimensions must be positive, got ({x}, {y}, {z})")]
    NonPositive {
        /// Requested X extent.
        x: i32,
        /// Requested Y extent.
        y: i32,
        /// Requested Z extent.
        z: i32,
    },
    /// `x * y * z` does not fit in `usize`.
    #[error("lattice dimensions ({x}, {y}, {z}) overflow the addressable cell count")]
    TooManyCells {
        /// Requested X extent.
        x: i32,
        /// Requested Y extent.
        y: i32,
        /// Requested Z extent.
        z: i32,
    },
}
