//! Grid configuration and link cost policy.

use gridnav_core::Dimensions;

use crate::error::LatticeError;

/// Which link costs a grid accepts.
///
/// Negative costs break the usual shortest-path algorithms, so the default
/// only admits finite, non-negative values. Hosts that run a pathfinder
/// able to cope with negative edges can relax it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CostPolicy {
    /// Finite and `>= 0`.
    #[default]
    NonNegative,
    /// Any finite value.
    Finite,
    /// Anything, including NaN and infinities.
    Unchecked,
}

impl CostPolicy {
    /// Whether `cost` is admissible under this policy.
    pub fn accepts(self, cost: f32) -> bool {
        match self {
            Self::NonNegative => cost.is_finite() && cost >= 0.0,
            Self::Finite => cost.is_finite(),
            Self::Unchecked => true,
        }
    }
}

/// Construction parameters for a [`NavGrid`](crate::NavGrid).
#[derive(Clone, Debug, PartialEq)]
pub struct LatticeConfig {
    /// Initial lattice shape. Default: `1x1x1`.
    pub dimensions: Dimensions,
    /// Upper bound on `x * y * z` for this grid, checked at construction
    /// and on every resize. Default: [`LatticeConfig::DEFAULT_MAX_CELLS`].
    pub max_cells: usize,
    /// Link cost admission rule. Default: [`CostPolicy::NonNegative`].
    pub cost_policy: CostPolicy,
}

impl LatticeConfig {
    /// Default cell budget: a 256-cube.
    pub const DEFAULT_MAX_CELLS: usize = 1 << 24;

    /// Config for a grid of the given initial shape with default limits.
    pub fn with_dimensions(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            ..Self::default()
        }
    }

    /// Check structural invariants.
    ///
    /// `max_cells` must be non-zero and fit a `u32` slot index, and the
    /// initial shape must fit within it.
    pub fn validate(&self) -> Result<(), LatticeError> {
        if self.max_cells == 0 {
            return Err(LatticeError::InvalidConfig {
                reason: "max_cells must be at least 1".into(),
            });
        }
        if self.max_cells > u32::MAX as usize {
            return Err(LatticeError::InvalidConfig {
                reason: format!(
                    "max_cells {} exceeds the addressable limit {}",
                    self.max_cells,
                    u32::MAX
                ),
            });
        }
        let requested = self.dimensions.cell_count();
        if requested > self.max_cells {
            return Err(LatticeError::TooManyCells {
                requested,
                max: self.max_cells,
            });
        }
        Ok(())
    }
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::UNIT,
            max_cells: Self::DEFAULT_MAX_CELLS,
            cost_policy: CostPolicy::NonNegative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(LatticeConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_budget_rejected() {
        let cfg = LatticeConfig {
            max_cells: 0,
            ..LatticeConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(LatticeError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn shape_over_budget_rejected() {
        let cfg = LatticeConfig {
            dimensions: Dimensions::new(4, 4, 4).unwrap(),
            max_cells: 63,
            ..LatticeConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(LatticeError::TooManyCells {
                requested: 64,
                max: 63
            })
        );
    }

    #[test]
    fn cost_policies() {
        assert!(CostPolicy::NonNegative.accepts(0.0));
        assert!(CostPolicy::NonNegative.accepts(2.5));
        assert!(!CostPolicy::NonNegative.accepts(-0.1));
        assert!(!CostPolicy::NonNegative.accepts(f32::NAN));
        assert!(!CostPolicy::NonNegative.accepts(f32::INFINITY));

        assert!(CostPolicy::Finite.accepts(-3.0));
        assert!(!CostPolicy::Finite.accepts(f32::NEG_INFINITY));

        assert!(CostPolicy::Unchecked.accepts(f32::NAN));
    }
}
