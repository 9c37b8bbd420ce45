//! Cell coordinates and lattice dimensions.

use std::fmt;

use crate::error::DimensionError;

/// Offset from a cell's minimum corner to its centre, in cell units.
pub const CELL_CENTER_OFFSET: [f32; 3] = [0.5, 0.5, 0.5];

/// Integer coordinate of one lattice slot.
///
/// Coordinates are signed so callers can probe outside the lattice (for
/// example a neighbour at `x - 1`); such cells simply resolve to nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl Cell {
    /// The origin cell `(0, 0, 0)`.
    pub const ZERO: Cell = Cell { x: 0, y: 0, z: 0 };

    /// Create a cell coordinate.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Position of the cell centre in lattice-local units.
    ///
    /// Mapping this into world space is the caller's job; the lattice has
    /// no placement transform of its own.
    pub fn center(self) -> [f32; 3] {
        [
            self.x as f32 + CELL_CENTER_OFFSET[0],
            self.y as f32 + CELL_CENTER_OFFSET[1],
            self.z as f32 + CELL_CENTER_OFFSET[2],
        ]
    }

    /// Component-wise offset, saturating at the `i32` range.
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            z: self.z.saturating_add(dz),
        }
    }
}

impl From<(i32, i32, i32)> for Cell {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self { x, y, z }
    }
}

impl From<[i32; 3]> for Cell {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Extent of a lattice along each axis.
///
/// Every component is at least 1 and the total cell count fits in `usize`;
/// both are checked by [`Dimensions::new`], so any `Dimensions` value is a
/// valid lattice shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    x: u32,
    y: u32,
    z: u32,
}

impl Dimensions {
    /// The smallest lattice: a single cell.
    pub const UNIT: Dimensions = Dimensions { x: 1, y: 1, z: 1 };

    /// Validate and build dimensions.
    ///
    /// Returns [`DimensionError::NonPositive`] if any component is `<= 0`
    /// and [`DimensionError::TooManyCells`] if `x * y * z` overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridnav_core::Dimensions;
    ///
    /// let dims = Dimensions::new(4, 2, 2).unwrap();
    /// assert_eq!(dims.cell_count(), 16);
    /// assert!(Dimensions::new(0, 1, 1).is_err());
    /// ```
    pub fn new(x: i32, y: i32, z: i32) -> Result<Self, DimensionError> {
        if x <= 0 || y <= 0 || z <= 0 {
            return Err(DimensionError::NonPositive { x, y, z });
        }
        let dims = Self {
            x: x as u32,
            y: y as u32,
            z: z as u32,
        };
        let count = (dims.x as u64)
            .checked_mul(dims.y as u64)
            .and_then(|n| n.checked_mul(dims.z as u64))
            .filter(|&n| usize::try_from(n).is_ok());
        match count {
            Some(_) => Ok(dims),
            None => Err(DimensionError::TooManyCells { x, y, z }),
        }
    }

    /// Extent along X.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Extent along Y.
    pub fn y(&self) -> u32 {
        self.y
    }

    /// Extent along Z.
    pub fn z(&self) -> u32 {
        self.z
    }

    /// Total number of cells, `x * y * z`.
    pub fn cell_count(&self) -> usize {
        self.x as usize * self.y as usize * self.z as usize
    }

    /// Whether `cell` lies in `[0, x) x [0, y) x [0, z)`.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && cell.z >= 0
            && (cell.x as u32) < self.x
            && (cell.y as u32) < self.y
            && (cell.z as u32) < self.z
    }

    /// Flat slot index `x + dims.x * (y + dims.y * z)`, or `None` when the
    /// cell is outside these dimensions.
    pub fn flat_index(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        let (x, y, z) = (cell.x as usize, cell.y as usize, cell.z as usize);
        Some(x + self.x as usize * (y + self.y as usize * z))
    }

    /// Inverse of [`flat_index`](Self::flat_index).
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        if index >= self.cell_count() {
            return None;
        }
        let sx = self.x as usize;
        let sy = self.y as usize;
        Some(Cell {
            x: (index % sx) as i32,
            y: ((index / sx) % sy) as i32,
            z: (index / (sx * sy)) as i32,
        })
    }

    /// Component-wise minimum: the box shared by two lattices anchored at
    /// the origin.
    pub fn intersect(&self, other: Dimensions) -> Dimensions {
        Dimensions {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
            z: self.z.min(other.z),
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::UNIT
    }
}

impl TryFrom<(i32, i32, i32)> for Dimensions {
    type Error = DimensionError;

    fn try_from((x, y, z): (i32, i32, i32)) -> Result<Self, Self::Error> {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_rejects_non_positive_components() {
        assert_eq!(
            Dimensions::new(0, 1, 1),
            Err(DimensionError::NonPositive { x: 0, y: 1, z: 1 })
        );
        assert!(Dimensions::new(1, -3, 1).is_err());
        assert!(Dimensions::new(1, 1, 0).is_err());
    }

    #[test]
    fn flat_index_uses_x_fastest_stride() {
        let d = Dimensions::new(4, 2, 2).unwrap();
        assert_eq!(d.flat_index(Cell::new(0, 0, 0)), Some(0));
        assert_eq!(d.flat_index(Cell::new(1, 0, 0)), Some(1));
        assert_eq!(d.flat_index(Cell::new(0, 1, 0)), Some(4));
        assert_eq!(d.flat_index(Cell::new(0, 0, 1)), Some(8));
        assert_eq!(d.flat_index(Cell::new(3, 1, 1)), Some(15));
    }

    #[test]
    fn flat_index_rejects_out_of_range() {
        let d = Dimensions::new(3, 3, 3).unwrap();
        assert_eq!(d.flat_index(Cell::new(-1, 0, 0)), None);
        assert_eq!(d.flat_index(Cell::new(0, 3, 0)), None);
        assert_eq!(d.flat_index(Cell::new(0, 0, i32::MAX)), None);
    }

    #[test]
    fn intersect_is_component_wise_min() {
        let a = Dimensions::new(4, 2, 2).unwrap();
        let b = Dimensions::new(2, 3, 3).unwrap();
        assert_eq!(a.intersect(b), Dimensions::new(2, 2, 2).unwrap());
    }

    #[test]
    fn center_adds_half_cell() {
        assert_eq!(Cell::new(1, 0, 2).center(), [1.5, 0.5, 2.5]);
    }

    proptest! {
        #[test]
        fn cell_at_inverts_flat_index(
            dx in 1i32..8, dy in 1i32..8, dz in 1i32..8,
            x in 0i32..8, y in 0i32..8, z in 0i32..8,
        ) {
            let d = Dimensions::new(dx, dy, dz).unwrap();
            let cell = Cell::new(x % dx, y % dy, z % dz);
            let idx = d.flat_index(cell).unwrap();
            prop_assert!(idx < d.cell_count());
            prop_assert_eq!(d.cell_at(idx), Some(cell));
        }
    }
}
