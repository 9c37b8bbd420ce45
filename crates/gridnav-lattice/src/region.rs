//! Axis-aligned boxes of cells.

use gridnav_core::{Cell, Dimensions};

/// A half-open box of cells, `[min, max)` on every axis.
///
/// Iteration follows the lattice's flat storage order: X fastest, then Y,
/// then Z. A box with `max <= min` on any axis is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellRegion {
    min: Cell,
    max: Cell,
}

impl CellRegion {
    /// Box spanning `[min, max)`.
    pub fn new(min: Cell, max: Cell) -> Self {
        Self { min, max }
    }

    /// Box covering every cell of a lattice with the given dimensions.
    pub fn from_dimensions(dims: Dimensions) -> Self {
        Self {
            min: Cell::ZERO,
            max: Cell::new(dims.x() as i32, dims.y() as i32, dims.z() as i32),
        }
    }

    /// Box spanning the two given cells, both included.
    ///
    /// The exclusive upper corner saturates at `i32::MAX`, so cells with a
    /// coordinate of `i32::MAX` cannot be covered by any region.
    pub fn spanning(a: Cell, b: Cell) -> Self {
        Self {
            min: Cell::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Cell::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)).offset(1, 1, 1),
        }
    }

    /// Inclusive lower corner.
    pub fn min(&self) -> Cell {
        self.min
    }

    /// Exclusive upper corner.
    pub fn max(&self) -> Cell {
        self.max
    }

    /// Whether the box contains no cells.
    pub fn is_empty(&self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y || self.max.z <= self.min.z
    }

    /// Number of cells in the box.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let span = |lo: i32, hi: i32| (hi as i64 - lo as i64) as usize;
        span(self.min.x, self.max.x) * span(self.min.y, self.max.y) * span(self.min.z, self.max.z)
    }

    /// Whether `cell` lies inside the box.
    pub fn contains(&self, cell: Cell) -> bool {
        (self.min.x..self.max.x).contains(&cell.x)
            && (self.min.y..self.max.y).contains(&cell.y)
            && (self.min.z..self.max.z).contains(&cell.z)
    }

    /// Cells common to both boxes.
    pub fn intersect(&self, other: &CellRegion) -> CellRegion {
        CellRegion {
            min: Cell::new(
                self.min.x.max(other.min.x),
                self.min.y.max(other.min.y),
                self.min.z.max(other.min.z),
            ),
            max: Cell::new(
                self.max.x.min(other.max.x),
                self.max.y.min(other.max.y),
                self.max.z.min(other.max.z),
            ),
        }
    }

    /// Iterate cells in X-fastest order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> {
        let CellRegion { min, max } = *self;
        let (xs, ys, zs) = if self.is_empty() {
            (0..0, 0..0, 0..0)
        } else {
            (min.x..max.x, min.y..max.y, min.z..max.z)
        };
        zs.flat_map(move |z| {
            let xs = xs.clone();
            ys.clone()
                .flat_map(move |y| xs.clone().map(move |x| Cell::new(x, y, z)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_matches_flat_order() {
        let dims = Dimensions::new(3, 2, 2).unwrap();
        let region = CellRegion::from_dimensions(dims);
        let cells: Vec<Cell> = region.iter().collect();
        assert_eq!(cells.len(), dims.cell_count());
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(dims.flat_index(*cell), Some(i));
        }
    }

    #[test]
    fn spanning_is_inclusive_and_order_free() {
        let r = CellRegion::spanning(Cell::new(2, 0, 1), Cell::new(0, 1, 1));
        assert_eq!(r.len(), 3 * 2);
        assert!(r.contains(Cell::new(2, 1, 1)));
        assert!(!r.contains(Cell::new(2, 1, 2)));
    }

    #[test]
    fn spanning_saturates_at_the_coordinate_limit() {
        let top = Cell::new(i32::MAX, 0, 0);
        let r = CellRegion::spanning(Cell::new(i32::MAX - 1, 0, 0), top);
        assert_eq!(r.max().x, i32::MAX);
        assert_eq!(r.len(), 1);
        assert!(r.contains(Cell::new(i32::MAX - 1, 0, 0)));
        assert!(!r.contains(top));
    }

    #[test]
    fn disjoint_intersection_is_empty() {
        let a = CellRegion::new(Cell::new(0, 0, 0), Cell::new(2, 2, 2));
        let b = CellRegion::new(Cell::new(2, 0, 0), Cell::new(4, 2, 2));
        let i = a.intersect(&b);
        assert!(i.is_empty());
        assert_eq!(i.len(), 0);
        assert_eq!(i.iter().count(), 0);
    }

    #[test]
    fn intersection_with_lattice_clips() {
        let lattice = CellRegion::from_dimensions(Dimensions::new(4, 4, 1).unwrap());
        let sel = CellRegion::new(Cell::new(-1, 2, 0), Cell::new(2, 9, 1));
        let clipped = lattice.intersect(&sel);
        assert_eq!(clipped, CellRegion::new(Cell::new(0, 2, 0), Cell::new(2, 4, 1)));
        assert_eq!(clipped.iter().count(), 4);
    }
}
