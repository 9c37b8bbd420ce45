//! Flat 3D cell storage with overlap-preserving resize.

use gridnav_core::{Cell, Dimensions, NodeId};

use crate::region::CellRegion;

/// A 3D array of optional node handles.
///
/// Cells are stored in one `Vec` indexed by
/// `x + dims.x * (y + dims.y * z)`. The vector length always equals
/// `dims.x * dims.y * dims.z`.
///
/// The lattice only tracks placement. It does not own nodes; removing a
/// handle from a slot (by overwrite, clear or resize) hands it back to the
/// caller, which is responsible for destroying the node.
#[derive(Clone, Debug)]
pub struct SpatialLattice {
    dimensions: Dimensions,
    cells: Vec<Option<NodeId>>,
}

impl SpatialLattice {
    /// Create a lattice with every slot empty.
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            cells: vec![None; dimensions.cell_count()],
        }
    }

    /// Current extents.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Total number of slots.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Box covering every slot.
    pub fn bounds(&self) -> CellRegion {
        CellRegion::from_dimensions(self.dimensions)
    }

    /// Flat index of `cell`, or `None` if any coordinate is outside
    /// `[0, dimension)`.
    pub fn try_get_node_index(&self, cell: Cell) -> Option<usize> {
        self.dimensions.flat_index(cell)
    }

    /// Handle stored at `cell`. `None` if out of range or empty.
    pub fn try_get_node(&self, cell: Cell) -> Option<NodeId> {
        let index = self.try_get_node_index(cell)?;
        self.cells[index]
    }

    /// Store `node` at `cell`, or clear the slot for `None`.
    ///
    /// Returns `false` without touching anything when `cell` is out of
    /// range. Any handle previously in the slot is dropped; use
    /// [`swap_node`](Self::swap_node) to get it back.
    pub fn try_set_node(&mut self, cell: Cell, node: Option<NodeId>) -> bool {
        self.swap_node(cell, node).is_some()
    }

    /// Store `node` at `cell` and return what the slot held before.
    ///
    /// The outer `Option` is `None` when `cell` is out of range (nothing is
    /// written); otherwise it wraps the previous slot contents.
    pub fn swap_node(&mut self, cell: Cell, node: Option<NodeId>) -> Option<Option<NodeId>> {
        let index = self.try_get_node_index(cell)?;
        Some(std::mem::replace(&mut self.cells[index], node))
    }

    /// Clear `cell` only if it currently holds `node`.
    pub fn clear_if(&mut self, cell: Cell, node: NodeId) -> bool {
        match self.try_get_node_index(cell) {
            Some(index) if self.cells[index] == Some(node) => {
                self.cells[index] = None;
                true
            }
            _ => false,
        }
    }

    /// Change the extents, keeping every handle whose cell lies inside both
    /// the old and new boxes.
    ///
    /// The overlap box is walked once. For each cell in it, the source slot
    /// is found with the old stride and the destination slot with the new
    /// stride, both from the same `(x, y, z)`. Handles outside the overlap
    /// are returned, in old flat order, for the caller to destroy.
    pub fn set_dimensions(&mut self, dimensions: Dimensions) -> Vec<NodeId> {
        let old = self.dimensions;
        let mut cells = vec![None; dimensions.cell_count()];

        let overlap = CellRegion::from_dimensions(old.intersect(dimensions));
        for cell in overlap.iter() {
            if let (Some(src), Some(dst)) = (old.flat_index(cell), dimensions.flat_index(cell)) {
                cells[dst] = self.cells[src].take();
            }
        }

        let evicted = std::mem::replace(&mut self.cells, cells)
            .into_iter()
            .flatten()
            .collect();
        self.dimensions = dimensions;
        evicted
    }

    /// Empty every slot and return the handles that were stored.
    pub fn clear(&mut self) -> Vec<NodeId> {
        self.cells.iter_mut().filter_map(Option::take).collect()
    }

    /// Occupied slots as `(cell, handle)`, in flat order.
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, NodeId)> + '_ {
        let dims = self.dimensions;
        self.cells.iter().enumerate().filter_map(move |(i, slot)| {
            let id = (*slot)?;
            dims.cell_at(i).map(|cell| (cell, id))
        })
    }

    /// Number of occupied slots.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_some()).count()
    }

    /// Raw slot storage in flat order.
    pub fn slots(&self) -> &[Option<NodeId>] {
        &self.cells
    }
}

impl Default for SpatialLattice {
    fn default() -> Self {
        Self::new(Dimensions::UNIT)
    }
}
