//! Bulk assignment over cell selections.
//!
//! Editing tools work on a set of selected cells at once: they ask what
//! the selection currently holds and then stamp one factory's nodes onto
//! all of it, or clear it. Selections keep insertion order so bulk edits
//! are applied in the order the cells were picked.

use std::sync::Arc;

use gridnav_core::Cell;
use indexmap::IndexSet;
use log::debug;

use crate::factory::NodeFactory;
use crate::grid::NavGrid;
use crate::region::CellRegion;

/// An ordered set of cells.
pub type CellSelection = IndexSet<Cell>;

/// Select every cell of `region`, in X-fastest order.
pub fn select_region(region: &CellRegion) -> CellSelection {
    region.iter().collect()
}

/// What a selection currently holds, by creating factory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FactoryMix {
    /// The selection is empty.
    Nothing,
    /// Every selected cell is empty (or outside the lattice).
    Vacant,
    /// Every selected cell holds a node from the same factory. `None`
    /// means the nodes carry no factory name.
    Uniform(Option<Arc<str>>),
    /// Some cells differ: occupied and vacant cells, or nodes from
    /// different factories.
    Mixed,
}

impl NavGrid {
    /// Summarise which factory built the nodes in `selection`.
    pub fn factory_mix(&self, selection: &CellSelection) -> FactoryMix {
        let mut cells = selection.iter();
        let Some(&first) = cells.next() else {
            return FactoryMix::Nothing;
        };
        let content = |cell: Cell| self.try_get_node(cell).map(|n| n.factory_key());
        let expected = content(first);
        if cells.any(|&cell| content(cell) != expected) {
            return FactoryMix::Mixed;
        }
        match expected {
            None => FactoryMix::Vacant,
            Some(name) => FactoryMix::Uniform(name.cloned()),
        }
    }

    /// Fill every selected cell with a node from `factory`, or clear them
    /// all for `None`.
    ///
    /// Existing nodes in the selection are destroyed with their links.
    /// Cells outside the lattice are skipped. Returns the number of cells
    /// written.
    pub fn assign(&mut self, selection: &CellSelection, factory: Option<&dyn NodeFactory>) -> usize {
        let mut written = 0;
        for &cell in selection {
            let ok = match factory {
                Some(factory) => self.place_node(cell, factory).is_some(),
                None => self.try_set_node(cell, None),
            };
            if ok {
                written += 1;
            }
        }
        debug!(
            "lattice {}: assigned {} of {} selected cells to {}",
            self.id(),
            written,
            selection.len(),
            factory.map_or("nothing", |f| f.name())
        );
        written
    }
}
