//! A grid shared between threads behind one lock.

use std::sync::{Arc, Mutex};

use crate::error::LatticeError;
use crate::grid::NavGrid;

/// Clonable handle to a [`NavGrid`] guarded by a single `Mutex`.
///
/// Every read and every mutation, including the link cascade of a node
/// removal, runs with the lock held, so no reader ever observes a
/// half-unlinked grid.
#[derive(Clone, Debug)]
pub struct SharedNavGrid {
    inner: Arc<Mutex<NavGrid>>,
}

impl SharedNavGrid {
    /// Take ownership of `grid`.
    pub fn new(grid: NavGrid) -> Self {
        Self {
            inner: Arc::new(Mutex::new(grid)),
        }
    }

    /// Run `f` with shared access to the grid.
    pub fn read<R>(&self, f: impl FnOnce(&NavGrid) -> R) -> Result<R, LatticeError> {
        let guard = self.inner.lock().map_err(|_| LatticeError::Poisoned)?;
        Ok(f(&guard))
    }

    /// Run `f` with exclusive access to the grid.
    pub fn write<R>(&self, f: impl FnOnce(&mut NavGrid) -> R) -> Result<R, LatticeError> {
        let mut guard = self.inner.lock().map_err(|_| LatticeError::Poisoned)?;
        Ok(f(&mut guard))
    }

    /// Recover the grid if this is the last handle.
    pub fn try_into_inner(self) -> Result<NavGrid, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => mutex.into_inner().map_err(|poisoned| Self::new(poisoned.into_inner())),
            Err(inner) => Err(Self { inner }),
        }
    }
}

impl From<NavGrid> for SharedNavGrid {
    fn from(grid: NavGrid) -> Self {
        Self::new(grid)
    }
}
