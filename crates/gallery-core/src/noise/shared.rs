use std::sync::{Arc, PoisonError, RwLock};

use rand::Rng;

use crate::error::Result;
use crate::noise::grid::{generate, NoiseGrid};

/// Publication point for the current noise grid.
///
/// Readers take an `Arc` snapshot and sample it without holding the lock.
/// Regeneration builds the replacement off-lock and swaps the pointer, so a
/// reader sees either the old grid or the new one, never a partial grid.
#[derive(Debug)]
pub struct SharedNoiseGrid {
    current: RwLock<Arc<NoiseGrid>>,
}

impl SharedNoiseGrid {
    pub fn new(grid: NoiseGrid) -> Self {
        Self {
            current: RwLock::new(Arc::new(grid)),
        }
    }

    /// Snapshot of the current grid.
    pub fn load(&self) -> Arc<NoiseGrid> {
        // The guarded value is a whole Arc; a panicking writer cannot tear it.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Replace the current grid, returning the previous one.
    pub fn store(&self, grid: NoiseGrid) -> Arc<NoiseGrid> {
        self.publish(Arc::new(grid))
    }

    fn publish(&self, next: Arc<NoiseGrid>) -> Arc<NoiseGrid> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let prev = std::mem::replace(&mut *guard, next);
        log::debug!(
            "published {}x{} noise grid",
            guard.width(),
            guard.height()
        );
        prev
    }

    /// Generate a fresh grid of the given size and publish it.
    ///
    /// On a configuration error the current grid stays in place.
    pub fn regenerate<R: Rng + ?Sized>(
        &self,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Arc<NoiseGrid>> {
        let next = Arc::new(generate(width, height, rng)?);
        self.publish(Arc::clone(&next));
        Ok(next)
    }
}
