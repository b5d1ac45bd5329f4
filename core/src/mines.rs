use std::collections::HashSet;

use rand::Rng;
use rand::RngExt;
use serde::{Deserialize, Serialize};

use crate::{Coordinates, GameError, Result};

/// Set of mine locations scoped to a field of fixed dimensions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineSet {
    width: usize,
    height: usize,
    mines: HashSet<Coordinates>,
}

impl MineSet {
    pub fn new(width: usize, height: usize, capacity: usize) -> Self {
        Self {
            width,
            height,
            mines: HashSet::with_capacity(capacity),
        }
    }

    /// Adds `count` additional mines at uniformly random distinct positions.
    ///
    /// Prior content is kept, so calling again tops the set up.
    pub fn randomize(&mut self, count: usize) {
        self.randomize_with(&mut rand::rng(), count);
    }

    /// Like [`randomize`](Self::randomize), but with a caller-supplied rng so
    /// placement can be pinned with a seed.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) {
        let total = self.width * self.height;
        let mut target = self.mines.len() + count;
        if target > total {
            log::warn!(
                "cannot fit {count} more mines into a {}x{} field, filling every cell",
                self.width,
                self.height
            );
            target = total;
        }

        // positions are drawn over the linear index and re-drawn on collision
        while self.mines.len() < target {
            let index = rng.random_range(0..total);
            self.mines
                .insert(Coordinates::new(index / self.width, index % self.width));
        }
    }

    /// Inserts a mine by hand. Idempotent when the position already holds one.
    pub fn add(&mut self, row: usize, col: usize) -> Result<()> {
        if row >= self.height || col >= self.width {
            return Err(GameError::InvalidCoordinates);
        }
        self.mines.insert(Coordinates::new(row, col));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.mines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mines.is_empty()
    }

    /// Membership test; out-of-range coordinates are simply not mines.
    pub fn is_mine(&self, row: usize, col: usize) -> bool {
        self.mines.contains(&Coordinates::new(row, col))
    }

    /// Every mine position, in unspecified order.
    pub fn coordinates(&self) -> Vec<Coordinates> {
        self.mines.iter().copied().collect()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}
