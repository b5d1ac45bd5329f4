use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{GameError, MineSet, Minefield, Result};

/// Validated field dimensions and mine count.
///
/// Fields are private, so any value in circulation went through [`new`]
/// (`Difficulty::new`) or is one of the presets; the generate functions are
/// therefore infallible.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    width: usize,
    height: usize,
    mines: usize,
}

impl Difficulty {
    pub const BEGINNER: Self = Self {
        width: 9,
        height: 9,
        mines: 10,
    };
    pub const INTERMEDIATE: Self = Self {
        width: 16,
        height: 16,
        mines: 40,
    };
    pub const EXPERT: Self = Self {
        width: 30,
        height: 16,
        mines: 99,
    };

    pub fn new(width: usize, height: usize, mines: usize) -> Result<Self> {
        if width < 2 || height < 2 {
            return Err(GameError::InvalidDimensions);
        }
        if mines < 1 {
            return Err(GameError::NotEnoughMines);
        }
        if mines > width * height {
            return Err(GameError::TooManyMines);
        }
        Ok(Self {
            width,
            height,
            mines,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn mines(&self) -> usize {
        self.mines
    }

    pub const fn total_cells(&self) -> usize {
        self.width * self.height
    }
}

/// Builds a field for `difficulty` with an entropy-seeded rng.
pub fn generate(difficulty: Difficulty) -> Minefield {
    generate_with(difficulty, &mut rand::rng())
}

/// Builds a field for `difficulty` with the caller's rng, so tests and
/// replays can pin the mine layout through a seed.
pub fn generate_with<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Minefield {
    let mut mines = MineSet::new(difficulty.width, difficulty.height, difficulty.mines);
    mines.randomize_with(rng, difficulty.mines);
    Minefield::new(mines)
}

/// Validates the requested dimensions and mine count, then builds the field.
pub fn custom(width: usize, height: usize, mines: usize) -> Result<Minefield> {
    Ok(generate(Difficulty::new(width, height, mines)?))
}

pub fn beginner() -> Minefield {
    generate(Difficulty::BEGINNER)
}

pub fn intermediate() -> Minefield {
    generate(Difficulty::INTERMEDIATE)
}

pub fn expert() -> Minefield {
    generate(Difficulty::EXPERT)
}
