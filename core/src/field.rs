use std::collections::{HashSet, VecDeque};

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::*;

/// Overall game state. `On` is the only state that accepts moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    On,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::On
    }
}

/// A minefield being played: the cell grid, the flag set, and the win/loss
/// state machine. Mutated in place by a single caller; every operation either
/// applies fully or fails without touching state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    width: usize,
    height: usize,
    cells: Array2<Cell>,
    mines: Vec<Coordinates>,
    flags: HashSet<Coordinates>,
    dug_count: usize,
    status: GameStatus,
}

impl Minefield {
    /// Builds the grid from a populated mine set. The set's dimensions become
    /// the field's dimensions.
    pub fn new(mines: MineSet) -> Self {
        let (width, height) = (mines.width(), mines.height());
        let mine_coords = mines.coordinates();

        let mut cells: Array2<Cell> = Array2::default((height, width));
        for &coord in &mine_coords {
            cells[coord.to_nd_index()].is_mine = true;
            for neighbor in NeighborIter::new(coord, height, width) {
                cells[neighbor.to_nd_index()].mines_around += 1;
            }
        }

        Self {
            width,
            height,
            cells,
            flags: HashSet::with_capacity(mine_coords.len()),
            mines: mine_coords,
            dug_count: 0,
            status: GameStatus::default(),
        }
    }

    /// Plants a flag on a hidden cell.
    pub fn flag(&mut self, row: usize, col: usize) -> Result<Coordinates> {
        self.check_on()?;
        let coord = self.validate(row, col)?;
        if self.flags.len() == self.mines.len() {
            return Err(GameError::OutOfFlags);
        }
        let cell = &mut self.cells[coord.to_nd_index()];
        if cell.is_flagged {
            return Err(GameError::AlreadyFlagged);
        }
        if cell.is_dug {
            return Err(GameError::AlreadyDug);
        }

        cell.is_flagged = true;
        self.flags.insert(coord);
        Ok(coord)
    }

    /// Removes a previously planted flag.
    pub fn unflag(&mut self, row: usize, col: usize) -> Result<Coordinates> {
        self.check_on()?;
        let coord = self.validate(row, col)?;
        let cell = &mut self.cells[coord.to_nd_index()];
        if !cell.is_flagged {
            return Err(GameError::AlreadyUnflagged);
        }
        if cell.is_dug {
            return Err(GameError::AlreadyDug);
        }

        cell.is_flagged = false;
        self.flags.remove(&coord);
        Ok(coord)
    }

    /// Flags the cell if it is unflagged, unflags it otherwise.
    pub fn toggle_flag(&mut self, row: usize, col: usize) -> Result<Coordinates> {
        self.check_on()?;
        let coord = self.validate(row, col)?;
        if self.cells[coord.to_nd_index()].is_flagged {
            self.unflag(row, col)
        } else {
            self.flag(row, col)
        }
    }

    /// Reveals a cell, cascading through connected zero regions, and returns
    /// every coordinate whose displayed status changed. Digging a flagged
    /// cell is rejected; the caller has to unflag it first.
    pub fn dig(&mut self, row: usize, col: usize) -> Result<Vec<Coordinates>> {
        self.check_on()?;
        let coord = self.validate(row, col)?;
        let cell = self.cells[coord.to_nd_index()];
        if cell.is_flagged {
            return Err(GameError::AlreadyFlagged);
        }
        if cell.is_dug {
            return Err(GameError::AlreadyDug);
        }

        self.dig_one(coord);
        let mut changes = vec![coord];

        if cell.is_mine {
            self.status = GameStatus::Lost;
            log::debug!("dug a mine at {coord:?}, game lost");
            changes.extend(self.wrongly_flagged());
            changes.extend(self.unflagged_mines());
            return Ok(changes);
        }

        self.auto_dig(coord, &mut changes);

        // winning condition: every non-mine cell is dug
        if self.dug_count == self.width * self.height - self.mines.len() {
            self.status = GameStatus::Won;
            log::debug!("all safe cells dug, game won");
            changes.extend(self.unflagged_mines());
        }

        Ok(changes)
    }

    pub fn game_status(&self) -> GameStatus {
        self.status
    }

    /// Displayed status of one cell; out-of-range coordinates are `Unknown`.
    pub fn cell_status(&self, row: usize, col: usize) -> CellStatus {
        match self.validate(row, col) {
            Ok(coord) => self.cells[coord.to_nd_index()].status(self.status),
            Err(_) => CellStatus::Unknown,
        }
    }

    /// Snapshot of the whole grid, indexed `[row, col]`.
    pub fn all_cell_status(&self) -> Array2<CellStatus> {
        self.cells.map(|cell| cell.status(self.status))
    }

    /// How many flags are still available to place.
    pub fn flags_left(&self) -> usize {
        self.mines.len() - self.flags.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn mine_count(&self) -> usize {
        self.mines.len()
    }

    /// Digs a single cell, defensively dropping any flag on it. Returns false
    /// when the cell was already dug.
    fn dig_one(&mut self, coord: Coordinates) -> bool {
        let cell = &mut self.cells[coord.to_nd_index()];
        if cell.is_dug {
            return false;
        }
        cell.is_flagged = false;
        cell.is_dug = true;
        self.flags.remove(&coord);
        self.dug_count += 1;
        true
    }

    /// Breadth-first cascade out of a freshly dug zero cell. `changes` is the
    /// shared accumulator for every cell revealed along the way.
    fn auto_dig(&mut self, start: Coordinates, changes: &mut Vec<Coordinates>) {
        if self.cells[start.to_nd_index()].mines_around > 0 {
            return;
        }

        let mut to_visit: VecDeque<Coordinates> = self.neighbors(start).collect();
        while let Some(coord) = to_visit.pop_front() {
            // `is_dug` doubles as the visited marker
            if !self.dig_one(coord) {
                continue;
            }
            changes.push(coord);
            log::trace!("cascade dug {coord:?}");

            if self.cells[coord.to_nd_index()].mines_around == 0 {
                to_visit.extend(self.neighbors(coord));
            }
        }
    }

    fn wrongly_flagged(&self) -> Vec<Coordinates> {
        self.flags
            .iter()
            .copied()
            .filter(|coord| !self.cells[coord.to_nd_index()].is_mine)
            .collect()
    }

    fn unflagged_mines(&self) -> Vec<Coordinates> {
        self.mines
            .iter()
            .copied()
            .filter(|coord| {
                let cell = self.cells[coord.to_nd_index()];
                !cell.is_dug && !cell.is_flagged
            })
            .collect()
    }

    fn neighbors(&self, coord: Coordinates) -> NeighborIter {
        NeighborIter::new(coord, self.height, self.width)
    }

    fn validate(&self, row: usize, col: usize) -> Result<Coordinates> {
        if row < self.height && col < self.width {
            Ok(Coordinates::new(row, col))
        } else {
            Err(GameError::InvalidCoordinates)
        }
    }

    fn check_on(&self) -> Result<()> {
        if self.status.is_over() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}
