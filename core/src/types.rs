use serde::{Deserialize, Serialize};

/// Zero-based grid position, row-major with the origin at the top-left.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinates {
    pub row: usize,
    pub col: usize,
}

impl Coordinates {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub(crate) const fn to_nd_index(self) -> [usize; 2] {
        [self.row, self.col]
    }
}

impl From<(usize, usize)> for Coordinates {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(
    coords: Coordinates,
    delta: (isize, isize),
    bounds: (usize, usize),
) -> Option<Coordinates> {
    let (d_row, d_col) = delta;
    let (height, width) = bounds;

    let row = coords.row.checked_add_signed(d_row)?;
    if row >= height {
        return None;
    }

    let col = coords.col.checked_add_signed(d_col)?;
    if col >= width {
        return None;
    }

    Some(Coordinates { row, col })
}

/// Iterator over the 8-neighborhood of a coordinate, clipped to the grid.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coordinates,
    bounds: (usize, usize),
    index: usize,
}

impl NeighborIter {
    pub fn new(center: Coordinates, height: usize, width: usize) -> Self {
        Self {
            center,
            bounds: (height, width),
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coordinates;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.index >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(self.center, DISPLACEMENTS[self.index], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors(row: usize, col: usize) -> Vec<Coordinates> {
        NeighborIter::new(Coordinates::new(row, col), 9, 9).collect()
    }

    #[test]
    fn center_cell_has_eight_neighbors() {
        let found = neighbors(4, 4);
        assert_eq!(found.len(), 8);
        for coord in [
            (3, 3),
            (3, 4),
            (3, 5),
            (4, 3),
            (4, 5),
            (5, 3),
            (5, 4),
            (5, 5),
        ] {
            assert!(found.contains(&coord.into()), "missing {coord:?}");
        }
    }

    #[test]
    fn corner_cells_are_clipped_to_three_neighbors() {
        let found = neighbors(0, 0);
        assert_eq!(found.len(), 3);
        assert!(found.contains(&Coordinates::new(0, 1)));
        assert!(found.contains(&Coordinates::new(1, 0)));
        assert!(found.contains(&Coordinates::new(1, 1)));

        assert_eq!(neighbors(8, 8).len(), 3);
    }

    #[test]
    fn edge_cells_are_clipped_to_five_neighbors() {
        assert_eq!(neighbors(0, 4).len(), 5);
        assert_eq!(neighbors(4, 0).len(), 5);
        assert_eq!(neighbors(8, 4).len(), 5);
        assert_eq!(neighbors(4, 8).len(), 5);
    }

    #[test]
    fn bounds_clip_independently_per_axis() {
        let found: Vec<_> = NeighborIter::new(Coordinates::new(0, 1), 1, 3).collect();
        assert_eq!(found, vec![Coordinates::new(0, 0), Coordinates::new(0, 2)]);
    }
}
