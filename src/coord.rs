//! Grid coordinates.

use core::fmt;

use serde::Serialize;

use crate::config::{BOARD_SIZE, COLUMN_LABELS};

/// A `(row, col)` position on the grid, 0-indexed.
///
/// Coordinates are plain values: they may lie outside the grid, and it is
/// up to the [`Board`](crate::Board) to reject them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

/// Offsets of the eight cells surrounding a coordinate.
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns `true` if the coordinate lies on the `BOARD_SIZE`×`BOARD_SIZE` grid.
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// The in-bounds cells touching this one orthogonally or diagonally.
    pub fn neighbours(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOUR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            let c = Coordinate::new(row, col);
            c.in_bounds().then_some(c)
        })
    }

    /// Every coordinate of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coordinate::new(row, col)))
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Coordinate::new(row, col)
    }
}

/// Human notation: 1-based row, then the column letter (`3 B`).
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match COLUMN_LABELS.get(self.col) {
            Some(label) => write!(f, "{} {}", self.row + 1, label),
            None => write!(f, "{} #{}", self.row + 1, self.col + 1),
        }
    }
}
