//! Vessel definitions: position, extent and remaining hit points.

use core::fmt;

use crate::coord::Coordinate;

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along the column axis from the bow.
    Horizontal,
    /// Extends along the row axis from the bow.
    Vertical,
}

/// A vessel occupying a straight run of `length` cells starting at its bow.
///
/// The occupied cells are derived on demand and never stored. Hit points
/// start at `length` and are only decremented by the owning board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    hit_points: usize,
}

impl Vessel {
    /// A fresh, undamaged vessel. Lengths below 1 are raised to 1.
    pub fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Self {
        let length = length.max(1);
        Self {
            bow,
            length,
            orientation,
            hit_points: length,
        }
    }

    /// The `length` coordinates of the vessel, bow first.
    pub fn coordinates(&self) -> Vec<Coordinate> {
        (0..self.length)
            .map(|i| match self.orientation {
                Orientation::Horizontal => Coordinate::new(self.bow.row, self.bow.col.saturating_add(i)),
                Orientation::Vertical => Coordinate::new(self.bow.row.saturating_add(i), self.bow.col),
            })
            .collect()
    }

    /// Returns `true` if `target` is one of the vessel's cells.
    pub fn is_hit_by(&self, target: Coordinate) -> bool {
        self.coordinates().contains(&target)
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn hit_points(&self) -> usize {
        self.hit_points
    }

    pub fn is_sunk(&self) -> bool {
        self.hit_points == 0
    }

    /// Take one point of damage, returning `true` if that sank the vessel.
    pub(crate) fn take_hit(&mut self) -> bool {
        self.hit_points = self.hit_points.saturating_sub(1);
        self.hit_points == 0
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ bow: ({}, {}), length: {}, orientation: {:?}, hit_points: {} }}",
            self.bow.row, self.bow.col, self.length, self.orientation, self.hit_points,
        )
    }
}
