//! Ships: straight runs of cells derived from a bow, a length and an
//! orientation.

use core::fmt;

use crate::coordinate::Coordinate;
use crate::random::RandomSource;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Successive segments increment the column.
    Horizontal,
    /// Successive segments increment the row.
    Vertical,
}

impl Orientation {
    /// Fair coin flip between the two orientations.
    pub fn random(rng: &mut dyn RandomSource) -> Self {
        if rng.uniform_int(0, 1) == 0 {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    const fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A ship with its remaining-hits counter.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    remaining: usize,
}

impl Ship {
    /// Build an unplaced ship. Length and position are validated by
    /// [`Board::place_ship`](crate::Board::place_ship).
    pub const fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Self {
        Self {
            bow,
            length,
            orientation,
            remaining: length,
        }
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

    /// Segments not yet hit.
    pub fn remaining_hits(&self) -> usize {
        self.remaining
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining == 0
    }

    /// Cells occupied by the ship, starting at the bow.
    pub fn occupied_coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let (dr, dc) = self.orientation.step();
        let bow = self.bow;
        let length = i32::try_from(self.length).unwrap_or(i32::MAX);
        (0..length).map(move |i| bow.offset(dr * i, dc * i))
    }

    /// `true` if `coord` is one of the ship's cells.
    pub fn covers(&self, coord: Coordinate) -> bool {
        self.occupied_coordinates().any(|c| c == coord)
    }

    /// Count one more segment destroyed. Returns `true` when this hit sank
    /// the ship.
    pub(crate) fn register_hit(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ bow: {}, length: {}, orientation: {:?}, remaining: {} }}",
            self.bow, self.length, self.orientation, self.remaining
        )
    }
}
