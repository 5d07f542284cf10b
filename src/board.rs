//! Game board: ship placement with adjacency buffers, and shot resolution.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{ConfigError, InvalidPlacement, ShotError, ShotOutcome};
use crate::config::{BOARD_SIZE, MAX_BOARD_SIZE};
use crate::coordinate::Coordinate;
use crate::ship::Ship;

type BB = BitBoard<u128, MAX_BOARD_SIZE>;

/// What a renderer should draw for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Nothing known, or a ship hidden from the viewer.
    Empty,
    /// Unhit ship segment on a visible board.
    Ship,
    /// Unplayable cell next to a sunk ship.
    Buffer,
    /// Hit segment of a ship still afloat.
    Hit,
    /// Hit segment of a sunk ship.
    Sunk,
    /// Shot that found open water.
    Miss,
}

/// Lifecycle of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardPhase {
    /// Ships are being placed.
    Setup,
    /// Placement bookkeeping cleared, no shots yet.
    Finalized,
    /// Being shot at.
    Active,
    /// Every ship is sunk.
    Finished,
}

/// Square grid owning its ships and all shot bookkeeping.
#[derive(Clone)]
pub struct Board {
    size: usize,
    ships: Vec<Ship>,
    /// Ship cells and their buffers during placement; cleared by `finalize`.
    reserved: BB,
    /// Every coordinate that has been shot at.
    shots: BB,
    /// Buffers uncovered around sunk ships.
    revealed: BB,
    sunk_count: usize,
    visible: bool,
    finalized: bool,
}

impl Board {
    /// Empty visible board of the standard size.
    pub fn new() -> Self {
        Self::empty(BOARD_SIZE)
    }

    /// Empty visible board with `size` rows and columns.
    pub fn with_size(size: usize) -> Result<Self, ConfigError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardSize {
                size,
                min: 1,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        Board {
            size,
            ships: Vec::new(),
            reserved: BB::new(),
            shots: BB::new(),
            revealed: BB::new(),
            sunk_count: 0,
            visible: true,
            finalized: false,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Ships in placement order, sunk ones included.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships whose remaining-hits counter is zero.
    pub fn sunk_count(&self) -> usize {
        self.sunk_count
    }

    /// `true` once at least one ship is placed and all of them are sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.sunk_count == self.ships.len()
    }

    /// Whether ship positions are shown to the renderer.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn phase(&self) -> BoardPhase {
        if !self.finalized {
            BoardPhase::Setup
        } else if self.all_sunk() {
            BoardPhase::Finished
        } else if self.shots.is_empty() {
            BoardPhase::Finalized
        } else {
            BoardPhase::Active
        }
    }

    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        let n = self.size as i32;
        coord.row < 0 || coord.row >= n || coord.col < 0 || coord.col >= n
    }

    /// Shot at, revealed around a sunk ship, or reserved during placement.
    pub fn is_busy(&self, coord: Coordinate) -> bool {
        (self.reserved | self.shots | self.revealed).contains(coord)
    }

    /// Place `ship`, then reserve its 8-neighbourhood so nothing can be
    /// placed touching it.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), InvalidPlacement> {
        if self.finalized {
            return Err(InvalidPlacement::Finalized);
        }
        if ship.length() == 0 {
            return Err(InvalidPlacement::EmptyShip);
        }
        for coord in ship.occupied_coordinates() {
            if self.is_out_of_bounds(coord) {
                return Err(InvalidPlacement::OutOfBounds(coord));
            }
            if self.is_busy(coord) {
                return Err(InvalidPlacement::Occupied(coord));
            }
        }

        for coord in ship.occupied_coordinates() {
            self.reserved.insert(coord);
        }
        let buffer = self.buffer_around(&ship);
        self.reserved |= buffer;
        log::trace!("placed {:?}", ship);
        self.ships.push(ship);
        Ok(())
    }

    /// In-bounds neighbours of `ship` that are not busy yet.
    fn buffer_around(&self, ship: &Ship) -> BB {
        ship.occupied_coordinates()
            .flat_map(Coordinate::neighbours)
            .filter(|c| !self.is_out_of_bounds(*c) && !self.is_busy(*c))
            .collect()
    }

    /// Close placement. Placement-time reservations are discarded; from now
    /// on busy cells are only those shot at or revealed by a sinking.
    pub fn finalize(&mut self) {
        self.reserved.clear_all();
        self.finalized = true;
    }

    /// Fire at `coord`.
    pub fn resolve_shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        if self.is_out_of_bounds(coord) {
            return Err(ShotError::OutOfBounds(coord));
        }
        if self.is_busy(coord) {
            return Err(ShotError::AlreadyShot(coord));
        }
        self.shots.insert(coord);

        let Some(idx) = self.ships.iter().position(|s| s.covers(coord)) else {
            log::trace!("shot {} missed", coord);
            return Ok(ShotOutcome::Miss);
        };
        if !self.ships[idx].register_hit() {
            log::trace!("shot {} hit {:?}", coord, self.ships[idx]);
            return Ok(ShotOutcome::Hit);
        }

        self.sunk_count += 1;
        let buffer = self.buffer_around(&self.ships[idx]);
        self.revealed |= buffer;
        log::debug!("shot {} sank {:?}", coord, self.ships[idx]);
        Ok(ShotOutcome::Sunk)
    }

    /// Classify a cell for display. `None` off the grid.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        if self.is_out_of_bounds(coord) {
            return None;
        }
        let ship = self.ships.iter().find(|s| s.covers(coord));
        let cell = match (self.shots.contains(coord), ship) {
            (true, Some(s)) if s.is_sunk() => Cell::Sunk,
            (true, Some(_)) => Cell::Hit,
            (true, None) => Cell::Miss,
            (false, Some(_)) if self.visible => Cell::Ship,
            (false, _) if self.revealed.contains(coord) => Cell::Buffer,
            (false, _) => Cell::Empty,
        };
        Some(cell)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("size", &self.size)
            .field("ships", &self.ships)
            .field("sunk_count", &self.sunk_count)
            .field("visible", &self.visible)
            .field("finalized", &self.finalized)
            .field("shots", &self.shots.iter().collect::<Vec<_>>())
            .field("revealed", &self.revealed.iter().collect::<Vec<_>>())
            .finish()
    }
}
