//! Common types: shot outcomes and the error kinds raised by boards, fleet
//! construction and configuration.

use core::fmt;

use crate::coordinate::Coordinate;
use crate::game::Role;

/// Result of a shot that landed on a fresh cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// No ship at the target.
    Miss,
    /// A ship segment was hit and the ship is still afloat.
    Hit,
    /// The last live segment of a ship was hit.
    Sunk,
}

impl ShotOutcome {
    /// `Hit` and `Sunk` let the shooter fire again.
    pub fn grants_extra_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// Recoverable errors from [`Board::resolve_shot`](crate::Board::resolve_shot).
/// The acting player's turn loop absorbs both by asking for another target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    OutOfBounds(Coordinate),
    /// Shot before, or inside a buffer revealed around a sunk ship.
    AlreadyShot(Coordinate),
}

impl ShotError {
    pub fn coordinate(&self) -> Coordinate {
        match *self {
            ShotError::OutOfBounds(c) | ShotError::AlreadyShot(c) => c,
        }
    }
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfBounds(c) => write!(f, "shot at {} is outside the board", c),
            ShotError::AlreadyShot(c) => write!(f, "cell {} is already used", c),
        }
    }
}

/// Rejected ship placement. Only seen by fleet construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPlacement {
    /// Ships must have at least one segment.
    EmptyShip,
    /// A segment falls off the grid.
    OutOfBounds(Coordinate),
    /// A segment overlaps or touches another ship.
    Occupied(Coordinate),
    /// The board has been finalized; placement is closed.
    Finalized,
}

impl fmt::Display for InvalidPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidPlacement::EmptyShip => write!(f, "ship has no segments"),
            InvalidPlacement::OutOfBounds(c) => write!(f, "segment {} is outside the board", c),
            InvalidPlacement::Occupied(c) => {
                write!(f, "segment {} overlaps or touches another ship", c)
            }
            InvalidPlacement::Finalized => write!(f, "board is finalized"),
        }
    }
}

/// The attempt cap was hit while building one fleet; the caller restarts
/// from an empty board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetConstructionExhausted {
    pub attempts: usize,
}

impl fmt::Display for FleetConstructionExhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fleet construction gave up after {} attempts", self.attempts)
    }
}

/// Invalid game settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    BoardSize { size: usize, min: usize, max: usize },
    /// A prepared board still carries placement reservations.
    BoardNotFinalized(Role),
    /// A prepared board has no ships to sink.
    EmptyFleet(Role),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BoardSize { size, min, max } => {
                write!(f, "board size {} not in {}..={}", size, min, max)
            }
            ConfigError::BoardNotFinalized(side) => {
                write!(f, "{} board has not been finalized", side)
            }
            ConfigError::EmptyFleet(side) => write!(f, "{} board has no ships", side),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShotError {}
#[cfg(feature = "std")]
impl std::error::Error for InvalidPlacement {}
#[cfg(feature = "std")]
impl std::error::Error for FleetConstructionExhausted {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
