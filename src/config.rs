use crate::common::ConfigError;

/// Side length of the standard board.
pub const BOARD_SIZE: usize = 6;
/// Smallest board on which the standard fleet reliably fits.
pub const MIN_BOARD_SIZE: usize = 6;
/// Largest board addressable by the packed 128-bit cell masks.
pub const MAX_BOARD_SIZE: usize = 11;

/// Number of ships in the fleet.
pub const FLEET_SIZE: usize = 7;
/// Ship lengths placed on every board, largest first.
pub const FLEET: [usize; FLEET_SIZE] = [3, 2, 2, 1, 1, 1, 1];

/// Combined placement attempts allowed for one fleet before the whole board
/// is thrown away and rebuilt.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Settings chosen at game start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    /// Render the computer's ships instead of hiding them.
    pub reveal_computer_ships: bool,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            Ok(())
        } else {
            Err(ConfigError::BoardSize {
                size: self.board_size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            })
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            reveal_computer_ships: false,
        }
    }
}
