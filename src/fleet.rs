//! Random fleet construction.
//!
//! Building a board is a randomized constructive search: every ship of
//! [`FLEET`] is dropped at random until it fits. One attempt counter is shared
//! by the whole fleet and capped at [`MAX_PLACEMENT_ATTEMPTS`]; hitting the
//! cap abandons the board and the outer loop starts over from a blank one.

use crate::board::Board;
use crate::common::{ConfigError, FleetConstructionExhausted};
use crate::config::{GameConfig, FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::coordinate::Coordinate;
use crate::random::RandomSource;
use crate::ship::{Orientation, Ship};

/// One bounded attempt at placing the standard fleet onto a copy of `blank`.
/// On success the board is finalized and ready for play.
pub fn place_random_fleet(
    blank: &Board,
    rng: &mut dyn RandomSource,
) -> Result<Board, FleetConstructionExhausted> {
    let mut board = blank.clone();
    let max = board.size() as i32 - 1;
    let mut attempts = 0;

    for &length in FLEET.iter() {
        loop {
            attempts += 1;
            if attempts > MAX_PLACEMENT_ATTEMPTS {
                return Err(FleetConstructionExhausted {
                    attempts: MAX_PLACEMENT_ATTEMPTS,
                });
            }
            let bow = Coordinate::new(rng.uniform_int(0, max), rng.uniform_int(0, max));
            let ship = Ship::new(bow, length, Orientation::random(rng));
            if board.place_ship(ship).is_ok() {
                break;
            }
        }
    }

    board.finalize();
    log::debug!("fleet placed after {} attempts", attempts);
    Ok(board)
}

/// Build a finalized board of `size` carrying the standard fleet, restarting
/// [`place_random_fleet`] from scratch as often as needed. Sizes on which the
/// fleet cannot reliably fit are refused up front.
pub fn generate_random_board(
    size: usize,
    rng: &mut dyn RandomSource,
) -> Result<Board, ConfigError> {
    GameConfig {
        board_size: size,
        ..GameConfig::default()
    }
    .validate()?;
    let blank = Board::with_size(size)?;
    let mut restarts = 0usize;
    loop {
        match place_random_fleet(&blank, rng) {
            Ok(board) => return Ok(board),
            Err(e) => {
                restarts += 1;
                log::debug!("{}; restarting fleet construction ({})", e, restarts);
            }
        }
    }
}
