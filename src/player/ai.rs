use crate::coordinate::Coordinate;
use crate::random::RandomSource;

use super::Player;

/// Computer player that fires at uniformly random cells.
///
/// There is no memory of earlier shots; repeated targets are refused by the
/// board and redrawn by [`Player::take_turn`].
#[derive(Debug, Default, Clone, Copy)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn choose_target(&mut self, rng: &mut dyn RandomSource, board_size: usize) -> Coordinate {
        let max = board_size as i32 - 1;
        Coordinate::new(rng.uniform_int(0, max), rng.uniform_int(0, max))
    }
}
