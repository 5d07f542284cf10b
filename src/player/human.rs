use crate::coordinate::Coordinate;
use crate::random::RandomSource;

use super::Player;

/// Where a human player's targets come from.
///
/// Implementations turn raw input into a 0-indexed coordinate, asking again
/// as often as needed when the input is malformed. Whether the coordinate
/// lies on the board is the board's concern, not the input's.
pub trait InputSource {
    fn read_coordinate(&mut self) -> Coordinate;
}

impl<I: InputSource + ?Sized> InputSource for &mut I {
    fn read_coordinate(&mut self) -> Coordinate {
        (**self).read_coordinate()
    }
}

/// Player backed by an external [`InputSource`].
pub struct HumanPlayer<I> {
    input: I,
}

impl<I: InputSource> HumanPlayer<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }
}

impl<I: InputSource> Player for HumanPlayer<I> {
    fn choose_target(&mut self, _rng: &mut dyn RandomSource, _board_size: usize) -> Coordinate {
        self.input.read_coordinate()
    }
}
