//! Player trait and implementations
//!
//! A player only decides where to shoot. Resolving the shot, retrying on
//! refused targets and reporting to the renderer is shared by every player
//! through [`Player::take_turn`].
//! - AiPlayer: uniform random targeting
//! - HumanPlayer: targets read from an [`InputSource`]

use crate::board::Board;
use crate::coordinate::Coordinate;
use crate::random::RandomSource;
use crate::render::Renderer;

/// Interface implemented by different player types.
pub trait Player {
    /// Produce the next target on an opponent board of `board_size`. The
    /// coordinate is not required to be valid.
    fn choose_target(&mut self, rng: &mut dyn RandomSource, board_size: usize) -> Coordinate;

    /// Fire at `opponent` until a shot is accepted. Out-of-bounds and
    /// repeated targets are reported and retried without limit.
    ///
    /// Returns `true` when the shot hit or sank a ship, earning another move.
    fn take_turn(
        &mut self,
        opponent: &mut Board,
        rng: &mut dyn RandomSource,
        renderer: &mut dyn Renderer,
    ) -> bool {
        loop {
            let target = self.choose_target(rng, opponent.size());
            match opponent.resolve_shot(target) {
                Ok(outcome) => {
                    renderer.shot_resolved(target, outcome);
                    return outcome.grants_extra_turn();
                }
                Err(e) => renderer.shot_rejected(e),
            }
        }
    }
}

pub mod ai;
pub use ai::AiPlayer;

pub mod human;
pub use human::{HumanPlayer, InputSource};
