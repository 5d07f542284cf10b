//! Presentation hooks.
//!
//! The core never formats text for the player. It reports what happened as
//! structured values through [`Renderer`] and leaves wording and layout to
//! the implementation.

use crate::board::Board;
use crate::common::{ShotError, ShotOutcome};
use crate::coordinate::Coordinate;
use crate::game::{GameOutcome, Role};

/// Receives read-only board state and shot notifications. Every method
/// defaults to doing nothing.
pub trait Renderer {
    /// Called before each move with both boards.
    fn show_boards(&mut self, _human: &Board, _computer: &Board) {}

    /// `role` is about to shoot.
    fn turn_started(&mut self, _role: Role) {}

    /// A shot landed on a fresh cell.
    fn shot_resolved(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// A shot was refused; the shooter will pick another target.
    fn shot_rejected(&mut self, _error: ShotError) {}

    fn game_over(&mut self, _outcome: &GameOutcome) {}
}

/// Renderer that ignores everything. Used for headless games.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn show_boards(&mut self, human: &Board, computer: &Board) {
        (**self).show_boards(human, computer)
    }

    fn turn_started(&mut self, role: Role) {
        (**self).turn_started(role)
    }

    fn shot_resolved(&mut self, target: Coordinate, outcome: ShotOutcome) {
        (**self).shot_resolved(target, outcome)
    }

    fn shot_rejected(&mut self, error: ShotError) {
        (**self).shot_rejected(error)
    }

    fn game_over(&mut self, outcome: &GameOutcome) {
        (**self).game_over(outcome)
    }
}
