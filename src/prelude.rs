//! Commonly used types and utilities for ease of import.

pub use crate::{
    generate_random_board, AiPlayer, Board, Coordinate, Game, GameConfig, GameOutcome,
    HumanPlayer, InputSource, NullRenderer, Orientation, Player, RandomSource, Renderer, Role,
    Ship, ShotError, ShotOutcome,
};

#[cfg(feature = "std")]
pub use crate::cli::{ConsoleRenderer, LineInput};
