#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod coordinate;
pub mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;
mod random;
mod render;
mod ship;

pub use bitboard::{BitBoard, Cells};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::Coordinate;
pub use fleet::{generate_random_board, place_random_fleet};
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env};
pub use player::{AiPlayer, HumanPlayer, InputSource, Player};
pub use random::RandomSource;
pub use render::{NullRenderer, Renderer};
pub use ship::*;
