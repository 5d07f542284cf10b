//! Console collaborators: line-based target input and text rendering.

#![cfg(feature = "std")]

pub mod console;
pub mod input;

pub use console::{board_lines, glyph, ConsoleRenderer};
pub use input::{parse_coordinate, LineInput, ParseCoordinateError};
