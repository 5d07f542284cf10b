#![cfg(feature = "std")]

//! Reading human targets from a line-oriented text stream.

use std::fmt;
use std::io::{BufRead, Write};
use std::string::String;
use std::vec::Vec;

use crate::{Coordinate, InputSource};

/// Why a line could not be read as a coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCoordinateError {
    /// Expected exactly two values, got this many.
    WrongCount(usize),
    /// A value is not a non-negative whole number.
    NotANumber(String),
}

impl fmt::Display for ParseCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCoordinateError::WrongCount(_) => {
                write!(f, "Enter coordinates as 'x y' (x - row, y - column)")
            }
            ParseCoordinateError::NotANumber(_) => write!(f, "Enter whole numbers!"),
        }
    }
}

impl std::error::Error for ParseCoordinateError {}

/// Parse `"row col"`, both 1-indexed, into a 0-indexed coordinate. Values
/// are not range-checked; `"0 7"` yields `(-1, 6)` and the board rejects it.
pub fn parse_coordinate(line: &str) -> Result<Coordinate, ParseCoordinateError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err(ParseCoordinateError::WrongCount(parts.len()));
    };
    Ok(Coordinate::new(parse_index(row)? - 1, parse_index(col)? - 1))
}

fn parse_index(raw: &str) -> Result<i32, ParseCoordinateError> {
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseCoordinateError::NotANumber(raw.into()));
    }
    raw.parse()
        .map_err(|_| ParseCoordinateError::NotANumber(raw.into()))
}

/// [`InputSource`] that prompts on `writer` and reads lines from `reader`,
/// asking again until a line parses.
///
/// The game cannot continue without its human, so end of input (or a read
/// error) terminates the process.
pub struct LineInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn say(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.writer.write_fmt(args).and_then(|()| self.writer.flush()) {
            log::warn!("failed to write prompt: {}", e);
        }
    }
}

impl<R: BufRead, W: Write> InputSource for LineInput<R, W> {
    fn read_coordinate(&mut self) -> Coordinate {
        loop {
            self.say(format_args!("Enter coordinates x y: "));
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => {
                    self.say(format_args!("\nInput closed, leaving the game.\n"));
                    std::process::exit(0);
                }
                Ok(_) => {}
                Err(e) => {
                    log::error!("failed to read input: {}", e);
                    std::process::exit(1);
                }
            }
            match parse_coordinate(&line) {
                Ok(coord) => return coord,
                Err(e) => {
                    log::debug!("rejected input {:?}: {:?}", line.trim(), e);
                    self.say(format_args!("{}\n", e));
                }
            }
        }
    }
}
