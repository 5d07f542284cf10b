#![cfg(feature = "std")]

//! Plain-text rendering of both boards and of the shot log.

use std::fmt;
use std::io::Write;
use std::string::String;
use std::vec::Vec;

use crate::{Board, Cell, Coordinate, GameOutcome, Renderer, Role, ShotError, ShotOutcome};

/// Character drawn for a cell.
pub fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Ship => '■',
        Cell::Buffer => '*',
        Cell::Hit | Cell::Sunk => 'X',
        Cell::Miss => 'T',
    }
}

/// Header plus one line per row, 1-indexed labels on both edges of a row.
pub fn board_lines(board: &Board) -> Vec<String> {
    let n = board.size();
    let mut lines = Vec::with_capacity(n + 1);

    let mut header = String::from("  |");
    for c in 1..=n {
        header.push_str(&format!(" {} |", c));
    }
    lines.push(header);

    for r in 0..n {
        let mut line = format!("{} |", r + 1);
        for c in 0..n {
            let cell = board
                .cell(Coordinate::new(r as i32, c as i32))
                .unwrap_or(Cell::Empty);
            line.push_str(&format!(" {} |", glyph(cell)));
        }
        line.push_str(&format!(" {}", r + 1));
        lines.push(line);
    }
    lines
}

/// [`Renderer`] writing human-readable text to `out`.
pub struct ConsoleRenderer<W> {
    out: W,
    acting: Option<Role>,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, acting: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Welcome banner and the input rules.
    pub fn greet(&mut self) {
        self.emit(format_args!(
            "Welcome to Sea Battle!\n\
             -------------------\n\
             Rules:\n\
             1. Input format: x y, where x is the row and y the column\n\
             2. Do not shoot outside the board!\n\
             3. Do not shoot the same cell twice!\n"
        ));
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.out.write_fmt(args).and_then(|()| self.out.flush()) {
            log::warn!("failed to write to console: {}", e);
        }
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn show_boards(&mut self, human: &Board, computer: &Board) {
        let left = board_lines(human);
        let right = board_lines(computer);
        let width = left.first().map_or(0, |l| l.chars().count()) + 2;

        let mut text = format!("{}\n", "-".repeat(20));
        text.push_str(&format!(
            "{:<width$}\t\t{}\n",
            "Your board",
            "Computer board",
            width = width
        ));
        for (l, r) in left.iter().zip(right.iter()) {
            let pad = width.saturating_sub(l.chars().count());
            text.push_str(&format!("{}{}\t\t{}\n", l, " ".repeat(pad), r));
        }
        self.emit(format_args!("{}", text));
    }

    fn turn_started(&mut self, role: Role) {
        self.acting = Some(role);
        match role {
            Role::Human => self.emit(format_args!("Your move.\n")),
            Role::Computer => self.emit(format_args!("Computer's move.\n")),
        }
    }

    fn shot_resolved(&mut self, target: Coordinate, outcome: ShotOutcome) {
        if self.acting == Some(Role::Computer) {
            self.emit(format_args!(
                "Computer fired at ({}, {})\n",
                target.row + 1,
                target.col + 1
            ));
        }
        match outcome {
            ShotOutcome::Miss => self.emit(format_args!("Miss!\n")),
            ShotOutcome::Hit => self.emit(format_args!("Ship hit!\n")),
            ShotOutcome::Sunk => self.emit(format_args!("Ship destroyed!\n")),
        }
    }

    fn shot_rejected(&mut self, error: ShotError) {
        // The computer simply redraws; only the human needs to hear why.
        if self.acting != Some(Role::Human) {
            return;
        }
        match error {
            ShotError::OutOfBounds(_) => {
                self.emit(format_args!("You are trying to shoot outside the board!\n"))
            }
            ShotError::AlreadyShot(_) => self.emit(format_args!(
                "That cell has already been shot at! Try again!\n"
            )),
        }
    }

    fn game_over(&mut self, outcome: &GameOutcome) {
        self.emit(format_args!("{}\n", "-".repeat(20)));
        match outcome.winner {
            Role::Human => self.emit(format_args!("You won!\n")),
            Role::Computer => self.emit(format_args!("The computer won!\n")),
        }
    }
}
