use std::fmt;

use bitvec::prelude::*;
use colored::Colorize;

use crate::{
    coord::{Coord, NR_HOLES, NR_ROWS},
    jump::Jump,
};

pub const PEG_GLYPH: char = '\u{25CF}';
pub const HOLE_GLYPH: char = '\u{25CB}';

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellState {
    Peg,
    Hole,
}

/// Occupancy of the 15 holes. Bit `i` is set iff hole `i` holds a peg, bit 0
/// is padding and never set.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Board {
    cells: Cells,
}

type Cells = BitArray<[u16; 1], Lsb0>;

impl Board {
    /// A full board with a single empty hole.
    pub fn with_hole(hole: Coord) -> Board {
        let mut cells = Cells::ZERO;
        for coord in Coord::all() {
            cells.set(coord.index(), coord != hole);
        }
        Board { cells }
    }

    /// Parse five rows of `#` (peg) and `.` (hole), whitespace is ignored.
    pub fn from_ascii(lines: [&str; 5]) -> Self {
        let mut cells = Cells::ZERO;
        let mut counted_chars = 0;
        for line in lines {
            for c in line.chars() {
                let occupied = match c {
                    '.' => false,
                    '#' => true,
                    ' ' => continue,
                    _ => panic!("invalid char in ascii"),
                };
                counted_chars += 1;
                if counted_chars > NR_HOLES {
                    panic!("too many chars in ascii");
                }
                cells.set(counted_chars, occupied);
            }
        }
        if counted_chars < NR_HOLES {
            panic!("not enough chars in ascii");
        }
        Board { cells }
    }

    pub fn cell(&self, coord: Coord) -> CellState {
        if self.is_peg(coord) {
            CellState::Peg
        } else {
            CellState::Hole
        }
    }

    pub fn is_peg(&self, coord: Coord) -> bool {
        self.cells[coord.index()]
    }

    /// Number of pegs left on the board
    pub fn count(&self) -> usize {
        self.cells.count_ones()
    }

    pub fn pegs(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(|&coord| self.is_peg(coord))
    }

    pub fn can_jump(&self, jump: Jump) -> bool {
        self.is_peg(jump.src()) && self.is_peg(jump.mid()) && !self.is_peg(jump.dst())
    }

    pub fn apply_jump(&mut self, jump: Jump) {
        self.cells.set(jump.src().index(), false);
        self.cells.set(jump.mid().index(), false);
        self.cells.set(jump.dst().index(), true);
    }

    pub fn apply_jump_inverse(&mut self, jump: Jump) {
        self.cells.set(jump.src().index(), true);
        self.cells.set(jump.mid().index(), true);
        self.cells.set(jump.dst().index(), false);
    }

    fn glyph(&self, coord: Coord) -> char {
        match self.cell(coord) {
            CellState::Peg => PEG_GLYPH,
            CellState::Hole => HOLE_GLYPH,
        }
    }

    /// Lay the holes out as a centered triangle, one row per line.
    fn layout(&self, mut draw: impl FnMut(Coord, char) -> String) -> String {
        let mut rows = Vec::with_capacity(NR_ROWS as usize);
        for row in 0..NR_ROWS {
            let cells: Vec<String> = (0..=row)
                .filter_map(|col| Coord::new(row, col))
                .map(|coord| draw(coord, self.glyph(coord)))
                .collect();
            let indent = " ".repeat((NR_ROWS - 1 - row) as usize);
            rows.push(format!("{indent}{}", cells.join(" ")));
        }
        rows.join("\n")
    }

    /// Like the `Display` output, but the holes emptied by `jump` are marked
    /// red and its landing hole blue.
    pub fn render_with_jump(&self, jump: Jump) -> String {
        self.layout(|coord, glyph| {
            let glyph = glyph.to_string();
            if coord == jump.dst() {
                glyph.on_blue().to_string()
            } else if coord == jump.src() || coord == jump.mid() {
                glyph.on_red().to_string()
            } else {
                glyph
            }
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.layout(|_, glyph| glyph.to_string()))
    }
}
