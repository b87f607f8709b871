use std::{fmt, ops::Sub};

pub const NR_ROWS: i8 = 5;
pub const NR_HOLES: usize = 15;

/// A hole on the triangular board. Holes are numbered 1 to 15, starting at the
/// apex and going left to right through each row.
///
/// Invariant: can only represent valid holes
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct Coord(u8);

impl Sub for Coord {
    type Output = (i8, i8);

    fn sub(self, rhs: Self) -> Self::Output {
        (self.row() - rhs.row(), self.col() - rhs.col())
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Coord {
    /// Row 0 is the apex, row `r` holds `r + 1` holes.
    pub fn new(row: i8, col: i8) -> Option<Self> {
        if !(0..NR_ROWS).contains(&row) || !(0..=row).contains(&col) {
            return None;
        }
        Some(Coord((row * (row + 1) / 2 + col + 1) as u8))
    }

    pub fn from_index(index: i64) -> Option<Self> {
        if (1..=NR_HOLES as i64).contains(&index) {
            Some(Coord(index as u8))
        } else {
            None
        }
    }

    /// Only meant for constant tables, `index` must lie in 1..=15.
    pub(crate) const fn from_index_unchecked(index: u8) -> Self {
        Coord(index)
    }

    /// Hole number, 1 to 15
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> i8 {
        let index = self.0 as i8;
        let mut row = 0;
        while (row + 1) * (row + 2) / 2 < index {
            row += 1;
        }
        row
    }

    pub fn col(self) -> i8 {
        let row = self.row();
        self.0 as i8 - row * (row + 1) / 2 - 1
    }

    pub fn shift(self, row: i8, col: i8) -> Option<Coord> {
        Self::new(self.row() + row, self.col() + col)
    }

    /// All holes in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..NR_ROWS).flat_map(|row| (0..=row).filter_map(move |col| Coord::new(row, col)))
    }
}
