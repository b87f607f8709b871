use std::fmt;

use crate::coord::Coord;

pub const NR_JUMPS: usize = 36;

/// A peg at `src` jumps over the peg at `mid` and lands in `dst`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Jump {
    src: Coord,
    mid: Coord,
    dst: Coord,
}

impl fmt::Display for Jump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Moved {} to {}, jumping over {}",
            self.src, self.dst, self.mid
        )
    }
}

impl Jump {
    const fn new(src: u8, mid: u8, dst: u8) -> Jump {
        Jump {
            src: Coord::from_index_unchecked(src),
            mid: Coord::from_index_unchecked(mid),
            dst: Coord::from_index_unchecked(dst),
        }
    }

    pub fn from_coordinate_pair(src: Coord, dst: Coord) -> Option<Jump> {
        let (drow, dcol) = dst - src;
        if !matches!((drow, dcol), (0, 2) | (0, -2) | (2, 0) | (-2, 0) | (2, 2) | (-2, -2)) {
            // not two holes apart along one of the three board axes
            return None;
        }

        let mid = src
            .shift(drow / 2, dcol / 2)
            .expect("center between valid holes should be valid");

        Some(Jump { src, mid, dst })
    }

    pub fn src(self) -> Coord {
        self.src
    }
    pub fn mid(self) -> Coord {
        self.mid
    }
    pub fn dst(self) -> Coord {
        self.dst
    }
}

/// Every jump on the board, in the order the solver tries them. Changing the
/// order changes which solution is found first.
#[rustfmt::skip]
pub const ALL_JUMPS: [Jump; NR_JUMPS] = [
    Jump::new(1, 2, 4),    Jump::new(1, 3, 6),
    Jump::new(2, 4, 7),    Jump::new(2, 5, 9),
    Jump::new(3, 5, 8),    Jump::new(3, 6, 10),
    Jump::new(4, 2, 1),    Jump::new(4, 5, 6),    Jump::new(4, 7, 11),   Jump::new(4, 8, 13),
    Jump::new(5, 8, 12),   Jump::new(5, 9, 14),
    Jump::new(6, 3, 1),    Jump::new(6, 5, 4),    Jump::new(6, 9, 13),   Jump::new(6, 10, 15),
    Jump::new(7, 4, 2),    Jump::new(7, 8, 9),
    Jump::new(8, 5, 3),    Jump::new(8, 9, 10),
    Jump::new(9, 5, 2),    Jump::new(9, 8, 7),
    Jump::new(10, 6, 3),   Jump::new(10, 9, 8),
    Jump::new(11, 7, 4),   Jump::new(11, 12, 13),
    Jump::new(12, 8, 5),   Jump::new(12, 13, 14),
    Jump::new(13, 12, 11), Jump::new(13, 8, 4),   Jump::new(13, 9, 6),   Jump::new(13, 14, 15),
    Jump::new(14, 13, 12), Jump::new(14, 9, 5),
    Jump::new(15, 10, 6),  Jump::new(15, 14, 13),
];

#[cfg(test)]
fn compute_all_jumps() -> Vec<Jump> {
    Coord::all()
        .flat_map(|src| Coord::all().filter_map(move |dst| Jump::from_coordinate_pair(src, dst)))
        .collect()
}
