pub mod board;
pub mod coord;
pub mod error;
pub mod jump;
pub mod solver;

pub use board::{Board, CellState};
pub use coord::Coord;
pub use error::{ConfigError, SolveError};
pub use jump::{ALL_JUMPS, Jump};
pub use solver::{
    PuzzleConfig, SearchStats, SearchTrace, Step, solve, solve_puzzle, solve_with_stats,
};
