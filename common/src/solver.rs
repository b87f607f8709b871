use crate::{
    board::Board,
    coord::Coord,
    error::{ConfigError, SolveError},
    jump::{ALL_JUMPS, Jump},
};

/// Where the puzzle starts and, optionally, where the last peg has to end up.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PuzzleConfig {
    start: Coord,
    end: Option<Coord>,
}

impl PuzzleConfig {
    pub fn new(start: i64, end: Option<i64>) -> Result<Self, ConfigError> {
        let start = Coord::from_index(start).ok_or(ConfigError::StartOutOfRange(start))?;
        let end = match end {
            Some(end) => Some(Coord::from_index(end).ok_or(ConfigError::EndOutOfRange(end))?),
            None => None,
        };
        Ok(PuzzleConfig { start, end })
    }

    /// The hole that is empty at the beginning
    pub fn start(&self) -> Coord {
        self.start
    }

    /// The hole the last peg has to occupy, `None` if any hole will do
    pub fn end(&self) -> Option<Coord> {
        self.end
    }
}

/// One jump of a solution, together with the board it produced.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Step {
    pub board: Board,
    pub jump: Jump,
}

/// A solution, in the order the jumps have to be played.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SearchTrace {
    initial: Board,
    steps: Vec<Step>,
}

impl SearchTrace {
    pub fn initial(&self) -> &Board {
        &self.initial
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn jumps(&self) -> impl Iterator<Item = Jump> + '_ {
        self.steps.iter().map(|step| step.jump)
    }

    /// The board after the last jump.
    pub fn final_board(&self) -> &Board {
        self.steps.last().map_or(&self.initial, |step| &step.board)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SearchStats {
    /// Number of boards the search visited, including the initial one
    pub explored: u64,
    /// Lowest peg count seen on any board
    pub fewest_pegs: usize,
}

struct State {
    end: Option<Coord>,
    /// Boards along the branch currently being explored
    history: Vec<Board>,
    /// Jumps of the winning branch, last jump first
    path: Vec<Jump>,
    stats: SearchStats,
}

/// Validate the raw arguments and run the search.
pub fn solve_puzzle(start: i64, end: Option<i64>) -> Result<SearchTrace, SolveError> {
    let config = PuzzleConfig::new(start, end)?;
    solve(&config)
}

pub fn solve(config: &PuzzleConfig) -> Result<SearchTrace, SolveError> {
    solve_with_stats(config).0
}

/// Depth first search over all jump sequences, in table order. The first
/// solution found is returned.
pub fn solve_with_stats(config: &PuzzleConfig) -> (Result<SearchTrace, SolveError>, SearchStats) {
    let initial = Board::with_hole(config.start);
    let mut board = initial;

    let mut state = State {
        end: config.end,
        history: vec![],
        path: vec![],
        stats: SearchStats {
            explored: 0,
            fewest_pegs: initial.count(),
        },
    };

    let ok = search_inner(&mut board, &mut state);
    let stats = state.stats;
    log::debug!(
        "explored {} positions, fewest pegs reached {}. result {ok}",
        stats.explored,
        stats.fewest_pegs
    );

    if !ok {
        log::info!(
            "no solution from hole {}, smallest reached: {} pegs",
            config.start,
            stats.fewest_pegs
        );
        return (Err(SolveError::NoSolution), stats);
    }

    state.path.reverse();
    debug_assert_eq!(state.history.len(), state.path.len());
    let steps = state
        .history
        .into_iter()
        .zip(state.path)
        .map(|(board, jump)| Step { board, jump })
        .collect();

    (Ok(SearchTrace { initial, steps }), stats)
}

fn search_inner(board: &mut Board, state: &mut State) -> bool {
    state.stats.explored += 1;
    state.stats.fewest_pegs = state.stats.fewest_pegs.min(board.count());

    for jump in ALL_JUMPS {
        if !board.can_jump(jump) {
            continue;
        }

        board.apply_jump(jump);
        state.history.push(*board);

        if search_inner(board, state) {
            state.path.push(jump);
            return true;
        }

        state.history.pop();
        board.apply_jump_inverse(jump);
    }

    is_solved(board, state.end)
}

/// A single peg is left, on `end` if that is given.
fn is_solved(board: &Board, end: Option<Coord>) -> bool {
    board.count() == 1 && end.is_none_or(|end| board.is_peg(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hole(i: i64) -> Coord {
        Coord::from_index(i).unwrap()
    }

    fn triples(trace: &SearchTrace) -> Vec<(usize, usize, usize)> {
        trace
            .jumps()
            .map(|j| (j.src().index(), j.mid().index(), j.dst().index()))
            .collect()
    }

    /// Replay the trace from its initial board and check every step.
    fn check_trace(config: &PuzzleConfig, trace: &SearchTrace) {
        assert_eq!(*trace.initial(), Board::with_hole(config.start()));

        let mut board = *trace.initial();
        for (applied, step) in trace.steps().iter().enumerate() {
            assert!(ALL_JUMPS.contains(&step.jump));
            assert!(board.can_jump(step.jump), "illegal {:?}", step.jump);
            board.apply_jump(step.jump);
            assert_eq!(board, step.board);
            assert_eq!(board.count(), 14 - (applied + 1));
        }

        let last = trace.final_board();
        assert_eq!(last.count(), 1);
        if let Some(end) = config.end() {
            assert!(last.is_peg(end));
        }
        assert_eq!(trace.steps().len(), 14 - last.count());
    }

    #[test]
    fn test_config_bounds() {
        assert_eq!(
            PuzzleConfig::new(0, None),
            Err(ConfigError::StartOutOfRange(0))
        );
        assert_eq!(
            PuzzleConfig::new(16, Some(3)),
            Err(ConfigError::StartOutOfRange(16))
        );
        assert_eq!(
            PuzzleConfig::new(3, Some(-1)),
            Err(ConfigError::EndOutOfRange(-1))
        );
        assert_eq!(
            PuzzleConfig::new(3, Some(16)),
            Err(ConfigError::EndOutOfRange(16))
        );

        let config = PuzzleConfig::new(15, Some(1)).unwrap();
        assert_eq!(config.start(), hole(15));
        assert_eq!(config.end(), Some(hole(1)));
    }

    #[test]
    fn test_invalid_start_is_rejected_before_search() {
        assert_eq!(
            solve_puzzle(0, None),
            Err(SolveError::InvalidConfiguration(
                ConfigError::StartOutOfRange(0)
            ))
        );
        assert_eq!(
            solve_puzzle(1, Some(20)),
            Err(SolveError::InvalidConfiguration(ConfigError::EndOutOfRange(
                20
            )))
        );
    }

    #[test]
    fn test_solve_from_apex() {
        let config = PuzzleConfig::new(1, None).unwrap();
        let (result, stats) = solve_with_stats(&config);
        let trace = result.unwrap();

        check_trace(&config, &trace);
        assert_eq!(
            triples(&trace),
            vec![
                (4, 2, 1),
                (6, 5, 4),
                (1, 3, 6),
                (7, 4, 2),
                (10, 6, 3),
                (12, 8, 5),
                (13, 9, 6),
                (2, 5, 9),
                (3, 6, 10),
                (15, 10, 6),
                (6, 9, 13),
                (14, 13, 12),
                (11, 12, 13),
            ]
        );
        assert_eq!(trace.final_board().pegs().collect::<Vec<_>>(), vec![hole(13)]);
        assert_eq!(stats.explored, 380);
        assert_eq!(stats.fewest_pegs, 1);
    }

    #[test]
    fn test_solve_with_required_end() {
        let config = PuzzleConfig::new(4, Some(4)).unwrap();
        let trace = solve(&config).unwrap();

        check_trace(&config, &trace);
        assert_eq!(trace.steps().len(), 13);
        assert_eq!(trace.final_board().pegs().collect::<Vec<_>>(), vec![hole(4)]);
        assert_eq!(triples(&trace)[0], (1, 2, 4));
        assert_eq!(triples(&trace)[12], (11, 7, 4));
    }

    #[test]
    fn test_unsolvable_end() {
        let config = PuzzleConfig::new(1, Some(15)).unwrap();
        let (result, stats) = solve_with_stats(&config);

        assert_eq!(result, Err(SolveError::NoSolution));
        assert_eq!(stats.explored, 1_293_179);
        assert_eq!(stats.fewest_pegs, 1);
    }

    #[test]
    fn test_every_start_is_solvable() {
        for start in 1..=15 {
            let config = PuzzleConfig::new(start, None).unwrap();
            let trace = solve(&config).unwrap();
            check_trace(&config, &trace);
        }
    }

    #[test]
    fn test_reachable_ends_from_apex() {
        for end in [1, 7, 10, 13] {
            let config = PuzzleConfig::new(1, Some(end)).unwrap();
            let trace = solve(&config).unwrap();
            check_trace(&config, &trace);
        }
        assert_eq!(solve_puzzle(1, Some(4)), Err(SolveError::NoSolution));
    }

    #[test]
    fn test_deterministic() {
        let config = PuzzleConfig::new(9, Some(4)).unwrap();
        let first = solve(&config).unwrap();
        check_trace(&config, &first);
        for _ in 0..3 {
            assert_eq!(solve(&config).unwrap(), first);
        }
    }

    #[test]
    fn test_already_solved_board() {
        let mut board = Board::from_ascii([
            "    .    ",
            "   . .   ",
            "  . # .  ",
            " . . . . ",
            ". . . . .",
        ]);
        let mut state = State {
            end: Some(hole(5)),
            history: vec![],
            path: vec![],
            stats: SearchStats {
                explored: 0,
                fewest_pegs: board.count(),
            },
        };

        assert!(search_inner(&mut board, &mut state));
        assert!(state.path.is_empty());

        state.end = Some(hole(1));
        assert!(!search_inner(&mut board, &mut state));
    }
}
