mod backtracking;
mod frontier;
mod heuristic;
mod search;
mod stats;
mod transition;

use std::fmt::{self, Debug, Formatter};

use log::debug;

use crate::config::{Algorithm, Heuristic};
use crate::moves::Moves;
use crate::puzzle::Puzzle;
use crate::state::State;
use crate::Solve;

pub use self::frontier::{Entry, Frontier};
pub use self::search::{Outcome, Searcher, Step};
pub use self::stats::Stats;
pub use self::transition::attempt_move;

pub struct SolverOk {
    /// From the initial state to the goal, `None` if no goal was found
    pub path: Option<Vec<State>>,
    /// The search stopped early because it hit the visit limit
    pub aborted: bool,
    pub stats: Stats,
    pub algorithm: Algorithm,
    pub heuristic: Heuristic,
}

impl SolverOk {
    fn new(
        path: Option<Vec<State>>,
        aborted: bool,
        stats: Stats,
        algorithm: Algorithm,
        heuristic: Heuristic,
    ) -> Self {
        Self {
            path,
            aborted,
            stats,
            algorithm,
            heuristic,
        }
    }

    pub fn moves(&self) -> Option<Moves> {
        self.path
            .as_ref()
            .map(|path| backtracking::reconstruct_moves(path))
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves() {
            None if self.aborted => writeln!(f, "Aborted")?,
            None => writeln!(f, "No solution")?,
            Some(moves) => writeln!(
                f,
                "{} ({}): {}",
                self.algorithm,
                self.heuristic,
                moves.move_cnt()
            )?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Puzzle {
    fn solve(&self, algorithm: Algorithm, heuristic: Heuristic, print_status: bool) -> SolverOk {
        search(self, algorithm, heuristic, None, print_status)
    }

    fn solve_limited(
        &self,
        algorithm: Algorithm,
        heuristic: Heuristic,
        max_visited: u64,
        print_status: bool,
    ) -> SolverOk {
        search(self, algorithm, heuristic, Some(max_visited), print_status)
    }
}

fn search(
    puzzle: &Puzzle,
    algorithm: Algorithm,
    heuristic: Heuristic,
    max_visited: Option<u64>,
    print_status: bool,
) -> SolverOk {
    debug!("Search called");

    let mut searcher = Searcher::new(puzzle.state(), algorithm, heuristic).print_status(print_status);
    let outcome = match max_visited {
        Some(max) => searcher.run_limited(max),
        None => match searcher.run() {
            Some(id) => Outcome::Solved(id),
            None => Outcome::Exhausted,
        },
    };

    let path = match outcome {
        Outcome::Solved(id) => {
            debug!("Solved, backtracking path");
            Some(searcher.path_to(id).into_iter().cloned().collect())
        }
        Outcome::Exhausted | Outcome::Aborted => None,
    };
    SolverOk::new(
        path,
        outcome == Outcome::Aborted,
        searcher.into_stats(),
        algorithm,
        heuristic,
    )
}
