// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
// Clippy
#![allow(unknown_lints)] // necessary because rustc doesn't know about clippy
#![warn(clippy::all)]

pub mod config;
pub mod data;
pub mod moves;
pub mod parser;
pub mod puzzle;
pub mod solution_formatter;
pub mod solver;
pub mod state;
pub mod state_formatter;

mod fs;
mod vec2d;

use std::error::Error;
use std::path::Path;

use crate::config::{Algorithm, Format, Heuristic};
use crate::puzzle::Puzzle;
use crate::solver::SolverOk;

pub trait LoadPuzzle {
    /// Detects the format from the contents
    fn load_puzzle(&self) -> Result<Puzzle, Box<dyn Error>>;

    fn load_puzzle_format(&self, format: Format) -> Result<Puzzle, Box<dyn Error>>;
}

impl<P: AsRef<Path>> LoadPuzzle for P {
    fn load_puzzle(&self) -> Result<Puzzle, Box<dyn Error>> {
        let text = fs::read_file(self)?;
        Ok(parser::parse(&text)?)
    }

    fn load_puzzle_format(&self, format: Format) -> Result<Puzzle, Box<dyn Error>> {
        let text = fs::read_file(self)?;
        Ok(parser::parse_format(&text, format)?)
    }
}

pub trait Solve {
    fn solve(&self, algorithm: Algorithm, heuristic: Heuristic, print_status: bool) -> SolverOk;

    /// Gives up after visiting `max_visited` states
    fn solve_limited(
        &self,
        algorithm: Algorithm,
        heuristic: Heuristic,
        max_visited: u64,
        print_status: bool,
    ) -> SolverOk;
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use separator::Separatable;

    use crate::config::Algorithm::{AStar, BreadthFirst, DepthFirst, GreedyBestFirst};
    use crate::config::Heuristic::{Deadlock, Manhattan, Null};

    use super::*;

    #[test]
    fn test_puzzles() {
        // BFS finds the shortest solutions, A* only where there is a single way
        let puzzles = [
            (BreadthFirst, Null, "native/00-solved.txt", Some((0, 0))),
            (BreadthFirst, Null, "native/01-two-west.txt", Some((2, 2))),
            (BreadthFirst, Manhattan, "native/02-paired.txt", Some((8, 4))),
            (BreadthFirst, Deadlock, "native/03-generic.txt", Some((9, 4))),
            (BreadthFirst, Null, "native/no-solution-corner.txt", None),
            (BreadthFirst, Null, "xsb/01-simplest.txt", Some((1, 1))),
            (BreadthFirst, Manhattan, "xsb/02-one-way.txt", Some((3, 3))),
            (AStar, Manhattan, "native/01-two-west.txt", Some((2, 2))),
            (AStar, Deadlock, "native/no-solution-corner.txt", None),
            (AStar, Deadlock, "xsb/02-one-way.txt", Some((3, 3))),
            (DepthFirst, Null, "native/no-solution-corner.txt", None),
            (GreedyBestFirst, Manhattan, "native/00-solved.txt", Some((0, 0))),
        ];

        let succeeded = puzzles
            .iter()
            .filter(|&&(algorithm, heuristic, file, expected)| {
                test_puzzle(algorithm, heuristic, file, expected)
            })
            .count();
        assert_eq!(succeeded, puzzles.len());
    }

    fn test_puzzle(
        algorithm: Algorithm,
        heuristic: Heuristic,
        file: &str,
        expected: Option<(usize, usize)>,
    ) -> bool {
        let path = format!("puzzles/{}", file);
        println!("Solving {} using {} ({})", path, algorithm, heuristic);
        let started = Instant::now();

        let puzzle = path.load_puzzle().unwrap();
        let solution = puzzle.solve(algorithm, heuristic, false);

        // innacurate, only useful to quickly see which puzzles are difficult
        println!(
            "Solved {} in approximately {} ms",
            path,
            (started.elapsed().as_millis() as u64).separated_string()
        );
        println!("{:?}", solution);

        let lens = solution.moves().map(|m| (m.move_cnt(), m.push_cnt()));
        if lens != expected {
            println!("Expected: {:?}, got: {:?}", expected, lens);
        }
        lens == expected
    }

    #[test]
    fn every_algorithm_finds_a_solution() {
        for &algorithm in &[BreadthFirst, DepthFirst, GreedyBestFirst, AStar] {
            for &heuristic in &[Null, Manhattan, Deadlock] {
                for &(file, shortest) in &[("native/02-paired.txt", 8), ("native/03-generic.txt", 9)] {
                    let puzzle = format!("puzzles/{}", file).load_puzzle().unwrap();
                    let solution = puzzle.solve(algorithm, heuristic, false);
                    let path = solution.path.unwrap();
                    assert!(path.last().unwrap().is_goal());
                    assert!(path.len() - 1 >= shortest);
                }
            }
        }
    }

    #[test]
    fn loading_errors() {
        assert!("puzzles/does-not-exist.txt".load_puzzle().is_err());
        // `@` is not a native symbol
        let err = "puzzles/xsb/01-simplest.txt"
            .load_puzzle_format(Format::Native)
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid cell at pos: [0, 0]");
        let err = "puzzles/invalid/two-agents.txt".load_puzzle().unwrap_err();
        assert_eq!(err.to_string(), "More than one agent");
    }
}
