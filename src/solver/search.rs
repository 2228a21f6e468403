use fnv::FnvHashSet;
use log::debug;

use crate::config::{Algorithm, Heuristic};
use crate::data::DIRECTIONS;
use crate::state::{Layout, State, StateId};

use super::frontier::Frontier;
use super::stats::Stats;
use super::transition::attempt_move;

/// Result of one iteration of the search loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Solved(StateId),
    Expanded,
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved(StateId),
    Exhausted,
    /// Visited the maximum number of states without finding a goal
    Aborted,
}

/// One search over the states reachable from an initial state.
///
/// Every state that enters the frontier is stored in the arena and never changes afterwards,
/// parents are referenced by their index. A layout is marked seen as soon as it's discovered
/// so the first path to reach it wins.
#[derive(Debug)]
pub struct Searcher {
    arena: Vec<State>,
    seen: FnvHashSet<Layout>,
    frontier: Frontier,
    heuristic: Heuristic,
    stats: Stats,
    print_status: bool,
}

impl Searcher {
    pub fn new(initial: &State, algorithm: Algorithm, heuristic: Heuristic) -> Self {
        let mut start = initial.clone();
        start.parent = None;
        start.last_move = None;
        start.move_count = 0;
        start.heuristic_score = heuristic.evaluate(&start).unwrap_or_else(|| {
            debug!("Initial state is a dead end");
            0
        });

        let mut stats = Stats::new();
        stats.add_created(0);

        let mut frontier = Frontier::new(algorithm);
        frontier.add(StateId(0), &start);

        debug!("Searching using {} with heuristic {}", algorithm, heuristic);
        Searcher {
            arena: vec![start],
            seen: FnvHashSet::default(),
            frontier,
            heuristic,
            stats,
            print_status: false,
        }
    }

    /// Print a status line each time a new depth is visited
    pub fn print_status(mut self, print_status: bool) -> Self {
        self.print_status = print_status;
        self
    }

    /// Pops one state and expands it unless it's a goal
    pub fn step(&mut self) -> Step {
        let id = match self.frontier.pop() {
            Some(id) => id,
            None => {
                debug!("Frontier exhausted");
                return Step::Exhausted;
            }
        };

        let (depth, score, is_goal) = {
            let cur = &self.arena[id.0];
            self.seen.insert(cur.layout());
            (cur.move_count, cur.heuristic_score, cur.is_goal())
        };
        if self.stats.add_unique_visited(depth) && self.print_status {
            println!("Visited new depth: {}", depth);
            println!("{:?}", self.stats);
            println!("Frontier: {}, heuristic score: {}", self.frontier.len(), score);
        }
        if is_goal {
            debug!("Solved at depth {}", depth);
            return Step::Solved(id);
        }

        for &dir in &DIRECTIONS {
            let mut child = match attempt_move(&self.arena[id.0], id, dir) {
                Some(child) => child,
                None => continue,
            };
            self.stats.add_created(child.move_count);

            if !self.seen.insert(child.layout()) {
                self.stats.add_reached_duplicate(child.move_count);
                continue;
            }
            match self.heuristic.evaluate(&child) {
                Some(score) => {
                    child.heuristic_score = score;
                    let child_id = StateId(self.arena.len());
                    self.frontier.add(child_id, &child);
                    self.arena.push(child);
                }
                // seen but never expanded
                None => {
                    self.stats.add_dead_end(child.move_count);
                }
            }
        }
        Step::Expanded
    }

    /// Searches until a goal is found or there is nothing left to expand
    pub fn run(&mut self) -> Option<StateId> {
        loop {
            match self.step() {
                Step::Solved(id) => return Some(id),
                Step::Exhausted => return None,
                Step::Expanded => {}
            }
        }
    }

    /// Like `run` but gives up once `max_visited` states have been visited
    pub fn run_limited(&mut self, max_visited: u64) -> Outcome {
        loop {
            if self.stats.total_unique_visited() >= max_visited {
                debug!("Aborted after {} visited states", max_visited);
                return Outcome::Aborted;
            }
            match self.step() {
                Step::Solved(id) => return Outcome::Solved(id),
                Step::Exhausted => return Outcome::Exhausted,
                Step::Expanded => {}
            }
        }
    }

    /// Panics if `id` didn't come from this searcher
    pub fn state(&self, id: StateId) -> &State {
        &self.arena[id.0]
    }

    /// States from the initial one to `id`, both included
    pub fn path_to(&self, id: StateId) -> Vec<&State> {
        let mut path = Vec::new();
        let mut cur = Some(id);
        while let Some(id) = cur {
            let state = &self.arena[id.0];
            path.push(state);
            cur = state.parent;
        }
        path.reverse();
        path
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn into_stats(self) -> Stats {
        self.stats
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Number of states stored, including the ones already expanded
    pub fn arena_len(&self) -> usize {
        self.arena.len()
    }
}
