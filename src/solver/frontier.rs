use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::config::Algorithm;
use crate::state::{State, StateId};

/// States waiting to be expanded, the order depends on the algorithm
#[derive(Debug)]
pub enum Frontier {
    /// breadth first
    Fifo(VecDeque<StateId>),
    /// depth first
    Lifo(Vec<StateId>),
    /// Greedy best first orders by the heuristic score alone,
    /// A* by the move count plus the heuristic score.
    Priority {
        heap: BinaryHeap<Entry>,
        include_moves: bool,
        inserted: u64,
    },
}

impl Frontier {
    pub fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::BreadthFirst => Frontier::Fifo(VecDeque::new()),
            Algorithm::DepthFirst => Frontier::Lifo(Vec::new()),
            Algorithm::GreedyBestFirst => Frontier::priority(false),
            Algorithm::AStar => Frontier::priority(true),
        }
    }

    fn priority(include_moves: bool) -> Self {
        Frontier::Priority {
            heap: BinaryHeap::new(),
            include_moves,
            inserted: 0,
        }
    }

    /// `state` must be the state `id` refers to, the priority variant reads its scores
    pub fn add(&mut self, id: StateId, state: &State) {
        match self {
            Frontier::Fifo(queue) => queue.push_back(id),
            Frontier::Lifo(stack) => stack.push(id),
            Frontier::Priority {
                heap,
                include_moves,
                inserted,
            } => {
                let mut key = u64::from(state.heuristic_score());
                if *include_moves {
                    key += u64::from(state.move_count());
                }
                heap.push(Entry {
                    key,
                    order: *inserted,
                    id,
                });
                *inserted += 1;
            }
        }
    }

    pub fn pop(&mut self) -> Option<StateId> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front(),
            Frontier::Lifo(stack) => stack.pop(),
            Frontier::Priority { heap, .. } => heap.pop().map(|entry| entry.id),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Frontier::Fifo(queue) => queue.len(),
            Frontier::Lifo(stack) => stack.len(),
            Frontier::Priority { heap, .. } => heap.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    key: u64,
    order: u64,
    id: StateId,
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // intentionally reversed for BinaryHeap, ties go to the older entry
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.order.cmp(&self.order))
    }
}
