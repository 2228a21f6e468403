use fnv::FnvHashMap;

use crate::config::Heuristic;
use crate::data::{Entity, Occupant, Pos};
use crate::state::{Score, State};

impl Heuristic {
    /// Estimates the distance to the goal, less is better.
    ///
    /// `None` means the state is a dead end and can't lead to a solution.
    pub fn evaluate(self, state: &State) -> Option<Score> {
        match self {
            Heuristic::Null => Some(0),
            Heuristic::Manhattan => Some(manhattan(state)),
            Heuristic::Deadlock => deadlock_aware(state),
        }
    }
}

fn manhattan(state: &State) -> Score {
    let paired: Score = state
        .paired_boxes
        .iter()
        .zip(state.paired_storages.iter())
        .map(|(b, s)| b.pos.dist(s.pos))
        .sum();
    let generic: Score = state
        .generic_boxes
        .iter()
        .filter_map(|b| closest_storage_dist(b, &state.generic_storages))
        .sum();
    paired + generic
}

fn deadlock_aware(state: &State) -> Option<Score> {
    let mut stuck_cache = FnvHashMap::default();

    let mut goal_dist_sum = 0;
    for (b, s) in state.paired_boxes.iter().zip(state.paired_storages.iter()) {
        let dist = b.pos.dist(s.pos);
        if dist != 0 && stuck_memoized(state, b.pos, &mut stuck_cache) {
            return None;
        }
        goal_dist_sum += dist;
    }
    for b in &state.generic_boxes {
        // no generic storages - nothing to add or check
        if let Some(dist) = closest_storage_dist(b, &state.generic_storages) {
            if dist != 0 && stuck_memoized(state, b.pos, &mut stuck_cache) {
                return None;
            }
            goal_dist_sum += dist;
        }
    }
    Some(goal_dist_sum)
}

/// First minimum in storage order
fn closest_storage_dist(b: &Entity, storages: &[Entity]) -> Option<Score> {
    let mut min = None;
    for storage in storages {
        let dist = b.pos.dist(storage.pos);
        if min.map_or(true, |m| dist < m) {
            min = Some(dist);
        }
    }
    min
}

fn stuck_memoized(state: &State, box_pos: Pos, cache: &mut FnvHashMap<Pos, bool>) -> bool {
    if let Some(&stuck) = cache.get(&box_pos) {
        return stuck;
    }
    // placeholder so boxes blocking each other don't recurse forever
    cache.insert(box_pos, false);
    let stuck = is_stuck(state, box_pos, cache);
    cache.insert(box_pos, stuck);
    stuck
}

/// A box is stuck if two neighbors next to each other around the compass are immovable:
/// walls, the edge of the board or other stuck boxes.
fn is_stuck(state: &State, box_pos: Pos, cache: &mut FnvHashMap<Pos, bool>) -> bool {
    let mut immovable = [false; 4];
    for (i, &pos) in box_pos.neighbors().iter().enumerate() {
        immovable[i] = match state.grid.get(pos) {
            None | Some(Some(Occupant::Wall)) => true,
            Some(Some(Occupant::Box(_))) => stuck_memoized(state, pos, cache),
            Some(_) => false,
        };
    }

    // west wraps around to north
    (0..4).any(|i| immovable[i] && immovable[(i + 1) % 4])
}
