use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::data::{Dir, Entity, Occupant, Pos, Slot};
use crate::vec2d::Vec2d;

pub type Score = u32;

/// Index of a state in the arena of the search that created it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(pub(crate) usize);

/// The part of a state that identifies it - used for deduplication
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Layout {
    agent: Pos,
    paired_boxes: Vec<Pos>,
    generic_boxes: Vec<Pos>,
}

/// One snapshot of the board.
///
/// Equality and hashing only look at the agent and the boxes (in list order),
/// how the state was reached doesn't matter.
#[derive(Debug, Clone)]
pub struct State {
    pub(crate) grid: Vec2d<Option<Occupant>>,
    pub(crate) agent: Entity,
    pub(crate) paired_boxes: Vec<Entity>,
    pub(crate) generic_boxes: Vec<Entity>,
    // storages never move so forks share them
    pub(crate) paired_storages: Rc<Vec<Entity>>,
    pub(crate) generic_storages: Rc<Vec<Entity>>,
    pub(crate) parent: Option<StateId>,
    pub(crate) last_move: Option<Dir>,
    pub(crate) heuristic_score: Score,
    pub(crate) move_count: u32,
}

impl State {
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// `None` for an empty tile, panics when `pos` is off the grid
    pub fn occupant(&self, pos: Pos) -> Option<Occupant> {
        self.grid[pos]
    }

    pub fn agent(&self) -> &Entity {
        &self.agent
    }

    pub fn paired_boxes(&self) -> &[Entity] {
        &self.paired_boxes
    }

    pub fn generic_boxes(&self) -> &[Entity] {
        &self.generic_boxes
    }

    pub fn paired_storages(&self) -> &[Entity] {
        &self.paired_storages
    }

    pub fn generic_storages(&self) -> &[Entity] {
        &self.generic_storages
    }

    pub fn parent(&self) -> Option<StateId> {
        self.parent
    }

    pub fn last_move(&self) -> Option<Dir> {
        self.last_move
    }

    pub fn heuristic_score(&self) -> Score {
        self.heuristic_score
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn is_goal(&self) -> bool {
        let paired_done = self
            .paired_boxes
            .iter()
            .zip(self.paired_storages.iter())
            .all(|(b, s)| b.pos == s.pos);
        // boxes and storages have equal counts so every box stored means every storage covered
        paired_done
            && self
                .generic_boxes
                .iter()
                .all(|b| self.generic_storages.iter().any(|s| s.pos == b.pos))
    }

    pub(crate) fn layout(&self) -> Layout {
        Layout {
            agent: self.agent.pos,
            paired_boxes: self.paired_boxes.iter().map(|b| b.pos).collect(),
            generic_boxes: self.generic_boxes.iter().map(|b| b.pos).collect(),
        }
    }

    pub(crate) fn box_entity(&self, slot: Slot) -> &Entity {
        match slot {
            Slot::Paired(i) => &self.paired_boxes[i],
            Slot::Generic(i) => &self.generic_boxes[i],
        }
    }

    pub(crate) fn box_entity_mut(&mut self, slot: Slot) -> &mut Entity {
        match slot {
            Slot::Paired(i) => &mut self.paired_boxes[i],
            Slot::Generic(i) => &mut self.generic_boxes[i],
        }
    }

    /// Copies everything that can change, the new state is a child of `parent`
    pub(crate) fn fork(&self, parent: StateId, dir: Dir) -> State {
        State {
            grid: self.grid.clone(),
            agent: self.agent,
            paired_boxes: self.paired_boxes.clone(),
            generic_boxes: self.generic_boxes.clone(),
            paired_storages: Rc::clone(&self.paired_storages),
            generic_storages: Rc::clone(&self.generic_storages),
            parent: Some(parent),
            last_move: Some(dir),
            heuristic_score: 0,
            move_count: self.move_count + 1,
        }
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.agent.pos == other.agent.pos
            && self
                .paired_boxes
                .iter()
                .map(|b| b.pos)
                .eq(other.paired_boxes.iter().map(|b| b.pos))
            && self
                .generic_boxes
                .iter()
                .map(|b| b.pos)
                .eq(other.generic_boxes.iter().map(|b| b.pos))
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // must agree with the Layout hash so both can be used as keys interchangeably
        self.layout().hash(state);
    }
}
