use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::rc::Rc;

use log::debug;

use crate::config::Format;
use crate::data::{Entity, Kind, Occupant, Pos, Slot, Tag};
use crate::solution_formatter::SolutionFormatter;
use crate::state::State;
use crate::state_formatter::StateFormatter;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleErr {
    NoAgent,
    MultipleAgents,
    OutOfBounds(Pos),
    Overlap(Pos),
    DuplicateIdentity(char),
    MissingStorage(char),
    MissingBox(char),
    BoxesStorages,
}

impl Display for PuzzleErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            PuzzleErr::NoAgent => write!(f, "No agent"),
            PuzzleErr::MultipleAgents => write!(f, "More than one agent"),
            PuzzleErr::OutOfBounds(pos) => {
                write!(f, "Entity outside the board at pos: [{}, {}]", pos.r, pos.c)
            }
            PuzzleErr::Overlap(pos) => {
                write!(f, "Incompatible entities at pos: [{}, {}]", pos.r, pos.c)
            }
            PuzzleErr::DuplicateIdentity(id) => {
                write!(f, "Identity {} used by more than one box or storage", id)
            }
            PuzzleErr::MissingStorage(id) => write!(f, "Box {} has no storage", id),
            PuzzleErr::MissingBox(id) => write!(f, "Storage {} has no box", id),
            PuzzleErr::BoxesStorages => write!(f, "Different number of generic boxes and storages"),
        }
    }
}

impl Error for PuzzleErr {}

/// A puzzle ready to be solved - the initial state and how it was written down
#[derive(Clone)]
pub struct Puzzle {
    state: State,
    format: Format,
}

impl Puzzle {
    /// Builds the initial state from a list of entities on a `rows` x `cols` board.
    ///
    /// Paired boxes and storages are matched by their identity letter,
    /// both lists are ordered by it. A box or the agent may start on top of a storage,
    /// any other overlap is an error.
    pub fn new(rows: usize, cols: usize, entities: Vec<Entity>) -> Result<Puzzle, PuzzleErr> {
        let mut agent = None;
        let mut walls = Vec::new();
        let mut paired_boxes = Vec::new();
        let mut paired_storages = Vec::new();
        let mut generic_boxes = Vec::new();
        let mut generic_storages = Vec::new();

        let mut grid = Vec2d::new(rows, cols, None);

        for mut entity in entities {
            if !grid.contains(entity.pos) {
                return Err(PuzzleErr::OutOfBounds(entity.pos));
            }
            entity.standing_on = None;
            match entity.kind {
                Kind::Agent => {
                    if agent.is_some() {
                        return Err(PuzzleErr::MultipleAgents);
                    }
                    agent = Some(entity);
                }
                Kind::Wall => walls.push(entity.pos),
                Kind::Box(Tag::Paired(id)) => {
                    entity.kind = Kind::Box(Tag::Paired(id.to_ascii_lowercase()));
                    paired_boxes.push(entity);
                }
                Kind::Storage(Tag::Paired(id)) => {
                    entity.kind = Kind::Storage(Tag::Paired(id.to_ascii_lowercase()));
                    paired_storages.push(entity);
                }
                Kind::Box(Tag::Generic) => generic_boxes.push(entity),
                Kind::Storage(Tag::Generic) => generic_storages.push(entity),
            }
        }
        let mut agent = agent.ok_or(PuzzleErr::NoAgent)?;

        pair_up(&mut paired_boxes, &mut paired_storages)?;
        if generic_boxes.len() != generic_storages.len() {
            return Err(PuzzleErr::BoxesStorages);
        }

        // storages first so boxes and the agent can be placed on top
        for (i, storage) in paired_storages.iter().enumerate() {
            place(&mut grid, storage.pos, Occupant::Storage(Slot::Paired(i)))?;
        }
        for (i, storage) in generic_storages.iter().enumerate() {
            place(&mut grid, storage.pos, Occupant::Storage(Slot::Generic(i)))?;
        }
        for &pos in &walls {
            place(&mut grid, pos, Occupant::Wall)?;
        }
        for (i, b) in paired_boxes.iter_mut().enumerate() {
            b.standing_on = place_over_storage(&mut grid, b.pos, Occupant::Box(Slot::Paired(i)))?;
        }
        for (i, b) in generic_boxes.iter_mut().enumerate() {
            b.standing_on = place_over_storage(&mut grid, b.pos, Occupant::Box(Slot::Generic(i)))?;
        }
        agent.standing_on = place_over_storage(&mut grid, agent.pos, Occupant::Agent)?;

        debug!(
            "Built puzzle {}x{}: {} paired and {} generic boxes, {} walls",
            rows,
            cols,
            paired_boxes.len(),
            generic_boxes.len(),
            walls.len()
        );

        let state = State {
            grid,
            agent,
            paired_boxes,
            generic_boxes,
            paired_storages: Rc::new(paired_storages),
            generic_storages: Rc::new(generic_storages),
            parent: None,
            last_move: None,
            heuristic_score: 0,
            move_count: 0,
        };
        Ok(Puzzle {
            state,
            format: Format::Native,
        })
    }

    pub(crate) fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn format_state<'a>(&self, state: &'a State) -> StateFormatter<'a> {
        StateFormatter::new(state, self.format)
    }

    /// `path` should start with this puzzle's initial state
    pub fn format_solution<'a>(&self, path: &'a [State]) -> SolutionFormatter<'a> {
        SolutionFormatter::new(path, self.format)
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_state(&self.state))
    }
}

impl Debug for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

fn identity(entity: &Entity) -> char {
    match entity.kind {
        Kind::Box(Tag::Paired(id)) | Kind::Storage(Tag::Paired(id)) => id,
        _ => unreachable!("only paired entities have an identity"),
    }
}

/// Sorts both lists by identity and makes sure the same index means the same identity
fn pair_up(boxes: &mut Vec<Entity>, storages: &mut Vec<Entity>) -> Result<(), PuzzleErr> {
    for list in [&mut *boxes, &mut *storages].iter_mut() {
        list.sort_by_key(identity);
        for pair in list.windows(2) {
            if identity(&pair[0]) == identity(&pair[1]) {
                return Err(PuzzleErr::DuplicateIdentity(identity(&pair[0])));
            }
        }
    }

    let mut storage_ids = storages.iter().map(identity);
    for b in boxes.iter() {
        let id = identity(b);
        match storage_ids.next() {
            Some(s) if s == id => {}
            Some(s) if s < id => return Err(PuzzleErr::MissingBox(s)),
            _ => return Err(PuzzleErr::MissingStorage(id)),
        }
    }
    if let Some(s) = storage_ids.next() {
        return Err(PuzzleErr::MissingBox(s));
    }
    Ok(())
}

fn place(grid: &mut Vec2d<Option<Occupant>>, pos: Pos, occupant: Occupant) -> Result<(), PuzzleErr> {
    if grid[pos].is_some() {
        return Err(PuzzleErr::Overlap(pos));
    }
    grid[pos] = Some(occupant);
    Ok(())
}

/// Returns the storage that ends up under the new occupant, if any
fn place_over_storage(
    grid: &mut Vec2d<Option<Occupant>>,
    pos: Pos,
    occupant: Occupant,
) -> Result<Option<Slot>, PuzzleErr> {
    match grid[pos] {
        None => {
            grid[pos] = Some(occupant);
            Ok(None)
        }
        Some(Occupant::Storage(slot)) => {
            grid[pos] = Some(occupant);
            Ok(Some(slot))
        }
        Some(_) => Err(PuzzleErr::Overlap(pos)),
    }
}
