use log::trace;

use crate::data::{Dir, Entity, Occupant, Pos, Slot};
use crate::state::{State, StateId};

#[derive(Debug, Clone, Copy)]
enum Mover {
    Agent,
    Box(Slot),
}

/// Moves the agent one tile in `dir`, pushing a box if there is one in the way.
///
/// Returns the new state (a child of `state` which has `id` in the arena)
/// or `None` if the move is blocked. `state` itself is never modified.
pub fn attempt_move(state: &State, id: StateId, dir: Dir) -> Option<State> {
    let dest = state.agent.pos + dir;

    // off the grid counts as a wall
    let pushed = match *state.grid.get(dest)? {
        Some(Occupant::Wall) | Some(Occupant::Agent) => return None,
        Some(Occupant::Box(slot)) => {
            if !box_can_enter(state, dest + dir) {
                return None;
            }
            Some(slot)
        }
        Some(Occupant::Storage(_)) | None => None,
    };

    let mut next = state.fork(id, dir);
    if let Some(slot) = pushed {
        // box first so the agent finds whatever the box left behind
        relocate(&mut next, Mover::Box(slot), dir);
    }
    relocate(&mut next, Mover::Agent, dir);

    trace!(
        "{:?} {} from {:?}",
        dir,
        if pushed.is_some() { "push" } else { "step" },
        state.agent.pos
    );
    Some(next)
}

fn box_can_enter(state: &State, pos: Pos) -> bool {
    match state.grid.get(pos) {
        Some(None) | Some(Some(Occupant::Storage(_))) => true,
        // off the grid, wall or another box
        _ => false,
    }
}

fn entity_mut(state: &mut State, mover: Mover) -> &mut Entity {
    match mover {
        Mover::Agent => &mut state.agent,
        Mover::Box(slot) => state.box_entity_mut(slot),
    }
}

/// Moves one entity by one tile, the destination must be free or a storage
fn relocate(state: &mut State, mover: Mover, dir: Dir) {
    let (from, previously_on) = {
        let entity = entity_mut(state, mover);
        (entity.pos, entity.standing_on)
    };
    let to = from + dir;

    let standing_on = match state.grid[to] {
        Some(Occupant::Storage(slot)) => Some(slot),
        _ => None,
    };
    state.grid[to] = Some(match mover {
        Mover::Agent => Occupant::Agent,
        Mover::Box(slot) => Occupant::Box(slot),
    });
    state.grid[from] = previously_on.map(Occupant::Storage);

    let entity = entity_mut(state, mover);
    entity.pos = to;
    entity.standing_on = standing_on;
}
